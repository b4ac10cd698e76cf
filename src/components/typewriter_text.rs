//! Animated typewriter line for the hero headline.
//!
//! Owns the cycle state machine from [`crate::state::typewriter`] and its
//! timer chain: each tick schedules exactly one successor with the delay
//! the machine returns, and the chain stops when the component unmounts.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;

use crate::state::typewriter::{TYPE_MS, Typewriter};

/// Typewriter line cycling through `phrases`, with a blinking cursor.
///
/// A misconfigured (empty) phrase list disables the cycle and logs a
/// warning; the line renders empty rather than failing the page.
#[component]
pub fn TypewriterText(phrases: Vec<String>) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    match Typewriter::new(phrases) {
        Ok(mut machine) => {
            let cancelled = Rc::new(Cell::new(false));
            // `on_cleanup` requires `Send + Sync`; the CSR-local `Rc` is
            // neither, so wrap it the way Leptos itself does for !Send
            // handles. Never touched across threads in a CSR build.
            let stop = SendWrapper::new(Rc::clone(&cancelled));
            on_cleanup(move || stop.set(true));

            leptos::task::spawn_local(async move {
                let mut delay = TYPE_MS;
                loop {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(delay))).await;
                    if cancelled.get() {
                        break;
                    }
                    delay = machine.tick();
                    set_text.set(machine.text().to_owned());
                }
            });
        }
        Err(e) => leptos::logging::warn!("typewriter disabled: {e}"),
    }

    view! {
        <span class="typewriter">
            <span class="typewriter__text">{text}</span>
            <span class="typewriter__cursor" aria-hidden="true"></span>
        </span>
    }
}
