//! Window scroll sampling for the navigation highlighter.
//!
//! Owns the registered scroll closure; dropping the tracker detaches the
//! listener so no callback ever fires against an unmounted navbar. The
//! classification itself lives in [`crate::state::section`] — this module
//! only gathers geometry and publishes the result.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::content::{HOME_SECTION, NAV_ITEMS};
use crate::state::section::{self, SectionRect};

/// A live subscription to the window scroll stream.
pub struct ScrollTracker {
    closure: Closure<dyn Fn()>,
}

impl ScrollTracker {
    /// Attach a scroll listener that publishes the active section id
    /// through `on_active`.
    ///
    /// Samples once immediately so the indicator is correct before the
    /// first scroll event. Returns `None` outside a browser environment
    /// or when the listener cannot be registered.
    pub fn attach(on_active: impl Fn(&'static str) + 'static) -> Option<Self> {
        let window = web_sys::window()?;

        let sample = move || {
            if let Some(id) = sample_active_section() {
                on_active(id);
            }
        };
        sample();

        let closure = Closure::<dyn Fn()>::new(sample);
        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        }
    }
}

/// One sample: gather the mounted sections' viewport rectangles in nav
/// order and classify. Sections without a DOM region are skipped.
fn sample_active_section() -> Option<&'static str> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let rects: Vec<SectionRect> = NAV_ITEMS
        .iter()
        .filter_map(|item| {
            document.get_element_by_id(item.id).map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionRect { id: item.id, top: rect.top(), bottom: rect.bottom() }
            })
        })
        .collect();

    section::active_section(HOME_SECTION, scroll_y, &rects)
}
