//! Floating navigation: brand block, section pill, theme toggle, CTA.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{HOME_SECTION, NAV_ITEMS};
use crate::state::theme::ThemeState;
use crate::util::scroll_tracker::ScrollTracker;
use crate::util::theme_store;

/// Smooth-scroll the viewport to a section by id.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Fixed navigation bar.
///
/// Owns the active-section signal and its scroll tracker; clicking an
/// entry sets it active immediately and smooth-scrolls to the section,
/// after which the tracker keeps the highlight in sync.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let (active, set_active) = signal(HOME_SECTION);

    let tracker = ScrollTracker::attach(move |id| set_active.set(id));
    if tracker.is_none() {
        leptos::logging::warn!("scroll tracking unavailable; nav highlight is static");
    }
    // `on_cleanup` requires `Send + Sync`; the tracker holds a !Send
    // boxed closure, so wrap it as Leptos does for !Send handles. The
    // tracker's `Drop` still runs (on the same thread) at cleanup.
    let tracker = SendWrapper::new(tracker);
    on_cleanup(move || drop(tracker));

    let on_toggle_theme = move |_| {
        let next = theme_store::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <div class="navbar__logo">
                    <span class="material-symbols-outlined">"home_work"</span>
                </div>
                <div class="navbar__wordmark">
                    <span class="navbar__name">
                        "Smart" <span class="navbar__name-accent">"HR"</span>
                    </span>
                    <span class="navbar__tagline">"Solutions 4U"</span>
                </div>
            </div>

            <nav class="navbar__pill">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        let item_class = move || {
                            if active.get() == id {
                                "navbar__item navbar__item--active"
                            } else {
                                "navbar__item"
                            }
                        };
                        let on_click = move |_| {
                            set_active.set(id);
                            scroll_to_section(id);
                        };
                        view! {
                            <button class=item_class on:click=on_click>
                                <span class="material-symbols-outlined navbar__item-icon">
                                    {item.icon}
                                </span>
                                <span class="navbar__item-label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="navbar__actions">
                <button
                    class="navbar__theme-toggle"
                    on:click=on_toggle_theme
                    aria-label="Toggle theme"
                >
                    <span class="material-symbols-outlined">
                        {move || if theme.get().dark { "light_mode" } else { "dark_mode" }}
                    </span>
                </button>
                <button
                    class="btn btn--primary navbar__cta"
                    on:click=move |_| {
                        set_active.set("contact");
                        scroll_to_section("contact");
                    }
                >
                    "Get Started"
                </button>
            </div>
        </header>
    }
}
