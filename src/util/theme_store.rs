//! Theme persistence and application.
//!
//! Reads the saved preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates the class in the same synchronous call, so no paint observes
//! the two out of sync. When storage is unavailable the flag keeps working
//! in-memory for the session.

use crate::state::theme::ThemeState;

const STORAGE_KEY: &str = "theme";
const DARK_VALUE: &str = "dark";
const LIGHT_VALUE: &str = "light";

/// Read the persisted theme preference.
///
/// Absence of a stored value, or of storage itself, means light.
#[must_use]
pub fn read_preference() -> ThemeState {
    let Some(window) = web_sys::window() else {
        return ThemeState::default();
    };
    match window.local_storage() {
        Ok(Some(storage)) => match storage.get_item(STORAGE_KEY) {
            Ok(Some(value)) => ThemeState { dark: value == DARK_VALUE },
            _ => ThemeState::default(),
        },
        _ => {
            log::debug!("localStorage unavailable; theme preference not persisted");
            ThemeState::default()
        }
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: ThemeState) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(el) = root {
        let class_list = el.class_list();
        let result = if theme.dark {
            class_list.add_1(DARK_VALUE)
        } else {
            class_list.remove_1(DARK_VALUE)
        };
        if result.is_err() {
            log::debug!("failed to update the root theme class");
        }
    }
}

/// Flip the theme, apply the root class, and persist the new preference.
pub fn toggle(current: ThemeState) -> ThemeState {
    let next = current.toggled();
    apply(next);

    let value = if next.dark { DARK_VALUE } else { LIGHT_VALUE };
    let storage = web_sys::window().and_then(|w| match w.local_storage() {
        Ok(s) => s,
        Err(_) => None,
    });
    match storage {
        Some(storage) => {
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::debug!("theme preference write failed; continuing in-memory");
            }
        }
        None => log::debug!("localStorage unavailable; theme kept in-memory only"),
    }
    next
}
