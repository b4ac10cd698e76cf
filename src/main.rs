//! Browser entry point: panic hook, console logging, and the root mount.

use smarthr_landing::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(App);
}
