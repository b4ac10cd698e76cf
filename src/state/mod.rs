//! UI state machines for the page's interactive core.
//!
//! DESIGN
//! ======
//! Each module holds plain, browser-free state so the timing and
//! classification logic can be tested with ordinary `cargo test`. The
//! components own the signals; these types own the transitions.

pub mod pricing;
pub mod section;
pub mod theme;
pub mod typewriter;
