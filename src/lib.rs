//! # smarthr-landing
//!
//! Leptos + WASM marketing site for the Smart HR 4U platform — a
//! single-page landing experience for an HR SaaS aimed at Malaysian SMEs.
//!
//! This crate contains the page components, the UI state machines
//! (theme flag, scroll-synchronized navigation, typewriter cycle, pricing
//! period), browser glue for persistence and scroll sampling, and the
//! static page content. It integrates with the `wavefield` crate for the
//! animated dot-wave background via the `WaveHost` bridge component.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;
