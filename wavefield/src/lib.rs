//! Procedural dot-wave background for the landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of the background canvas: simulating a grid of points
//! rippled by two crossed sine waves, projecting them through a fixed
//! perspective camera, and drawing the result to a 2D context. The host
//! Leptos layer is responsible only for mounting the `<canvas>`, driving
//! the frame loop, and forwarding viewport resizes.
//!
//! The simulation is deliberately split from the browser: everything up to
//! the final draw call is a pure function of the grid indices and a
//! monotonically increasing phase counter, so it can be tested without a
//! rendering context.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | Surface lifecycle and testable [`surface::SurfaceCore`] |
//! | [`grid`] | The wave grid and the pure height function |
//! | [`camera`] | Perspective projection onto the viewport |
//! | [`render`] | Frame drawing (the only module touching the 2D context) |
//! | [`consts`] | Shared numeric constants (grid size, wave shape, camera) |

pub mod camera;
pub mod consts;
pub mod grid;
pub mod render;
pub mod surface;
