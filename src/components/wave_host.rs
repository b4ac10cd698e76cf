//! Bridge component between the Leptos UI and the imperative
//! `wavefield::Surface`.
//!
//! Mounts the full-viewport `<canvas>` behind the page, builds a surface
//! for the current theme, and drives the `requestAnimationFrame` loop.
//! Point brightness is fixed per surface, so a theme flip tears the
//! running animation down and builds a fresh one. A failed 2D context
//! leaves the page without a background — and affects nothing else.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wavefield::surface::Surface;

use crate::state::theme::ThemeState;

/// A running background animation: frame loop plus resize listener.
/// Dropping it cancels the pending frame and detaches the listener.
struct WaveAnimation {
    raf_id: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    resize: Closure<dyn Fn()>,
}

impl Drop for WaveAnimation {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.raf_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
        self.frame.borrow_mut().take();
    }
}

/// Request the next frame and remember its id for cancellation.
fn schedule_frame(
    frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = frame.borrow().as_ref() {
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(_) => leptos::logging::warn!("requestAnimationFrame unavailable; wave stopped"),
        }
    }
}

/// Size the surface (canvas backing store + projection) to the viewport.
fn size_to_viewport(surface: &Rc<RefCell<Surface>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    surface
        .borrow_mut()
        .set_viewport(width, height, window.device_pixel_ratio());
}

/// Build a surface on the canvas and start its frame loop.
///
/// Returns `None` when the rendering backend is unavailable; the page
/// simply has no animated background then.
fn start(canvas: web_sys::HtmlCanvasElement, dark: bool) -> Option<WaveAnimation> {
    let window = web_sys::window()?;
    let surface = match Surface::new(canvas, dark) {
        Ok(surface) => Rc::new(RefCell::new(surface)),
        Err(e) => {
            leptos::logging::warn!("background animation disabled: {e}");
            return None;
        }
    };
    size_to_viewport(&surface);

    // Resize re-projects; the grid itself is never rebuilt.
    let resize_surface = Rc::clone(&surface);
    let resize = Closure::<dyn Fn()>::new(move || size_to_viewport(&resize_surface));
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok()?;

    // Self-rescheduling frame loop over the monotonic phase counter.
    let raf_id = Rc::new(Cell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let loop_frame = Rc::clone(&frame);
    let loop_raf = Rc::clone(&raf_id);
    let loop_surface = Rc::clone(&surface);
    *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        {
            let mut surface = loop_surface.borrow_mut();
            surface.step();
            if let Err(e) = surface.render() {
                leptos::logging::warn!("wave frame dropped: {e:?}");
            }
        }
        schedule_frame(&loop_frame, &loop_raf);
    }));
    schedule_frame(&frame, &raf_id);

    Some(WaveAnimation { raf_id, frame, resize })
}

/// Fixed background canvas host.
#[component]
pub fn WaveHost() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let animation: Rc<RefCell<Option<WaveAnimation>>> = Rc::new(RefCell::new(None));

    // Rebuild the surface whenever the theme flips (and on first mount,
    // once the canvas ref populates). The previous animation is dropped
    // first so exactly one frame loop runs at a time.
    let slot = Rc::clone(&animation);
    Effect::new(move || {
        let dark = theme.get().dark;
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        slot.borrow_mut().take();
        *slot.borrow_mut() = start(canvas, dark);
    });

    // `on_cleanup` requires `Send + Sync`; the animation slot holds
    // !Send web-sys closures, so wrap it the way Leptos does for !Send
    // handles. Never touched across threads in a CSR build.
    let animation = SendWrapper::new(animation);
    on_cleanup(move || {
        animation.borrow_mut().take();
    });

    view! { <canvas node_ref=canvas_ref class="wave-host" aria-hidden="true"></canvas> }
}
