//! Hosts the `particles` engine on the background canvas.
//!
//! Owns everything browser-side that the engine itself does not: the
//! reduced-motion check, viewport-sized resizing, pointer tracking, and the
//! `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use particles::engine::Engine;
use particles::point::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::PageContext;
use crate::error::SetupError;
use crate::util::dom;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("matchMedia failed: {err:?}");
            false
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 2f64.powi(53)) as u64
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(window: &Window, holder: &FrameCallback) {
    let requested = match holder.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
        None => return,
    };
    if let Err(err) = requested {
        log::warn!("particle loop stopped: {err:?}");
    }
}

/// Start the render loop. It runs for the lifetime of the page.
fn run_loop(window: Window, engine: Rc<RefCell<Engine>>) {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        if let Err(err) = engine.borrow_mut().frame() {
            log::warn!("particle frame failed: {err:?}");
        }
        request_frame(&window_for_cb, &holder_for_cb);
    });
    *holder.borrow_mut() = Some(cb);
    request_frame(&window, &holder);
}

/// Size the field to the viewport, track the pointer, and start animating.
///
/// # Errors
///
/// - [`SetupError::ReducedMotion`] when the user prefers reduced motion.
/// - [`SetupError::MissingElement`] when there is no particle canvas.
/// - [`SetupError::ContextUnavailable`] when the canvas has no 2D context.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    if prefers_reduced_motion(&ctx.window) {
        return Err(SetupError::ReducedMotion);
    }

    let canvas_id = &ctx.config.selectors.particle_canvas_id;
    let canvas = ctx
        .document
        .get_element_by_id(canvas_id)
        .and_then(|el| dom::cast::<HtmlCanvasElement>(el, canvas_id))
        .ok_or_else(|| SetupError::MissingElement(format!("#{canvas_id}")))?;
    let context = canvas
        .get_context("2d")?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SetupError::ContextUnavailable)?;

    let engine = Rc::new(RefCell::new(Engine::new(canvas, context, random_seed())));
    engine
        .borrow_mut()
        .resize(ctx.viewport_width(), ctx.viewport_height());
    log::debug!("particle field: {} particles", engine.borrow().particle_count());

    let on_resize = Rc::clone(&engine);
    let page = ctx.clone();
    dom::listen(&ctx.window, "resize", move |_| {
        let mut engine = on_resize.borrow_mut();
        engine.resize(page.viewport_width(), page.viewport_height());
        log::debug!("particle field resized: {} particles", engine.particle_count());
    })?;

    let on_move = Rc::clone(&engine);
    dom::listen_passive(&ctx.document, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let at = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            on_move.borrow_mut().set_pointer(at);
        }
    })?;

    let on_leave = Rc::clone(&engine);
    dom::listen(&ctx.document, "mouseleave", move |_| on_leave.borrow_mut().clear_pointer())?;

    run_loop(ctx.window.clone(), engine);
    Ok(())
}
