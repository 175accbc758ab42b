//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels; it does
//! not mutate simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{LINE_WIDTH, PARTICLE_RGB};
use crate::field::FieldCore;

/// CSS colour string for the particle hue at `alpha`.
#[must_use]
pub fn rgba(alpha: f64) -> String {
    format!("rgba({PARTICLE_RGB}, {alpha})")
}

/// Draw the full frame: clear, particles, then links.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &FieldCore) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    for p in &field.particles {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(&rgba(p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(LINE_WIDTH);
    for link in field.links() {
        let a = &field.particles[link.a];
        let b = &field.particles[link.b];
        ctx.set_stroke_style_str(&rgba(link.alpha));
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    }

    Ok(())
}
