use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::FieldCore;
use crate::point::Point;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Surface size in whole device pixels for a CSS size.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn surface_px(css: f64) -> u32 {
    if css.is_finite() && css > 0.0 { css.floor().min(f64::from(u32::MAX)) as u32 } else { 0 }
}

/// The full particle engine. Wraps `FieldCore` and owns the browser canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    rng: SmallRng,
    pub core: FieldCore,
}

impl Engine {
    /// Create an engine bound to `canvas` and its 2D context.
    ///
    /// The field starts empty; call [`Engine::resize`] before the first frame.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, seed: u64) -> Self {
        Self { canvas, ctx, rng: SmallRng::seed_from_u64(seed), core: FieldCore::new() }
    }

    // --- Viewport ---

    /// Resize the canvas backing store and regenerate the population.
    pub fn resize(&mut self, width_css: f64, height_css: f64) {
        let width = surface_px(width_css);
        let height = surface_px(height_css);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.resize(f64::from(width), f64::from(height), &mut self.rng);
    }

    // --- Pointer ---

    pub fn set_pointer(&mut self, screen_pt: Point) {
        self.core.set_pointer(screen_pt);
    }

    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    // --- Frame ---

    /// Advance the simulation one step and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails; the simulation has still advanced.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.update();
        render::draw(&self.ctx, &self.core)
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.core.particles.len()
    }
}
