//! A single particle and its per-frame physics.
//!
//! Velocities are in px per frame: the loop runs once per display frame and
//! treats every frame as one discrete timestep.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::consts::{
    DRAG, MAX_INITIAL_SPEED, OPACITY_MIN, OPACITY_SPAN, POINTER_FORCE, POINTER_RADIUS, RADIUS_MIN, RADIUS_SPAN,
};
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Spawn a particle uniformly inside a `width` x `height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
            vy: (rng.random::<f64>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
            radius: RADIUS_MIN + rng.random::<f64>() * RADIUS_SPAN,
            opacity: OPACITY_MIN + rng.random::<f64>() * OPACITY_SPAN,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Add the pointer's repulsion to this particle's velocity.
    pub fn apply_pointer(&mut self, pointer: Point) {
        let (ax, ay) = pointer_acceleration(self.position(), pointer);
        self.vx += ax;
        self.vy += ay;
    }

    /// Damp, integrate, then reflect off and clamp to `[0, width] x [0, height]`.
    pub fn step(&mut self, width: f64, height: f64) {
        self.vx *= DRAG;
        self.vy *= DRAG;
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
        self.x = self.x.clamp(0.0, width.max(0.0));
        self.y = self.y.clamp(0.0, height.max(0.0));
    }
}

/// Repulsive acceleration the pointer exerts on a particle at `at`.
///
/// Falls off linearly from [`POINTER_FORCE`] at the pointer to zero at
/// [`POINTER_RADIUS`]. A particle sitting exactly on the pointer has no
/// defined direction and gets no push.
#[must_use]
pub fn pointer_acceleration(at: Point, pointer: Point) -> (f64, f64) {
    let d = at.distance(pointer);
    if d >= POINTER_RADIUS || d <= f64::EPSILON {
        return (0.0, 0.0);
    }
    let f = (1.0 - d / POINTER_RADIUS) * POINTER_FORCE;
    ((at.x - pointer.x) / d * f, (at.y - pointer.y) / d * f)
}
