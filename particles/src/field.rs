//! The particle field: surface size, population, pointer, and the frame update.
//!
//! Separated from [`crate::engine::Engine`] so it can be tested without a
//! canvas or any other browser dependency.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{AREA_PER_PARTICLE, LINE_ALPHA_BASE, LINE_ALPHA_MAX, LINK_DISTANCE, MAX_PARTICLES};
use crate::particle::Particle;
use crate::point::Point;

/// A connecting line between two particles, by index into the population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

/// Number of particles for a surface of the given size.
///
/// One particle per [`AREA_PER_PARTICLE`] px², capped at [`MAX_PARTICLES`].
/// Tiny surfaces get zero particles.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width * height).max(0.0);
    let by_area = (area / AREA_PER_PARTICLE).floor() as usize;
    by_area.min(MAX_PARTICLES)
}

/// Opacity of a link between two particles `distance` px apart.
///
/// `None` when the pair is too far apart to be joined.
#[must_use]
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance >= LINK_DISTANCE {
        return None;
    }
    Some(LINE_ALPHA_BASE + (1.0 - distance / LINK_DISTANCE) * (LINE_ALPHA_MAX - LINE_ALPHA_BASE))
}

/// Simulation state for the whole field.
#[derive(Debug, Clone, Default)]
pub struct FieldCore {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    pub pointer: Option<Point>,
}

impl FieldCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new surface size and regenerate the whole population.
    ///
    /// Existing particles are discarded, not migrated.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, height);
        self.particles = (0..count).map(|_| Particle::random(rng, width, height)).collect();
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        for p in &mut self.particles {
            if let Some(pointer) = pointer {
                p.apply_pointer(pointer);
            }
            p.step(self.width, self.height);
        }
    }

    /// Every unordered pair of particles close enough to be joined.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |a| {
            ((a + 1)..particles.len()).filter_map(move |b| {
                let distance = particles[a].position().distance(particles[b].position());
                link_alpha(distance).map(|alpha| Link { a, b, alpha })
            })
        })
    }
}
