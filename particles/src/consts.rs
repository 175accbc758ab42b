//! Shared numeric constants for the particles crate.

// ── Population ──────────────────────────────────────────────────

/// Hard cap on the number of particles regardless of surface area.
pub const MAX_PARTICLES: usize = 80;

/// Surface area (CSS px²) allotted to each particle.
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

/// Largest initial speed per axis, in px per frame.
pub const MAX_INITIAL_SPEED: f64 = 0.2;

/// Smallest particle radius.
pub const RADIUS_MIN: f64 = 1.2;

/// Width of the radius range above [`RADIUS_MIN`].
pub const RADIUS_SPAN: f64 = 1.4;

/// Smallest particle opacity.
pub const OPACITY_MIN: f64 = 0.5;

/// Width of the opacity range above [`OPACITY_MIN`].
pub const OPACITY_SPAN: f64 = 0.45;

// ── Physics ─────────────────────────────────────────────────────

/// Pointer interaction radius in px.
pub const POINTER_RADIUS: f64 = 120.0;

/// Peak repulsive acceleration at the pointer.
pub const POINTER_FORCE: f64 = 0.08;

/// Per-frame velocity damping factor.
pub const DRAG: f64 = 0.98;

// ── Rendering ───────────────────────────────────────────────────

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 140.0;

/// Line alpha at the link distance.
pub const LINE_ALPHA_BASE: f64 = 0.16;

/// Line alpha for coincident particles.
pub const LINE_ALPHA_MAX: f64 = 0.4;

/// Connecting line width in px.
pub const LINE_WIDTH: f64 = 0.8;

/// RGB triple for particles and lines. Same in both themes.
pub const PARTICLE_RGB: &str = "200, 169, 110";
