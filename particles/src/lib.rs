//! Particle background simulation for the profile page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! decorative particle field drawn behind the page: population sizing,
//! pointer repulsion, drag, boundary reflection, and proximity links between
//! nearby particles. The host crate is responsible only for wiring DOM events
//! (resize, pointer, animation frames) to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound [`engine::Engine`] wrapping the canvas |
//! | [`field`] | Testable [`field::FieldCore`]: population and per-frame update |
//! | [`particle`] | A single particle and its physics step |
//! | [`point`] | Screen-space point type |
//! | [`render`] | Draws the field to a 2D context |
//! | [`consts`] | Shared numeric constants (radii, forces, alpha ramps) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod particle;
pub mod point;
pub mod render;
