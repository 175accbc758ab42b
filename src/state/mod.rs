//! Page state machines.
//!
//! DESIGN
//! ======
//! Every decision the page makes lives here as plain data and functions with
//! no browser dependency, so it runs under a native `cargo test`. The
//! `components` layer only reads the DOM into these types and writes their
//! results back.

pub mod bars;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod theme;
