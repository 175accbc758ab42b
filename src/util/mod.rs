//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timing utilities are split into a clock-free core (tested natively) and a
//! hydrate-only wrapper driven by browser timers. `dom` isolates web-sys glue.

pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod throttle;
