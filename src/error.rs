//! Error types.
//!
//! Nothing on this page is fatal. A [`SetupError`] means a subsystem's
//! precondition was not met at mount time; the subsystem is skipped once and
//! the rest of the page carries on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a subsystem declined to mount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The user asked the platform for reduced motion.
    #[error("reduced motion requested")]
    ReducedMotion,
    /// A DOM collaborator the subsystem needs is not on the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// The canvas exists but would not hand out a 2D context.
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
    /// Not running inside a browser window.
    #[error("no browser window")]
    NoWindow,
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

/// Failure reaching the theme preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
