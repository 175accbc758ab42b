//! DOM-bound page components (hydrate only).
//!
//! ARCHITECTURE
//! ============
//! Each component wires browser events for one concern to a state machine in
//! [`crate::state`] and mirrors the result back into the DOM. Components do
//! not call each other; they share only the [`PageContext`]. A component
//! whose DOM collaborators are missing returns a [`SetupError`] from `mount`
//! and is skipped, leaving the rest of the page unaffected.

pub mod bars;
pub mod menu;
pub mod nav;
pub mod particle_host;
pub mod reveal;
pub mod theme;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::error::SetupError;
use crate::util::dom;

/// Window, document, and config, shared by every component.
#[derive(Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
}

impl PageContext {
    /// Capture the current window and read the page config.
    ///
    /// # Errors
    ///
    /// [`SetupError::NoWindow`] outside a browser document.
    pub fn from_window() -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoWindow)?;
        let config = Rc::new(PageConfig::from_document(&document));
        Ok(Self { window, document, config })
    }

    pub fn query<T: JsCast>(&self, selector: &str) -> Option<T> {
        dom::first(self.document.query_selector(selector), selector)
    }

    pub fn query_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
        dom::all(self.document.query_selector_all(selector), selector)
    }

    /// Like [`PageContext::query`], but a missing element is a [`SetupError`].
    ///
    /// # Errors
    ///
    /// [`SetupError::MissingElement`] naming `selector`.
    pub fn require<T: JsCast>(&self, selector: &str) -> Result<T, SetupError> {
        self.query(selector)
            .ok_or_else(|| SetupError::MissingElement(selector.to_owned()))
    }

    /// Current viewport width in CSS pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        viewport_dimension(self.window.inner_width(), "innerWidth")
    }

    /// Current viewport height in CSS pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        viewport_dimension(self.window.inner_height(), "innerHeight")
    }
}

fn viewport_dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, what: &str) -> f64 {
    match value {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("{what} unavailable: {err:?}");
            0.0
        }
    }
}

type Mount = fn(&PageContext) -> Result<(), SetupError>;

const MOUNTS: [(&str, Mount); 6] = [
    ("theme", theme::mount),
    ("reveal", reveal::mount),
    ("bars", bars::mount),
    ("nav", nav::mount),
    ("menu", menu::mount),
    ("particles", particle_host::mount),
];

/// Mount every component, skipping any whose preconditions are not met.
pub fn init_page(ctx: &PageContext) {
    for (name, mount) in MOUNTS {
        match mount(ctx) {
            Ok(()) => log::info!("{name} mounted"),
            Err(err) => log::warn!("{name} skipped: {err}"),
        }
    }
}

/// Run [`init_page`] once the DOM is parsed.
pub fn on_ready(ctx: PageContext) {
    if ctx.document.ready_state() != "loading" {
        init_page(&ctx);
        return;
    }
    let document = ctx.document.clone();
    let mut pending = Some(ctx);
    let result = dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(ctx) = pending.take() {
            init_page(&ctx);
        }
    });
    dom::warn_on_err(result, "DOMContentLoaded listener");
}
