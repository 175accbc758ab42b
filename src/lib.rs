//! Folio: client-side behaviour for a static portfolio page.
//!
//! Compiled to WASM and loaded by the page; everything runs in the browser.
//!
//! | Module       | Responsibility                                            |
//! |--------------|-----------------------------------------------------------|
//! | `config`     | Selectors, classes, timings, labels; page-overridable      |
//! | `error`      | Component setup and storage failures                      |
//! | `state`      | Pure state machines: theme, reveal, bars, nav, menu       |
//! | `util`       | Throttle/debounce cores and (hydrate) DOM helpers         |
//! | `components` | (hydrate) DOM wiring, one component per concern           |
//!
//! The particle background lives in the sibling `particles` crate and is
//! hosted by `components::particle_host`.

pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod components;

/// WASM entry point: install logging, apply the stored theme, then mount
/// components once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let ctx = match components::PageContext::from_window() {
        Ok(ctx) => ctx,
        Err(err) => {
            log::error!("folio not started: {err}");
            return;
        }
    };
    log::set_max_level(ctx.config.log_level().to_level_filter());
    log::info!("folio starting");

    components::theme::apply_persisted(&ctx);
    components::on_ready(ctx);
}
