//! Page configuration: DOM selectors, timings, thresholds, and labels.
//!
//! Every field has a default matching the stock page markup, so an absent
//! config block means "use defaults". A page may override any subset by
//! embedding JSON in `<script type="application/json" id="folio-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::theme::Theme;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub timing: Timing,
    pub reveal: RevealOptions,
    pub bars: BarOptions,
    pub nav: NavOptions,
    pub menu: MenuOptions,
    pub labels: Labels,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: Theme,
    /// `log` level name (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            timing: Timing::default(),
            reveal: RevealOptions::default(),
            bars: BarOptions::default(),
            nav: NavOptions::default(),
            menu: MenuOptions::default(),
            labels: Labels::default(),
            storage_key: "theme".to_owned(),
            default_theme: Theme::Dark,
            log_level: "warn".to_owned(),
        }
    }
}

/// Where each DOM collaborator lives.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub reveal: String,
    pub bar_section: String,
    pub bar_fill: String,
    pub nav: String,
    pub sections: String,
    pub nav_links: String,
    pub menu_toggle: String,
    pub menu_list: String,
    /// Element id (not a selector) of the particle canvas.
    pub particle_canvas_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: ".theme-toggle".to_owned(),
            reveal: ".reveal".to_owned(),
            bar_section: "#formacion".to_owned(),
            bar_fill: ".lang-bar-fill".to_owned(),
            nav: "nav".to_owned(),
            sections: "section[id]".to_owned(),
            nav_links: ".nav-links a".to_owned(),
            menu_toggle: ".nav-toggle".to_owned(),
            menu_list: ".nav-links".to_owned(),
            particle_canvas_id: "particles-canvas".to_owned(),
        }
    }
}

/// Class flags written back for CSS to read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub visible: String,
    pub nav_scrolled: String,
    pub link_active: String,
    pub menu_open: String,
    pub toggle_open: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            visible: "visible".to_owned(),
            nav_scrolled: "nav--scrolled".to_owned(),
            link_active: "nav-link--active".to_owned(),
            menu_open: "nav-links--open".to_owned(),
            toggle_open: "nav-toggle--open".to_owned(),
        }
    }
}

/// Delays and rate limits, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub nav_throttle_ms: u32,
    pub reveal_stagger_ms: u32,
    pub bar_stagger_ms: u32,
    pub resize_debounce_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self { nav_throttle_ms: 80, reveal_stagger_ms: 70, bar_stagger_ms: 180, resize_debounce_ms: 150 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// `IntersectionObserver` root margin.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.08, root_margin: "0px 0px -40px 0px".to_owned() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    pub threshold: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { threshold: 0.25 }
    }
}

/// Geometry knobs for the active-section computation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavOptions {
    /// Distance below the nav bar where a section counts as current.
    pub trigger_offset_px: f64,
    /// Id of the landing section forced current near the top of the page.
    pub hero_id: String,
    /// Scroll offset below which the hero is forced current.
    pub hero_window_px: f64,
    /// Scroll offset above which the nav gets its scrolled flag.
    pub scrolled_px: f64,
    /// Nav height used when the nav element is missing.
    pub fallback_height_px: f64,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            trigger_offset_px: 120.0,
            hero_id: "hero".to_owned(),
            hero_window_px: 200.0,
            scrolled_px: 30.0,
            fallback_height_px: 60.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    /// Viewport width above which the mobile menu is forced closed.
    pub breakpoint_px: f64,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self { breakpoint_px: 768.0 }
    }
}

/// Accessible labels. Each one describes the action the control performs next.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub switch_to_light: String,
    pub switch_to_dark: String,
    pub open_menu: String,
    pub close_menu: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            switch_to_light: "Switch to light mode".to_owned(),
            switch_to_dark: "Switch to dark mode".to_owned(),
            open_menu: "Open menu".to_owned(),
            close_menu: "Close menu".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not valid config JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the inline config block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// The configured log level, `warn` when unparsable.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Warn)
    }
}
