//! Active-section computation for the navigation bar.
//!
//! Nothing is stored between ticks: every scroll (throttled) and the initial
//! load recompute the current section from scroll offset and section geometry.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavOptions;

/// Window events that trigger a (throttled) recompute. `load` and the initial
/// mount recompute unthrottled.
pub const RECOMPUTE_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Layout of one `section[id]`, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `y` falls in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Result of one recompute tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavUpdate {
    /// Whether the nav bar shows its scrolled styling.
    pub scrolled: bool,
    /// Id of the current section, `None` only when there are no sections.
    pub current: Option<String>,
}

/// Whether the page is scrolled far enough to flag the nav bar.
#[must_use]
pub fn is_scrolled(scroll_y: f64, opts: &NavOptions) -> bool {
    scroll_y > opts.scrolled_px
}

/// Id of the section the reader is currently in.
///
/// The trigger line sits `trigger_offset_px` below the nav bar. Sections are
/// checked in document order and the last one containing the line wins. Near
/// the top of the page the hero section is current no matter what. When no
/// section contains the line (past the end of the document) the last section
/// is current.
#[must_use]
pub fn current_section<'a>(scroll_y: f64, nav_height: f64, sections: &'a [Section], opts: &NavOptions) -> Option<&'a str> {
    let sections = sections.iter().filter(|s| !s.id.is_empty()).collect::<Vec<_>>();
    let trigger = scroll_y + nav_height + opts.trigger_offset_px;

    let mut current = None;
    for section in &sections {
        if section.contains(trigger) {
            current = Some(section.id.as_str());
        }
    }

    if scroll_y < opts.hero_window_px {
        if let Some(hero) = sections.iter().find(|s| s.id == opts.hero_id) {
            current = Some(hero.id.as_str());
        }
    }

    current.or_else(|| sections.last().map(|s| s.id.as_str()))
}

/// Full recompute for one tick.
#[must_use]
pub fn compute(scroll_y: f64, nav_height: f64, sections: &[Section], opts: &NavOptions) -> NavUpdate {
    NavUpdate {
        scrolled: is_scrolled(scroll_y, opts),
        current: current_section(scroll_y, nav_height, sections, opts).map(str::to_owned),
    }
}

/// Section id a nav link points at: the `href` fragment without its `#`.
#[must_use]
pub fn link_target(href: &str) -> &str {
    href.split_once('#').map_or(href, |(_, fragment)| fragment)
}
