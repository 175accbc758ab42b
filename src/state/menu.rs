//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::Labels;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// DOM mirror of a [`MenuState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
    /// `aria-expanded` on the toggle control.
    pub aria_expanded: &'static str,
    /// `aria-label` on the toggle control; names the next action.
    pub label: String,
    /// Whether page scrolling is disabled.
    pub scroll_locked: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Flip open/closed. Returns the new state.
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
        *self
    }

    /// Force closed. Safe to call when already closed.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// The resize burst settled at `width`. Past the breakpoint the menu is
    /// forced closed; returns `true` when the closed view should be applied.
    pub fn on_resize_settled(&mut self, width: f64, breakpoint_px: f64) -> bool {
        if width > breakpoint_px {
            self.close();
            return true;
        }
        false
    }

    #[must_use]
    pub fn view(self, labels: &Labels) -> MenuView {
        let open = self.is_open();
        MenuView {
            open,
            aria_expanded: if open { "true" } else { "false" },
            label: if open { labels.close_menu.clone() } else { labels.open_menu.clone() },
            scroll_locked: open,
        }
    }
}
