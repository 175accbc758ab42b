//! Theme preference: the page-wide light/dark choice and its persistence.
//!
//! Reads always go to the store rather than a cached copy, so the value a
//! toggle flips is whatever was persisted last. Storage trouble is never an
//! error for the page: an unreadable store means "use the default", an
//! unwritable one means the choice lasts only until reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Labels;
use crate::error::StorageError;

/// Visual theme, written to `<html data-theme="...">`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything but the exact names is unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label for the toggle control: describes switching *away* from `self`.
    #[must_use]
    pub fn toggle_label(self, labels: &Labels) -> &str {
        match self {
            Self::Dark => &labels.switch_to_light,
            Self::Light => &labels.switch_to_dark,
        }
    }
}

/// Durable key-value storage for the preference.
pub trait ThemeStore {
    /// Read `key`; `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store is unavailable or rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// What the DOM should show for a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeView {
    /// Value for the `data-theme` attribute.
    pub attribute: &'static str,
    /// `aria-label` and `title` of the toggle control.
    pub label: String,
}

impl ThemeView {
    #[must_use]
    pub fn of(theme: Theme, labels: &Labels) -> Self {
        Self { attribute: theme.as_str(), label: theme.toggle_label(labels).to_owned() }
    }
}

/// Theme preference bound to a store and key.
pub struct ThemePreference<S> {
    store: S,
    key: String,
    default: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>, default: Theme) -> Self {
        Self { store, key: key.into(), default }
    }

    /// The persisted theme, or the default when absent or unrecognized.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        self.store
            .read(&self.key)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(self.default)
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Propagates the store's failure; the caller still applies the theme.
    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.write(&self.key, theme.as_str())
    }

    /// Flip the persisted theme and return the new one.
    ///
    /// # Errors
    ///
    /// Returns the new theme inside the error path too, so the page can still
    /// show it when storage is read-only.
    pub fn toggle(&self) -> Result<Theme, (Theme, StorageError)> {
        let next = self.get_theme().toggled();
        self.set_theme(next).map(|()| next).map_err(|err| (next, err))
    }
}
