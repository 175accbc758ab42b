//! Theme toggle: `data-theme` on `<html>` plus the toggle control's labels.
//!
//! Applied twice: once from [`crate::start`] before the DOM is parsed, so
//! the page never paints in the wrong theme, and again from [`mount`], which
//! also binds the toggle.

use web_sys::{Element, Storage, Window};

use super::PageContext;
use crate::error::{SetupError, StorageError};
use crate::state::theme::{Theme, ThemePreference, ThemeStore, ThemeView};
use crate::util::dom;

const THEME_ATTRIBUTE: &str = "data-theme";

/// `window.localStorage`, when the browser allows it.
struct LocalStore(Option<Storage>);

impl LocalStore {
    fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                Self(None)
            }
        }
    }
}

impl ThemeStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read failed: {err:?}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

fn preference(ctx: &PageContext) -> ThemePreference<LocalStore> {
    ThemePreference::new(LocalStore::open(&ctx.window), ctx.config.storage_key.clone(), ctx.config.default_theme)
}

/// Write `theme` to the document and the toggle control.
pub fn apply(ctx: &PageContext, theme: Theme) {
    let view = ThemeView::of(theme, &ctx.config.labels);
    if let Some(root) = ctx.document.document_element() {
        dom::set_attr(&root, THEME_ATTRIBUTE, view.attribute);
    }
    if let Some(toggle) = ctx.query::<Element>(&ctx.config.selectors.theme_toggle) {
        dom::set_attr(&toggle, "aria-label", &view.label);
        dom::set_attr(&toggle, "title", &view.label);
    }
}

/// Re-apply (and re-persist) whatever theme is stored.
pub fn apply_persisted(ctx: &PageContext) {
    let pref = preference(ctx);
    let theme = pref.get_theme();
    if let Err(err) = pref.set_theme(theme) {
        log::debug!("theme not persisted: {err}");
    }
    apply(ctx, theme);
}

/// Apply the stored theme and bind the toggle control.
///
/// # Errors
///
/// [`SetupError::MissingElement`] when the page has no toggle; the stored
/// theme is still applied.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    apply_persisted(ctx);
    let toggle = ctx.require::<Element>(&ctx.config.selectors.theme_toggle)?;

    let pref = preference(ctx);
    let page = ctx.clone();
    dom::listen(&toggle, "click", move |_| {
        let next = match pref.toggle() {
            Ok(next) => next,
            Err((next, err)) => {
                log::warn!("theme not persisted: {err}");
                next
            }
        };
        log::debug!("theme -> {}", next.as_str());
        apply(&page, next);
    })?;
    Ok(())
}
