//! Mobile menu: toggle control, link-click close, and breakpoint close.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::config::PageConfig;
use crate::error::SetupError;
use crate::state::menu::{MenuState, MenuView};
use crate::util::debounce::debounce;
use crate::util::dom;

struct Menu {
    state: Cell<MenuState>,
    config: Rc<PageConfig>,
    toggle: Element,
    list: Element,
    body: Option<HtmlElement>,
}

impl Menu {
    fn render(&self, view: &MenuView) {
        let classes = &self.config.classes;
        dom::set_class(&self.toggle, &classes.toggle_open, view.open);
        dom::set_class(&self.list, &classes.menu_open, view.open);
        dom::set_attr(&self.toggle, "aria-expanded", view.aria_expanded);
        dom::set_attr(&self.toggle, "aria-label", &view.label);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", if view.scroll_locked { "hidden" } else { "" });
        }
    }

    fn update(&self, change: impl FnOnce(&mut MenuState) -> bool) {
        let mut state = self.state.get();
        if change(&mut state) {
            self.state.set(state);
            self.render(&state.view(&self.config.labels));
        }
    }

    fn toggle(&self) {
        self.update(|state| {
            let next = state.toggle();
            log::debug!("menu open: {}", next.is_open());
            true
        });
    }

    fn close(&self) {
        self.update(|state| {
            state.close();
            true
        });
    }
}

/// Bind the toggle, every link in the list, and the window resize.
///
/// # Errors
///
/// [`SetupError::MissingElement`] when either the toggle or the list is absent.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    let selectors = &ctx.config.selectors;
    let toggle = ctx.require::<Element>(&selectors.menu_toggle)?;
    let list = ctx.require::<Element>(&selectors.menu_list)?;

    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::default()),
        config: Rc::clone(&ctx.config),
        toggle: toggle.clone(),
        list: list.clone(),
        body: ctx.document.body(),
    });

    let on_toggle = Rc::clone(&menu);
    dom::listen(&toggle, "click", move |_| on_toggle.toggle())?;

    let links = dom::all::<Element>(list.query_selector_all("a"), "a");
    for link in &links {
        let on_link = Rc::clone(&menu);
        dom::listen(link, "click", move |_| on_link.close())?;
    }

    let on_settle = Rc::clone(&menu);
    let page = ctx.clone();
    let breakpoint = ctx.config.menu.breakpoint_px;
    let mut on_resize = debounce(ctx.config.timing.resize_debounce_ms, move |()| {
        let width = page.viewport_width();
        on_settle.update(|state| state.on_resize_settled(width, breakpoint));
    });
    dom::listen(&ctx.window, "resize", move |_| on_resize(()))?;

    log::debug!("menu bound with {} links", links.len());
    Ok(())
}
