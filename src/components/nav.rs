//! Navigation bar: scrolled styling and active-link highlighting.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, Window};

use super::PageContext;
use crate::config::PageConfig;
use crate::error::SetupError;
use crate::state::nav::{self, Section};
use crate::util::dom;
use crate::util::throttle::throttle;

/// Everything one recompute tick reads or writes, captured at mount.
struct Highlighter {
    window: Window,
    config: Rc<PageConfig>,
    nav: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    links: Vec<HtmlElement>,
}

impl Highlighter {
    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scrollY unavailable: {err:?}");
                0.0
            }
        }
    }

    fn nav_height(&self) -> f64 {
        self.nav
            .as_ref()
            .map_or(self.config.nav.fallback_height_px, |nav| f64::from(nav.offset_height()))
    }

    fn layout(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|s| Section::new(s.id(), f64::from(s.offset_top()), f64::from(s.offset_height())))
            .collect()
    }

    fn update(&self) {
        let scroll_y = self.scroll_y();
        let update = nav::compute(scroll_y, self.nav_height(), &self.layout(), &self.config.nav);

        if let Some(bar) = &self.nav {
            dom::set_class(bar, &self.config.classes.nav_scrolled, update.scrolled);
        }

        let current = update.current.as_deref();
        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            let active = current.is_some_and(|id| nav::link_target(&href) == id);
            dom::set_class(link, &self.config.classes.link_active, active);
            dom::set_style(link, "color", "");
        }
    }
}

/// Recompute on scroll and resize (throttled), on load, and once now.
///
/// # Errors
///
/// [`SetupError::MissingElement`] when the page has neither a nav bar nor
/// any identified sections.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    let selectors = &ctx.config.selectors;
    let nav = ctx.query::<HtmlElement>(&selectors.nav);
    let sections = ctx.query_all::<HtmlElement>(&selectors.sections);
    if nav.is_none() && sections.is_empty() {
        return Err(SetupError::MissingElement(format!("{}, {}", selectors.nav, selectors.sections)));
    }

    let highlighter = Rc::new(Highlighter {
        window: ctx.window.clone(),
        config: Rc::clone(&ctx.config),
        nav,
        links: ctx.query_all::<HtmlElement>(&selectors.nav_links),
        sections,
    });
    log::debug!(
        "nav tracking {} sections, {} links",
        highlighter.sections.len(),
        highlighter.links.len()
    );

    let on_tick = Rc::clone(&highlighter);
    let tick = Rc::new(RefCell::new(throttle(ctx.config.timing.nav_throttle_ms, move |()| on_tick.update())));
    for event in nav::RECOMPUTE_EVENTS {
        let tick = Rc::clone(&tick);
        dom::listen_passive(&ctx.window, event, move |_| (tick.borrow_mut())(()))?;
    }

    let on_load = Rc::clone(&highlighter);
    dom::listen(&ctx.window, "load", move |_| on_load.update())?;

    highlighter.update();
    Ok(())
}
