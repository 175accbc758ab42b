//! Language/skill bars: grow each fill to its `data-width`, one after another.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::error::SetupError;
use crate::state::bars::BarGroup;
use crate::util::dom;

const WIDTH_ATTRIBUTE: &str = "data-width";

/// Watch the bar section; the first time it is visible, animate its bars.
///
/// # Errors
///
/// [`SetupError::MissingElement`] when the page has no bar section.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    let section = ctx.require::<Element>(&ctx.config.selectors.bar_section)?;
    let group = Rc::new(RefCell::new(BarGroup::new(ctx.config.timing.bar_stagger_ms)));
    let fill_selector = ctx.config.selectors.bar_fill.clone();

    dom::observe_intersections(ctx.config.bars.threshold, None, &[section], move |section, observer| {
        observer.unobserve(&section);
        if group.borrow().is_triggered() {
            return;
        }
        let bars = dom::all::<HtmlElement>(section.query_selector_all(&fill_selector), &fill_selector);
        let targets = bars
            .iter()
            .map(|bar| bar.get_attribute(WIDTH_ATTRIBUTE))
            .collect::<Vec<_>>();
        let Some(steps) = group.borrow_mut().trigger(&targets) else {
            return;
        };
        log::debug!("animating {} bars", steps.len());
        for (bar, step) in bars.into_iter().zip(steps) {
            spawn_local(async move {
                sleep(Duration::from_millis(u64::from(step.delay_ms))).await;
                dom::set_style(&bar, "width", &step.width);
            });
        }
    })?;
    Ok(())
}
