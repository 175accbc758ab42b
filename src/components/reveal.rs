//! Scroll reveal: adds the visible class to `.reveal` elements, staggered.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::PageContext;
use crate::error::SetupError;
use crate::state::reveal::RevealTracker;
use crate::util::dom;

const DELAY_ATTRIBUTE: &str = "data-reveal-delay";

/// Observe every reveal-eligible element captured now, in document order.
///
/// # Errors
///
/// [`SetupError::MissingElement`] when the page has nothing to reveal.
pub fn mount(ctx: &PageContext) -> Result<(), SetupError> {
    let selector = &ctx.config.selectors.reveal;
    let elements = ctx.query_all::<Element>(selector);
    let tracker = RevealTracker::new(
        elements.iter().map(|el| el.get_attribute(DELAY_ATTRIBUTE)),
        ctx.config.timing.reveal_stagger_ms,
    );
    if tracker.is_empty() {
        return Err(SetupError::MissingElement(selector.clone()));
    }
    let count = tracker.len();
    let tracker = Rc::new(RefCell::new(tracker));
    let captured = elements.clone();
    let visible = ctx.config.classes.visible.clone();
    let reveal = &ctx.config.reveal;

    dom::observe_intersections(reveal.threshold, Some(reveal.root_margin.as_str()), &elements, move |target, observer| {
        observer.unobserve(&target);
        let Some(index) = captured.iter().position(|el| *el == target) else {
            return;
        };
        let mut state = tracker.borrow_mut();
        let Some(delay_ms) = state.on_intersect(index) else {
            return;
        };
        log::debug!("revealing #{index} in {delay_ms}ms, {} pending", state.pending());
        let visible = visible.clone();
        spawn_local(async move {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
            dom::add_class(&target, &visible);
        });
    })?;

    log::debug!("observing {count} reveal elements");
    Ok(())
}
