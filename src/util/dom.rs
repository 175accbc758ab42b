//! Thin web-sys helpers: queries, class/attribute writes, event listeners.
//!
//! DOM writes return `Result<_, JsValue>` even where failure carries no useful
//! information for the page. They all funnel through [`warn_on_err`] so a
//! failure is at least visible in the console.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

/// Log `result`'s error at `warn`, tagged with `what`.
pub fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// Downcast `el`, logging when a selector matched the wrong kind of element.
pub fn cast<T: JsCast>(el: Element, selector: &str) -> Option<T> {
    match el.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(el) => {
            log::debug!("{selector} matched an unexpected <{}>", el.tag_name().to_lowercase());
            None
        }
    }
}

/// First match of a `query_selector` call, cast to `T`.
pub fn first<T: JsCast>(found: Result<Option<Element>, JsValue>, selector: &str) -> Option<T> {
    match found {
        Ok(Some(el)) => cast(el, selector),
        Ok(None) => None,
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

/// Every match of a `query_selector_all` call that casts to `T`, in document order.
pub fn all<T: JsCast>(found: Result<NodeList, JsValue>, selector: &str) -> Vec<T> {
    let list = match found {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| match node.dyn_into::<T>() {
            Ok(typed) => Some(typed),
            Err(node) => {
                log::debug!("{selector} matched an unexpected {}", node.node_name().to_lowercase());
                None
            }
        })
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    warn_on_err(el.class_list().toggle_with_force(class, on), "class toggle");
}

pub fn add_class(el: &Element, class: &str) {
    warn_on_err(el.class_list().add_1(class), "class add");
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    warn_on_err(el.set_attribute(name, value), name);
}

/// Set an inline style property; an empty `value` removes it.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    if value.is_empty() {
        warn_on_err(style.remove_property(property), property);
    } else {
        warn_on_err(style.set_property(property, value), property);
    }
}

/// Attach `handler` for the lifetime of the page.
///
/// # Errors
///
/// Returns the `JsValue` thrown by `addEventListener`.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], registered as passive (never calls `preventDefault`).
///
/// # Errors
///
/// Returns the `JsValue` thrown by `addEventListener`.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Watch `targets` for viewport intersection.
///
/// `on_enter` runs for every entry that is intersecting, in the order the
/// observer reports them, with the observer so the callback can unobserve.
///
/// # Errors
///
/// Returns the `JsValue` thrown by the `IntersectionObserver` constructor.
pub fn observe_intersections<F>(
    threshold: f64,
    root_margin: Option<&str>,
    targets: &[Element],
    mut on_enter: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_enter(entry.target(), &observer);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    cb.forget();
    Ok(())
}
