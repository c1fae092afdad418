//! IntersectionObserver wiring for scroll-triggered behavior.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a reveal target that must be visible before it animates in.
const REVEAL_THRESHOLD: f64 = 0.15;

const REVEAL_CLASS: &str = "reveal";
const ACTIVE_CLASS: &str = "active";

fn new_observer(threshold: f64, callback: &js_sys::Function) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    IntersectionObserver::new_with_options(callback, &options).ok()
}

/// Register every `selector` match for one-shot scroll reveal: the element
/// gets the `reveal` class now and `active` the first time it intersects,
/// after which it is unobserved. The observer lives for the page lifetime.
pub fn observe_reveals(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(ACTIVE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let Some(observer) = new_observer(REVEAL_THRESHOLD, callback.as_ref().unchecked_ref()) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let _ = element.class_list().add_1(REVEAL_CLASS);
        observer.observe(&element);
    }
    callback.forget();
}

/// Invoke `on_visible` the first time `element_id` crosses `threshold`, then
/// stop observing that element. A missing element disables the feature.
pub fn observe_once(element_id: &str, threshold: f64, mut on_visible: impl FnMut() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(element_id) else {
        log::debug!("no element with id '{element_id}', observer skipped");
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let Some(observer) = new_observer(threshold, callback.as_ref().unchecked_ref()) else {
        return;
    };
    observer.observe(&element);
    callback.forget();
}
