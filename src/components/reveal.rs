//! Reveal-on-scroll controller.
//!
//! A batch of elements is registered once at startup; each one is hidden
//! with a per-index transition delay and revealed the first time it crosses
//! into the viewport. Revealing is one-shot: once an element is revealed it
//! is unobserved and never hidden again, so the observer's working set only
//! shrinks.

use stylist::GlobalStyle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

/// Class interpreted by the injected rule below as "fully shown".
pub const REVEALED_CLASS: &str = "visible";

/// Fraction of an element that must be visible before it reveals.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Per-index delay step applied to the reveal transition.
const STAGGER_STEP_MS: u64 = 50;

fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

fn initial_transition(index: usize) -> String {
    let delay = stagger_delay_ms(index);
    format!("opacity 0.8s ease {delay}ms, transform 0.8s ease {delay}ms")
}

pub struct RevealController {
    /// `None` when observation is unavailable; the controller then fails
    /// open and leaves every element visible.
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    _revealed_rule: Option<GlobalStyle>,
}

impl RevealController {
    pub fn new() -> Self {
        let revealed_rule = GlobalStyle::new(format!(
            ".{REVEALED_CLASS} {{ opacity: 1 !important; transform: translateY(0) !important; }}"
        ))
        .map_err(|e| log::warn!("failed to mount reveal style rule: {}", e))
        .ok();

        if !intersection_observer_supported() {
            log::warn!("IntersectionObserver unavailable, revealing everything up front");
            return Self::fail_open(revealed_rule);
        }

        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => RevealController {
                observer: Some(observer),
                _callback: Some(callback),
                _revealed_rule: revealed_rule,
            },
            Err(_) => {
                log::warn!("failed to construct IntersectionObserver, revealing everything");
                Self::fail_open(revealed_rule)
            }
        }
    }

    fn fail_open(revealed_rule: Option<GlobalStyle>) -> Self {
        RevealController {
            observer: None,
            _callback: None,
            _revealed_rule: revealed_rule,
        }
    }

    /// Hides each element and starts watching it. The zero-based iteration
    /// order fixes the stagger delay; the order in which elements later
    /// cross the threshold does not affect it.
    pub fn register<I>(&self, elements: I)
    where
        I: IntoIterator<Item = HtmlElement>,
    {
        let Some(observer) = self.observer.as_ref() else {
            // Fail open: nothing was hidden, so there is nothing to do.
            return;
        };
        for (index, element) in elements.into_iter().enumerate() {
            let style = element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let _ = style.set_property("transition", &initial_transition(index));
            observer.observe(&element);
        }
    }

    /// Queries `selectors` once and registers every match in document order.
    pub fn install(document: &Document, selectors: &str) -> Self {
        let controller = Self::new();
        match document.query_selector_all(selectors) {
            Ok(nodes) => controller.register(html_elements(&nodes)),
            Err(_) => log::warn!("invalid reveal selector list"),
        }
        controller
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

fn html_elements(nodes: &NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::{initial_transition, stagger_delay_ms};

    #[test]
    fn stagger_delay_follows_registration_order() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 50);
        assert_eq!(stagger_delay_ms(7), 350);
    }

    #[test]
    fn stagger_delay_is_unbounded_for_long_batches() {
        assert_eq!(stagger_delay_ms(200), 10_000);
    }

    #[test]
    fn transition_embeds_the_indexed_delay() {
        assert_eq!(
            initial_transition(0),
            "opacity 0.8s ease 0ms, transform 0.8s ease 0ms"
        );
        assert_eq!(
            initial_transition(3),
            "opacity 0.8s ease 150ms, transform 0.8s ease 150ms"
        );
    }
}
