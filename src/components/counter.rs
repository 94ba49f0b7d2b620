//! Animated numeric counters.
//!
//! Reuses the one-shot visibility policy of the reveal controller, but
//! instead of toggling a class it counts the element's text up from zero.
//! Only elements whose text is a pure base-10 non-negative integer are
//! animated; anything else ("24/7", "∞") is left untouched.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Counters only start once half the element is visible.
const VISIBILITY_THRESHOLD: f64 = 0.5;

const STEPS: u32 = 50;
const DURATION_MS: u32 = 1500;
const STEP_MS: u32 = DURATION_MS / STEPS;

fn parse_target(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Value displayed after `step` of `STEPS` ticks. Intermediate values are
/// floored; the final step snaps to the exact target so rounding can never
/// drift the end state.
fn counter_value(target: u64, step: u32) -> u64 {
    if step >= STEPS {
        target
    } else {
        target * u64::from(step) / u64::from(STEPS)
    }
}

fn animate(element: Element, target: u64) {
    let step = Rc::new(RefCell::new(0u32));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(STEP_MS, move || {
        let mut step = step.borrow_mut();
        *step += 1;
        element.set_text_content(Some(&counter_value(target, *step).to_string()));
        if *step >= STEPS {
            // The timer self-clears once the target is reached.
            drop(handle_clone.borrow_mut().take());
        }
    });
    *handle.borrow_mut() = Some(interval);
}

pub struct CounterAnimator {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl CounterAnimator {
    /// Watches every element matching `selector`. Without observer support
    /// the markup already shows the final figures, so this degrades to a
    /// no-op.
    pub fn install(document: &Document, selector: &str) -> Self {
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
                    observer.unobserve(&target);
                    let text = target.text_content().unwrap_or_default();
                    if let Some(value) = parse_target(&text) {
                        animate(target, value);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(_) => {
                    log::warn!("IntersectionObserver unavailable, counters stay static");
                    return CounterAnimator {
                        observer: None,
                        _callback: None,
                    };
                }
            };

        match document.query_selector_all(selector) {
            Ok(nodes) => {
                for i in 0..nodes.length() {
                    if let Some(element) =
                        nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok())
                    {
                        observer.observe(&element);
                    }
                }
            }
            Err(_) => log::warn!("invalid counter selector"),
        }

        CounterAnimator {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }
}

impl Drop for CounterAnimator {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{counter_value, parse_target, STEPS};

    #[test]
    fn sequence_is_non_decreasing_and_ends_exactly_on_target() {
        for target in [0u64, 1, 7, 48, 360, 9999] {
            let mut previous = 0;
            for step in 1..=STEPS {
                let value = counter_value(target, step);
                assert!(value >= previous, "target {target} dipped at step {step}");
                previous = value;
            }
            assert_eq!(counter_value(target, STEPS), target);
        }
    }

    #[test]
    fn intermediate_values_are_floored() {
        // 7 * 25 / 50 = 3.5, floored to 3.
        assert_eq!(counter_value(7, 25), 3);
    }

    #[test]
    fn only_pure_integers_are_accepted() {
        assert_eq!(parse_target("240"), Some(240));
        assert_eq!(parse_target("007"), Some(7));
        assert_eq!(parse_target("0"), Some(0));
        assert_eq!(parse_target("24/7"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target(" 42"), None);
        assert_eq!(parse_target("+3"), None);
        assert_eq!(parse_target("-1"), None);
        assert_eq!(parse_target("4.5"), None);
    }
}
