//! Shared scroll plumbing.
//!
//! Every feature that reacts to scrolling (nav bar state, parallax) goes
//! through one window listener. Callbacks are coalesced into a single
//! `requestAnimationFrame` pass, so subscribers run at most once per frame
//! no matter how often the browser fires `scroll`.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::Callback;

/// Fixed-header height compensated for when jumping to an in-page anchor.
const HEADER_OFFSET: f64 = 80.0;

struct Dispatcher {
    next_id: usize,
    subscribers: Vec<(usize, Callback<f64>)>,
    frame_pending: bool,
    attached: bool,
    scroll_closure: Option<Closure<dyn FnMut()>>,
    frame_closure: Option<Closure<dyn FnMut()>>,
}

impl Dispatcher {
    const fn new() -> Self {
        Dispatcher {
            next_id: 0,
            subscribers: Vec::new(),
            frame_pending: false,
            attached: false,
            scroll_closure: None,
            frame_closure: None,
        }
    }

    fn attach(&mut self) {
        let Some(window) = web_sys::window() else {
            gloo_console::warn!("scroll dispatcher: no window, scroll effects disabled");
            return;
        };
        if self.scroll_closure.is_none() {
            self.scroll_closure = Some(Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>));
            self.frame_closure = Some(Closure::wrap(Box::new(on_frame) as Box<dyn FnMut()>));
        }
        if let Some(closure) = self.scroll_closure.as_ref() {
            if window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                self.attached = true;
            }
        }
    }

    fn detach(&mut self) {
        // The closures stay allocated: a queued animation frame may still
        // reference them after the listener is gone.
        if let (Some(window), Some(closure)) = (web_sys::window(), self.scroll_closure.as_ref()) {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        self.attached = false;
    }
}

thread_local! {
    static DISPATCHER: RefCell<Dispatcher> = RefCell::new(Dispatcher::new());
}

fn on_scroll() {
    DISPATCHER.with(|cell| {
        let mut dispatcher = cell.borrow_mut();
        if dispatcher.frame_pending {
            return;
        }
        if let (Some(window), Some(frame)) = (web_sys::window(), dispatcher.frame_closure.as_ref())
        {
            if window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .is_ok()
            {
                dispatcher.frame_pending = true;
            }
        }
    });
}

fn on_frame() {
    // Clone the callbacks out before emitting: a subscriber is free to
    // subscribe or unsubscribe from inside its own callback.
    let subscribers = DISPATCHER.with(|cell| {
        let mut dispatcher = cell.borrow_mut();
        dispatcher.frame_pending = false;
        dispatcher
            .subscribers
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect::<Vec<_>>()
    });

    let Some(window) = web_sys::window() else { return };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    for callback in subscribers {
        callback.emit(scroll_y);
    }
}

/// Registers `callback` to run with the current vertical scroll position,
/// at most once per animation frame. Dropping the returned subscription
/// unregisters it; the window listener is detached when the last
/// subscriber is gone.
pub fn subscribe(callback: Callback<f64>) -> ScrollSubscription {
    DISPATCHER.with(|cell| {
        let mut dispatcher = cell.borrow_mut();
        let id = dispatcher.next_id;
        dispatcher.next_id += 1;
        dispatcher.subscribers.push((id, callback));
        if !dispatcher.attached {
            dispatcher.attach();
        }
        ScrollSubscription { id }
    })
}

pub struct ScrollSubscription {
    id: usize,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        DISPATCHER.with(|cell| {
            let mut dispatcher = cell.borrow_mut();
            dispatcher.subscribers.retain(|(id, _)| *id != self.id);
            if dispatcher.subscribers.is_empty() && dispatcher.attached {
                dispatcher.detach();
            }
        });
    }
}

/// Smooth-scrolls to the section with the given id, compensating for the
/// fixed nav bar.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(section_id) else {
        log::warn!("missing section #{}, skipping scroll", section_id);
        return;
    };
    let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top((target.offset_top() as f64 - HEADER_OFFSET).max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Freezes or restores body scrolling, used while the mobile menu or the
/// lightbox covers the page.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}
