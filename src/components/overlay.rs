//! Ephemeral full-screen overlays (lightbox, and anything else that needs
//! a backdrop). One abstraction owns the whole lifecycle so removal is
//! guaranteed on every exit path: explicit close, backdrop click, or the
//! exit-animation timeout.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

/// How long the closing animation is given before the subtree is removed.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayPhase {
    Closed,
    Open,
    Closing,
}

#[derive(Clone)]
pub struct OverlayHandle {
    phase: UseStateHandle<OverlayPhase>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl OverlayHandle {
    pub fn phase(&self) -> OverlayPhase {
        *self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.phase, OverlayPhase::Open | OverlayPhase::Closing)
    }

    pub fn open(&self) {
        // Cancel a pending teardown so reopening mid-exit sticks.
        drop(self.pending.borrow_mut().take());
        self.phase.set(OverlayPhase::Open);
    }

    pub fn close(&self) {
        if *self.phase != OverlayPhase::Open {
            return;
        }
        self.phase.set(OverlayPhase::Closing);
        let phase = self.phase.clone();
        let timeout = Timeout::new(EXIT_ANIMATION_MS, move || {
            phase.set(OverlayPhase::Closed);
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}

#[hook]
pub fn use_overlay() -> OverlayHandle {
    let phase = use_state(|| OverlayPhase::Closed);
    let pending = use_mut_ref(|| None::<Timeout>);
    OverlayHandle { phase, pending }
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub phase: OverlayPhase,
    /// Fired by a click on the backdrop itself, not on the content box.
    pub on_backdrop_click: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    if props.phase == OverlayPhase::Closed {
        return html! {};
    }

    let on_backdrop = {
        let on_backdrop_click = props.on_backdrop_click.clone();
        Callback::from(move |_: MouseEvent| on_backdrop_click.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let closing = props.phase == OverlayPhase::Closing;

    html! {
        <div
            class={classes!("overlay", props.class.clone(), closing.then(|| "closing"))}
            onclick={on_backdrop}
        >
            <div class="overlay-content" onclick={swallow}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
