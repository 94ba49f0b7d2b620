//! Toast notifications.
//!
//! `NotificationProvider` sits at the app root and owns the toast list;
//! any component below it grabs a [`Notifier`] from context and calls
//! [`Notifier::notify`]. Toasts auto-dismiss after four seconds (plus the
//! exit-animation window) and stack in layout order; there is no queue.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::overlay::EXIT_ANIMATION_MS;

const DISPLAY_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: u32,
    message: String,
    severity: Severity,
    closing: bool,
}

enum ToastAction {
    Push {
        id: u32,
        message: String,
        severity: Severity,
    },
    BeginClose(u32),
    Remove(u32),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push {
                id,
                message,
                severity,
            } => toasts.push(Toast {
                id,
                message,
                severity,
                closing: false,
            }),
            ToastAction::BeginClose(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.closing = true;
                }
            }
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher.dispatch(ToastAction::Push {
            id,
            message: message.into(),
            severity,
        });

        // The toast always leaves on its own; there is no cancel path.
        let dispatcher = self.dispatcher.clone();
        Timeout::new(DISPLAY_MS, move || {
            dispatcher.dispatch(ToastAction::BeginClose(id));
        })
        .forget();
        let dispatcher = self.dispatcher.clone();
        Timeout::new(DISPLAY_MS + EXIT_ANIMATION_MS, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        })
        .forget();
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("NotificationProvider missing from component tree")
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let notifier = {
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| Notifier {
                dispatcher,
                next_id: Rc::new(Cell::new(0)),
            },
            (),
        )
    };

    let stack = toasts
        .toasts
        .iter()
        .map(|toast| {
            let dispatcher = toasts.dispatcher();
            let id = toast.id;
            let dismiss = Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(ToastAction::BeginClose(id));
                let dispatcher = dispatcher.clone();
                Timeout::new(EXIT_ANIMATION_MS, move || {
                    dispatcher.dispatch(ToastAction::Remove(id));
                })
                .forget();
            });
            html! {
                <div
                    key={toast.id}
                    class={classes!(
                        "notification",
                        toast.severity.class(),
                        toast.closing.then(|| "closing"),
                    )}
                >
                    <span>{ &toast.message }</span>
                    <button class="notification-close" onclick={dismiss}>{"\u{00d7}"}</button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <div class="notification-stack">
                { stack }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, id: u32, message: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            id,
            message: message.into(),
            severity: Severity::Success,
        })
    }

    #[test]
    fn pushes_stack_in_order() {
        let list = push(Rc::new(ToastList::default()), 0, "first");
        let list = push(list, 1, "second");
        let messages: Vec<_> = list.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert!(list.toasts.iter().all(|t| !t.closing));
    }

    #[test]
    fn begin_close_marks_only_the_addressed_toast() {
        let list = push(Rc::new(ToastList::default()), 0, "a");
        let list = push(list, 1, "b");
        let list = list.reduce(ToastAction::BeginClose(0));
        assert!(list.toasts[0].closing);
        assert!(!list.toasts[1].closing);
    }

    #[test]
    fn remove_drops_the_toast() {
        let list = push(Rc::new(ToastList::default()), 0, "a");
        let list = list.reduce(ToastAction::Remove(0));
        assert!(list.toasts.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let list = push(Rc::new(ToastList::default()), 0, "a");
        let list = list.reduce(ToastAction::BeginClose(9));
        let list = list.reduce(ToastAction::Remove(9));
        assert_eq!(list.toasts.len(), 1);
        assert!(!list.toasts[0].closing);
    }
}
