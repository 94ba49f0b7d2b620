//! Booking inquiry form.
//!
//! There is no backend: submitting builds a plain-text inquiry from the
//! fields and opens it as a prefilled WhatsApp chat in a new tab. Date
//! inputs constrain each other so check-out is always at least one day
//! after check-in.

use chrono::{Local, NaiveDate};
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::notification::{use_notifier, Severity};
use crate::config;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Default, Clone, PartialEq)]
struct Inquiry {
    name: String,
    email: String,
    checkin: String,
    checkout: String,
    message: String,
}

fn build_inquiry_message(inquiry: &Inquiry) -> String {
    let mut message = String::from("Hello! I'd like to make an inquiry.\n\n");
    message.push_str(&format!("Name: {}\n", inquiry.name));
    message.push_str(&format!("Email: {}\n", inquiry.email));
    if !inquiry.checkin.is_empty() {
        message.push_str(&format!("Check-in: {}\n", inquiry.checkin));
    }
    if !inquiry.checkout.is_empty() {
        message.push_str(&format!("Check-out: {}\n", inquiry.checkout));
    }
    if !inquiry.message.is_empty() {
        message.push_str(&format!("Message: {}\n", inquiry.message));
    }
    message
}

fn handoff_url(inquiry: &Inquiry) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::get_whatsapp_recipient(),
        urlencoding::encode(&build_inquiry_message(inquiry))
    )
}

/// Earliest selectable check-out: one day after check-in. `None` when no
/// valid check-in is chosen yet.
fn checkout_min(checkin: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(checkin, DATE_FORMAT).ok()?;
    Some(date.succ_opt()?.format(DATE_FORMAT).to_string())
}

/// A chosen check-out at or before check-in is no longer valid and gets
/// cleared. Unparseable values are left alone.
fn checkout_invalidated(checkin: &str, checkout: &str) -> bool {
    match (
        NaiveDate::parse_from_str(checkin, DATE_FORMAT),
        NaiveDate::parse_from_str(checkout, DATE_FORMAT),
    ) {
        (Ok(checkin), Ok(checkout)) => checkout <= checkin,
        _ => false,
    }
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let inquiry = use_state(Inquiry::default);
    let notifier = use_notifier();

    let edit_field = |apply: fn(&mut Inquiry, String)| {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*inquiry).clone();
            apply(&mut next, value);
            inquiry.set(next);
        })
    };

    let on_name = edit_field(|i, v| i.name = v);
    let on_email = edit_field(|i, v| i.email = v);

    let on_message = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*inquiry).clone();
            next.message = value;
            inquiry.set(next);
        })
    };

    let on_checkin = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*inquiry).clone();
            if !next.checkout.is_empty() && checkout_invalidated(&value, &next.checkout) {
                next.checkout.clear();
            }
            next.checkin = value;
            inquiry.set(next);
        })
    };

    let on_checkout = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*inquiry).clone();
            next.checkout = value;
            inquiry.set(next);
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(window) = web_sys::window() else { return };
            let url = handoff_url(&inquiry);
            match window.open_with_url_and_target(&url, "_blank") {
                Ok(_) => {
                    notifier.notify("Message prepared! Opening WhatsApp...", Severity::Success);
                    inquiry.set(Inquiry::default());
                }
                Err(_) => {
                    log::warn!("failed to open the WhatsApp handoff window");
                    notifier.notify("Could not open WhatsApp. Please try again.", Severity::Error);
                }
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    required={true}
                    value={inquiry.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-row">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required={true}
                    value={inquiry.email.clone()}
                    oninput={on_email}
                />
            </div>
            <div class="form-row form-row-split">
                <div>
                    <label for="checkin">{"Check-in"}</label>
                    <input
                        id="checkin"
                        name="checkin"
                        type="date"
                        min={today()}
                        value={inquiry.checkin.clone()}
                        onchange={on_checkin}
                    />
                </div>
                <div>
                    <label for="checkout">{"Check-out"}</label>
                    <input
                        id="checkout"
                        name="checkout"
                        type="date"
                        min={checkout_min(&inquiry.checkin)}
                        value={inquiry.checkout.clone()}
                        onchange={on_checkout}
                    />
                </div>
            </div>
            <div class="form-row">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    value={inquiry.message.clone()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="form-submit">{"Send inquiry"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_inquiry_lists_every_field_with_fixed_labels() {
        let inquiry = Inquiry {
            name: "Ana".into(),
            email: "a@x.com".into(),
            checkin: "2024-06-01".into(),
            checkout: "2024-06-04".into(),
            message: "Two guests".into(),
        };
        let message = build_inquiry_message(&inquiry);
        assert!(message.starts_with("Hello! I'd like to make an inquiry.\n\n"));
        assert!(message.contains("Name: Ana\n"));
        assert!(message.contains("Email: a@x.com\n"));
        assert!(message.contains("Check-in: 2024-06-01\n"));
        assert!(message.contains("Check-out: 2024-06-04\n"));
        assert!(message.contains("Message: Two guests\n"));
    }

    #[test]
    fn empty_optional_fields_are_omitted() {
        let inquiry = Inquiry {
            name: "Ana".into(),
            email: "a@x.com".into(),
            checkin: "2024-06-01".into(),
            ..Inquiry::default()
        };
        let message = build_inquiry_message(&inquiry);
        assert!(message.contains("Name: Ana\n"));
        assert!(message.contains("Email: a@x.com\n"));
        assert!(message.contains("Check-in: 2024-06-01\n"));
        assert!(!message.contains("Check-out:"));
        assert!(!message.contains("Message:"));
    }

    #[test]
    fn handoff_url_is_percent_encoded() {
        let inquiry = Inquiry {
            name: "Ana".into(),
            email: "a@x.com".into(),
            ..Inquiry::default()
        };
        let url = handoff_url(&inquiry);
        assert!(url.starts_with("https://wa.me/"));
        assert!(url.contains("?text="));
        assert!(url.contains("Name%3A%20Ana%0A"));
        assert!(!url[url.find("?text=").unwrap()..].contains(' '));
    }

    #[test]
    fn checkout_min_is_the_day_after_checkin() {
        assert_eq!(checkout_min("2024-06-01").as_deref(), Some("2024-06-02"));
        assert_eq!(checkout_min("2024-12-31").as_deref(), Some("2025-01-01"));
        assert_eq!(checkout_min("2024-02-28").as_deref(), Some("2024-02-29"));
        assert_eq!(checkout_min(""), None);
        assert_eq!(checkout_min("junk"), None);
    }

    #[test]
    fn checkout_at_or_before_checkin_is_invalidated() {
        assert!(checkout_invalidated("2024-06-01", "2024-06-01"));
        assert!(checkout_invalidated("2024-06-01", "2024-05-30"));
        assert!(!checkout_invalidated("2024-06-01", "2024-06-02"));
        assert!(!checkout_invalidated("junk", "2024-06-02"));
        assert!(!checkout_invalidated("2024-06-01", ""));
    }
}
