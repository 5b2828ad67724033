use shared::chrome::ChromeAction;
use shared::validation::{validate_contact, CONTACT_SENT};
use shared::ContactMessage;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub notify: Callback<ChromeAction>,
}

/// Contact form. The message goes nowhere; only the email format is checked.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let message = use_state(ContactMessage::default);
    let email_error = use_state(|| Option::<&'static str>::None);

    let on_name_change = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(ContactMessage { name: input.value(), ..(*message).clone() });
        })
    };

    let on_email_change = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(ContactMessage { email: input.value(), ..(*message).clone() });
        })
    };

    let on_body_change = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(ContactMessage { message: input.value(), ..(*message).clone() });
        })
    };

    let onsubmit = {
        let message = message.clone();
        let email_error = email_error.clone();
        let notify = props.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(err) = validate_contact(&message) {
                Logger::debug_with_component("contact", "Rejected contact message with invalid email");
                email_error.set(Some(err.message()));
                return;
            }

            email_error.set(None);
            notify.emit(ChromeAction::alert(CONTACT_SENT));
            message.set(ContactMessage::default());
        })
    };

    html! {
        <section class="form-section">
            <h2>{"Contact Us"}</h2>
            <form id="contactForm" class="contact-form" {onsubmit} novalidate={true}>
                <div class="form-group">
                    <label for="contactName">{"Name"}</label>
                    <input type="text" id="contactName" value={message.name.clone()} onchange={on_name_change} />
                </div>

                <div class="form-group">
                    <label for="contactEmail">{"Email"}</label>
                    <input type="email" id="contactEmail" value={message.email.clone()} onchange={on_email_change} />
                    {if let Some(error) = *email_error {
                        html! { <span id="emailError" class="error-text">{error}</span> }
                    } else { html! {} }}
                </div>

                <div class="form-group">
                    <label for="contactMessage">{"Message"}</label>
                    <textarea id="contactMessage" rows="5" value={message.message.clone()} onchange={on_body_change} />
                </div>

                <button type="submit" class="btn btn-primary">{"Send Message"}</button>
            </form>
        </section>
    }
}
