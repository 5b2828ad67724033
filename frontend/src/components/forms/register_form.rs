use shared::BloodGroup;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_registration::{RegisterField, RegistrationState};

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub state: RegistrationState,
    pub on_field_change: Callback<(RegisterField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let input_handler = |field: RegisterField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_blood_group_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((RegisterField::BloodGroup, select.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let request = &props.state.request;
    let submitting = props.state.submitting;

    html! {
        <section class="form-section">
            <h2>{"Register as a Donor"}</h2>

            {if let Some(error) = props.state.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form id="registerForm" class="register-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Full Name"}</label>
                    <input
                        type="text"
                        id="name"
                        value={request.name.clone()}
                        onchange={input_handler(RegisterField::Name)}
                        disabled={submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="blood_group">{"Blood Group"}</label>
                    <select id="blood_group" onchange={on_blood_group_change} disabled={submitting}>
                        <option value="" selected={request.blood_group.is_empty()}>{"Select"}</option>
                        {for BloodGroup::ALL.iter().map(|group| html! {
                            <option
                                value={group.as_str().to_string()}
                                selected={request.blood_group == group.as_str()}
                            >
                                {group.as_str()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="city">{"City"}</label>
                    <input
                        type="text"
                        id="city"
                        value={request.city.clone()}
                        onchange={input_handler(RegisterField::City)}
                        disabled={submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"WhatsApp Number"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="9665XXXXXXXX"
                        value={request.phone.clone()}
                        onchange={input_handler(RegisterField::Phone)}
                        disabled={submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="last_donation">{"Last Donation Date"}</label>
                    <input
                        type="date"
                        id="last_donation"
                        value={request.last_donation.clone()}
                        onchange={input_handler(RegisterField::LastDonation)}
                        disabled={submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={submitting}>
                    {if submitting { "Registering..." } else { "Register" }}
                </button>
            </form>
        </section>
    }
}
