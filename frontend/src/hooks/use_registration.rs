use shared::chrome::ChromeAction;
use shared::NewDonorRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::directory::DirectoryClient;
use crate::services::logging::Logger;

/// Inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    BloodGroup,
    City,
    Phone,
    LastDonation,
}

impl RegisterField {
    pub fn apply(self, request: &mut NewDonorRequest, value: String) {
        match self {
            RegisterField::Name => request.name = value,
            RegisterField::BloodGroup => request.blood_group = value,
            RegisterField::City => request.city = value,
            RegisterField::Phone => request.phone = value,
            RegisterField::LastDonation => request.last_donation = value,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RegistrationState {
    pub request: NewDonorRequest,
    pub submitting: bool,
    pub error: Option<String>,
}

pub struct UseRegistrationResult {
    pub state: RegistrationState,
    pub on_field_change: Callback<(RegisterField, String)>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_registration(client: &DirectoryClient, notify: Callback<ChromeAction>) -> UseRegistrationResult {
    let request = use_state(NewDonorRequest::default);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_field_change = {
        let request = request.clone();
        Callback::from(move |(field, value): (RegisterField, String)| {
            let mut next = (*request).clone();
            field.apply(&mut next, value);
            request.set(next);
        })
    };

    let on_submit = {
        let client = client.clone();
        let request = request.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |_| {
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let client = client.clone();
            let new_donor = (*request).clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let notify = notify.clone();

            spawn_local(async move {
                match client.register(new_donor).await {
                    // The button stays disabled until the alert sends the user away
                    Ok(outcome) => {
                        if let Some(id) = outcome.affected {
                            Logger::info_with_component("register", &format!("Registered donor {}", id));
                        }
                        let message = outcome.message.unwrap_or_default();
                        notify.emit(ChromeAction::alert_then_navigate(
                            message,
                            client.config().listing_page.clone(),
                        ));
                    }
                    Err(message) => {
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    UseRegistrationResult {
        state: RegistrationState {
            request: (*request).clone(),
            submitting: *submitting,
            error: (*error).clone(),
        },
        on_field_change,
        on_submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_fields_update_only_their_value() {
        let mut request = NewDonorRequest::default();
        RegisterField::Name.apply(&mut request, "Huda".to_string());
        RegisterField::BloodGroup.apply(&mut request, "B-".to_string());
        RegisterField::LastDonation.apply(&mut request, "2024-02-01".to_string());

        assert_eq!(request.name, "Huda");
        assert_eq!(request.blood_group, "B-");
        assert_eq!(request.last_donation, "2024-02-01");
        assert_eq!(request.city, "");
        assert_eq!(request.phone, "");
    }
}
