use shared::chrome::ChromeAction;
use shared::commands::DELETE_CONFIRMATION;
use shared::views::DonorRowView;
use shared::{Donor, DonorId, DonorStats};
use yew::prelude::*;

use crate::services::directory::DirectoryClient;
use crate::services::dom;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct AdminState {
    pub rows: Vec<DonorRowView>,
    pub stats: DonorStats,
    pub error: Option<String>,
}

impl AdminState {
    fn from_donors(donors: &[Donor]) -> Self {
        Self {
            rows: donors.iter().map(DonorRowView::from).collect(),
            stats: DonorStats::from_donors(donors),
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            rows: Vec::new(),
            stats: DonorStats::from_donors(&[]),
            error: Some(message),
        }
    }
}

pub struct UseAdminDonorsResult {
    pub state: AdminState,
    pub on_delete: Callback<DonorId>,
}

#[hook]
pub fn use_admin_donors(client: &DirectoryClient, notify: Callback<ChromeAction>) -> UseAdminDonorsResult {
    let state = {
        let client = client.clone();
        use_state(move || match client.list_donors() {
            Ok(donors) => AdminState::from_donors(&donors),
            Err(message) => AdminState::failed(message),
        })
    };

    let on_delete = {
        let client = client.clone();
        let state = state.clone();

        use_callback(notify, move |id: DonorId, notify| {
            if !dom::confirm(DELETE_CONFIRMATION) {
                Logger::debug_with_component("admin", &format!("Delete of donor {} cancelled", id));
                return;
            }

            match client.delete_donor(id) {
                Ok(outcome) => {
                    state.set(AdminState::from_donors(&outcome.donors));
                    if let Some(message) = outcome.message {
                        Logger::info_with_component("admin", &format!("Deleted donor {}", id));
                        notify.emit(ChromeAction::alert(message));
                    }
                }
                Err(message) => state.set(AdminState::failed(message)),
            }
        })
    };

    UseAdminDonorsResult {
        state: (*state).clone(),
        on_delete,
    }
}
