//! Display-ready donor data for the public cards and the admin table.

use serde::{Deserialize, Serialize};

use crate::config::DirectoryConfig;
use crate::{parse_donation_date, Donor, DonorId};

/// Shown when a donor has no recorded donation
pub const MISSING_DATE: &str = "N/A";
/// Shown when the stored date cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";
/// Every listed donor is shown as available
pub const AVAILABLE_LABEL: &str = "Available";

/// One donor card in the public listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorCardView {
    pub id: DonorId,
    pub name: String,
    pub city: String,
    pub blood_group: String,
    pub status_label: String,
    pub last_donation: String,
    pub contact_url: String,
}

impl DonorCardView {
    pub fn new(donor: &Donor, config: &DirectoryConfig) -> Self {
        Self {
            id: donor.id,
            name: donor.name.clone(),
            city: donor.city.clone(),
            blood_group: donor.blood_group.to_string(),
            status_label: AVAILABLE_LABEL.to_string(),
            last_donation: format_last_donation(&donor.last_donation),
            contact_url: contact_link(donor, config),
        }
    }
}

/// One row in the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorRowView {
    pub id: DonorId,
    pub name: String,
    pub blood_group: String,
    pub city: String,
    pub phone: String,
    pub status: String,
}

impl From<&Donor> for DonorRowView {
    fn from(donor: &Donor) -> Self {
        Self {
            id: donor.id,
            name: donor.name.clone(),
            blood_group: donor.blood_group.to_string(),
            city: donor.city.clone(),
            phone: donor.phone.clone(),
            status: donor.status.to_string(),
        }
    }
}

/// Long-form date such as "October 15, 2023"
pub fn format_last_donation(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return MISSING_DATE.to_string();
    }

    match parse_donation_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Messaging deep-link asking the donor for help.
///
/// Name and blood group are inserted as-is. A value containing `&`, `#` or
/// `+` changes how the receiving app parses the query string.
pub fn contact_link(donor: &Donor, config: &DirectoryConfig) -> String {
    format!(
        "{}{}?text=Hello {}, I found you on {}. I urgently need {} blood. Please help.",
        config.messaging_base_url, donor.phone, donor.name, config.site_name, donor.blood_group
    )
}
