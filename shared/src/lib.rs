use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod chrome;
pub mod commands;
pub mod config;
pub mod error;
pub mod pages;
pub mod search;
pub mod stats;
pub mod store;
pub mod tasks;
pub mod validation;
pub mod views;

pub use commands::{CommandOutcome, DonorCommand, DonorService};
pub use config::DirectoryConfig;
pub use error::{StoreError, StoreResult};
pub use search::{filter_donors, SearchOutcome, SearchQuery};
pub use stats::DonorStats;
pub use store::{DonorRepository, KeyValueStorage, MemoryStorage, StorageDonorRepository};
pub use tasks::{Debouncer, Delay, ImmediateDelay};

/// Donor IDs are small integers assigned as `max(existing) + 1`
pub type DonorId = u32;

/// A registered blood donor as persisted in the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub blood_group: BloodGroup,
    pub city: String,
    /// Digits only, used as the destination of the messaging deep-link
    pub phone: String,
    /// ISO 8601 date (YYYY-MM-DD), or empty when the donor never donated
    pub last_donation: String,
    pub status: DonorStatus,
}

impl Donor {
    /// Parse the last donation date, `None` when empty or malformed
    pub fn last_donation_date(&self) -> Option<NaiveDate> {
        parse_donation_date(&self.last_donation)
    }
}

/// Date-time layouts accepted besides a plain `YYYY-MM-DD`
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a stored donation date.
///
/// The date form pickers write is `YYYY-MM-DD`. ISO date-times are accepted
/// too and keep their calendar date; an offset is not converted.
pub fn parse_donation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|stamp| stamp.date())
}

/// ABO/Rh blood group.
///
/// Registration stores whatever the form submitted, so a value outside the
/// eight canonical groups is kept verbatim in `Unrecognized` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    OPositive,
    ONegative,
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    Unrecognized(String),
}

impl BloodGroup {
    /// The canonical groups in the order the search dropdown lists them
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::Unrecognized(raw) => raw,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, BloodGroup::Unrecognized(_))
    }
}

impl From<&str> for BloodGroup {
    fn from(value: &str) -> Self {
        match value {
            "O+" => BloodGroup::OPositive,
            "O-" => BloodGroup::ONegative,
            "A+" => BloodGroup::APositive,
            "A-" => BloodGroup::ANegative,
            "B+" => BloodGroup::BPositive,
            "B-" => BloodGroup::BNegative,
            "AB+" => BloodGroup::AbPositive,
            "AB-" => BloodGroup::AbNegative,
            other => BloodGroup::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BloodGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BloodGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BloodGroup::from(raw.as_str()))
    }
}

/// Donor availability. Only `active` exists today; nothing in the app moves a
/// donor out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorStatus {
    #[default]
    Active,
}

impl DonorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonorStatus::Active => "active",
        }
    }
}

impl fmt::Display for DonorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values read from the registration form, accepted without validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDonorRequest {
    pub name: String,
    pub blood_group: String,
    pub city: String,
    pub phone: String,
    pub last_donation: String,
}

impl NewDonorRequest {
    /// Build the stored record for this request under the given id
    pub fn into_donor(self, id: DonorId) -> Donor {
        Donor {
            id,
            name: self.name,
            blood_group: BloodGroup::from(self.blood_group.as_str()),
            city: self.city,
            phone: self.phone,
            last_donation: self.last_donation,
            status: DonorStatus::Active,
        }
    }
}

/// Contact form contents. Only the email is checked before "sending".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The five donors every fresh store starts with
pub fn seed_donors() -> Vec<Donor> {
    let seed = [
        (1, "Ali Khan", "O+", "Madinah", "966500000001", "2023-10-15"),
        (2, "Sara Ahmed", "A-", "Riyadh", "966500000002", "2023-11-20"),
        (3, "Omar Farooq", "B+", "Jeddah", "966500000003", "2023-09-01"),
        (4, "Fatima Noor", "AB+", "Madinah", "966500000004", "2023-12-05"),
        (5, "Khalid Yasin", "O-", "Makkah", "966500000005", "2023-08-10"),
    ];

    seed.into_iter()
        .map(|(id, name, group, city, phone, last_donation)| Donor {
            id,
            name: name.to_string(),
            blood_group: BloodGroup::from(group),
            city: city.to_string(),
            phone: phone.to_string(),
            last_donation: last_donation.to_string(),
            status: DonorStatus::Active,
        })
        .collect()
}

/// Next id for a new record: one past the largest id, or 1 for an empty list
pub fn next_donor_id(donors: &[Donor]) -> DonorId {
    donors.iter().map(|d| d.id).max().map_or(1, |max| max + 1)
}
