//! # Donor Commands
//!
//! Mutations of the donor collection as plain data. `apply` is a pure
//! function of (current donors, command) and [`DonorService`] wraps it in the
//! load → apply → save cycle against an injected repository.

use log::{info, warn};

use crate::config::DirectoryConfig;
use crate::error::StoreResult;
use crate::stats::DonorStats;
use crate::store::DonorRepository;
use crate::tasks::Delay;
use crate::{next_donor_id, Donor, DonorId, NewDonorRequest};

pub const REGISTERED_MESSAGE: &str = "Registration Successful!";
pub const DELETED_MESSAGE: &str = "Donor deleted successfully!";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this donor?";

/// A change to the donor collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorCommand {
    Register(NewDonorRequest),
    Delete(DonorId),
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub donors: Vec<Donor>,
    /// Notification for the user, `None` when nothing changed
    pub message: Option<String>,
    /// Id of the record the command created or removed
    pub affected: Option<DonorId>,
}

impl DonorCommand {
    pub fn apply(self, mut donors: Vec<Donor>) -> CommandOutcome {
        match self {
            DonorCommand::Register(request) => {
                let id = next_donor_id(&donors);
                donors.push(request.into_donor(id));
                CommandOutcome {
                    donors,
                    message: Some(REGISTERED_MESSAGE.to_string()),
                    affected: Some(id),
                }
            }
            DonorCommand::Delete(id) => {
                let before = donors.len();
                donors.retain(|donor| donor.id != id);
                let removed = donors.len() != before;
                CommandOutcome {
                    donors,
                    message: removed.then(|| DELETED_MESSAGE.to_string()),
                    affected: removed.then_some(id),
                }
            }
        }
    }
}

/// Executes donor commands against a repository
#[derive(Debug, Clone)]
pub struct DonorService<R> {
    repository: R,
    config: DirectoryConfig,
}

impl<R: DonorRepository> DonorService<R> {
    pub fn new(repository: R, config: DirectoryConfig) -> Self {
        Self { repository, config }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// All donors, seeding the store on first use
    pub fn list(&self) -> StoreResult<Vec<Donor>> {
        self.repository.load()
    }

    pub fn stats(&self) -> StoreResult<DonorStats> {
        Ok(DonorStats::from_donors(&self.repository.load()?))
    }

    /// Read the whole collection, apply the command and write it all back
    pub fn execute(&self, command: DonorCommand) -> StoreResult<CommandOutcome> {
        let donors = self.repository.load()?;
        let outcome = command.apply(donors);
        self.repository.save(&outcome.donors)?;
        Ok(outcome)
    }

    /// Store a new donor after the simulated registration latency
    pub async fn register<D: Delay + ?Sized>(
        &self,
        delay: &D,
        request: NewDonorRequest,
    ) -> StoreResult<CommandOutcome> {
        info!("Registering donor: name={}, blood_group={}", request.name, request.blood_group);

        delay.sleep(self.config.register_delay_ms).await;
        let outcome = self.execute(DonorCommand::Register(request))?;

        if let Some(id) = outcome.affected {
            info!("Registered donor with ID: {}", id);
        }
        Ok(outcome)
    }

    pub fn delete(&self, id: DonorId) -> StoreResult<CommandOutcome> {
        info!("Deleting donor: {}", id);

        let outcome = self.execute(DonorCommand::Delete(id))?;
        if outcome.affected.is_none() {
            warn!("Donor not found: {}", id);
        }
        Ok(outcome)
    }
}
