use shared::chrome::{self, Theme};
use shared::search::{run_search, SearchOutcome, SearchQuery};
use shared::{
    CommandOutcome, DirectoryConfig, Donor, DonorId, DonorService, NewDonorRequest,
    StorageDonorRepository,
};

use super::delay::TimerDelay;
use super::logging::Logger;
use super::storage::BrowserStorage;

type BrowserDonorService = DonorService<StorageDonorRepository<BrowserStorage>>;

/// Client for the donor directory stored in this browser.
///
/// Plays the part a network API client would: components hold one, call its
/// async methods and get display-ready results or an error message.
#[derive(Clone, PartialEq)]
pub struct DirectoryClient {
    config: DirectoryConfig,
}

impl DirectoryClient {
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    pub fn with_config(config: DirectoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    fn service(&self) -> BrowserDonorService {
        let repository = StorageDonorRepository::new(BrowserStorage, self.config.donors_key.clone());
        DonorService::new(repository, self.config.clone())
    }

    /// Every donor, seeding the store on first visit
    pub fn list_donors(&self) -> Result<Vec<Donor>, String> {
        self.service().list().map_err(|e| {
            Logger::error_with_component("directory", &format!("Failed to load donors: {}", e));
            format!("Failed to load donors: {}", e)
        })
    }

    pub async fn search(&self, query: SearchQuery) -> Result<SearchOutcome, String> {
        let service = self.service();
        run_search(service.repository(), &TimerDelay, &query, &self.config)
            .await
            .map_err(|e| {
                Logger::error_with_component("directory", &format!("Search failed: {}", e));
                format!("Search failed: {}", e)
            })
    }

    pub async fn register(&self, request: NewDonorRequest) -> Result<CommandOutcome, String> {
        self.service()
            .register(&TimerDelay, request)
            .await
            .map_err(|e| {
                Logger::error_with_component("directory", &format!("Registration failed: {}", e));
                format!("Registration failed: {}", e)
            })
    }

    pub fn delete_donor(&self, id: DonorId) -> Result<CommandOutcome, String> {
        self.service().delete(id).map_err(|e| {
            Logger::error_with_component("directory", &format!("Delete failed: {}", e));
            format!("Delete failed: {}", e)
        })
    }

    pub fn load_theme(&self) -> Theme {
        chrome::load_theme(&BrowserStorage, &self.config.theme_key)
    }

    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = chrome::save_theme(&BrowserStorage, &self.config.theme_key, theme) {
            Logger::warn_with_component("theme", &format!("Failed to save theme: {}", e));
        }
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}
