use serde::{Deserialize, Serialize};

/// Tunables for the donor directory.
///
/// There is no configuration source in the browser, so every value comes from
/// `Default`. Tests override individual fields with struct update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// localStorage key holding the JSON donor collection
    pub donors_key: String,
    /// localStorage key holding the literal theme preference
    pub theme_key: String,
    /// Simulated latency before a search resolves
    pub search_delay_ms: u32,
    /// Quiet period after the last city keystroke before searching
    pub city_debounce_ms: u32,
    /// Simulated latency before a registration is stored
    pub register_delay_ms: u32,
    /// Scroll offset past which the scroll-to-top button shows
    pub scroll_top_threshold_px: f64,
    /// Placeholder cards shown while a search is pending
    pub skeleton_cards: usize,
    /// Prefix of the messaging deep-link, followed by the phone number
    pub messaging_base_url: String,
    pub site_name: String,
    /// Page the registration flow returns to
    pub listing_page: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            donors_key: "donors".to_string(),
            theme_key: "theme".to_string(),
            search_delay_ms: 500,
            city_debounce_ms: 500,
            register_delay_ms: 1000,
            scroll_top_threshold_px: 300.0,
            skeleton_cards: 3,
            messaging_base_url: "https://wa.me/".to_string(),
            site_name: "BloodDonorFinder".to_string(),
            listing_page: "index.html".to_string(),
        }
    }
}
