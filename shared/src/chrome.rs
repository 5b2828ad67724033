//! Page chrome shared by every page: theme, mobile menu, scroll-to-top button
//! and the custom alert overlay.
//!
//! State changes go through [`ChromeState::apply`], a pure transition table
//! the frontend drives from `use_reducer`. Touching the DOM is left to the
//! caller.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StoreResult;
use crate::store::KeyValueStorage;

/// Colour scheme, persisted as the literal "dark" or "light"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Stored preference to theme; anything but "dark" is light
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The theme switch is a checkbox that is checked in dark mode
    pub fn from_switch(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class added to `<body>` for this theme, if any
    pub fn body_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark-mode"),
            Theme::Light => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn load_theme<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Theme {
    match storage.get_item(key) {
        Ok(value) => Theme::from_preference(value.as_deref()),
        Err(e) => {
            warn!("Falling back to light theme: {}", e);
            Theme::Light
        }
    }
}

pub fn save_theme<S: KeyValueStorage + ?Sized>(storage: &S, key: &str, theme: Theme) -> StoreResult<()> {
    storage.set_item(key, theme.as_str())
}

/// What happens after the user acknowledges an alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertFollowUp {
    /// Leave the current page for the given URL
    NavigateTo(String),
}

/// The message currently in the alert overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
    pub follow_up: Option<AlertFollowUp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChromeState {
    pub theme: Theme,
    pub menu_open: bool,
    pub scroll_top_visible: bool,
    pub scroll_threshold_px: f64,
    /// The overlay is created on the first alert and kept afterwards
    pub alert_mounted: bool,
    pub alert: Option<AlertState>,
}

impl ChromeState {
    pub fn new(theme: Theme, scroll_threshold_px: f64) -> Self {
        Self {
            theme,
            menu_open: false,
            scroll_top_visible: false,
            scroll_threshold_px,
            alert_mounted: false,
            alert: None,
        }
    }

    pub fn alert_active(&self) -> bool {
        self.alert.is_some()
    }

    pub fn apply(&self, action: ChromeAction) -> ChromeState {
        let mut next = self.clone();
        match action {
            ChromeAction::SetTheme(theme) => next.theme = theme,
            ChromeAction::ToggleMenu => next.menu_open = !self.menu_open,
            ChromeAction::Scrolled(offset) => {
                next.scroll_top_visible = offset > self.scroll_threshold_px;
            }
            ChromeAction::ShowAlert { message, follow_up } => {
                next.alert_mounted = true;
                next.alert = Some(AlertState { message, follow_up });
            }
            ChromeAction::DismissAlert => next.alert = None,
        }
        next
    }
}

impl Default for ChromeState {
    fn default() -> Self {
        Self::new(Theme::Light, 300.0)
    }
}

/// Named UI events handled by the chrome
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeAction {
    SetTheme(Theme),
    ToggleMenu,
    /// Vertical scroll offset in pixels
    Scrolled(f64),
    ShowAlert {
        message: String,
        follow_up: Option<AlertFollowUp>,
    },
    DismissAlert,
}

impl ChromeAction {
    pub fn alert(message: impl Into<String>) -> Self {
        ChromeAction::ShowAlert {
            message: message.into(),
            follow_up: None,
        }
    }

    pub fn alert_then_navigate(message: impl Into<String>, url: impl Into<String>) -> Self {
        ChromeAction::ShowAlert {
            message: message.into(),
            follow_up: Some(AlertFollowUp::NavigateTo(url.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn test_theme_defaults_to_light() {
        let storage = MemoryStorage::new();
        assert_eq!(load_theme(&storage, "theme"), Theme::Light);
        assert_eq!(Theme::from_preference(Some("sepia")), Theme::Light);
        assert_eq!(Theme::Light.body_class(), None);
    }

    #[test]
    fn test_theme_persists_as_literal() {
        let storage = MemoryStorage::new();
        save_theme(&storage, "theme", Theme::Dark).unwrap();

        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&storage, "theme"), Theme::Dark);
        assert_eq!(Theme::Dark.body_class(), Some("dark-mode"));
    }

    #[test]
    fn test_switch_maps_to_theme() {
        assert_eq!(Theme::from_switch(true), Theme::Dark);
        assert_eq!(Theme::from_switch(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn test_menu_toggles() {
        let state = ChromeState::default();
        let opened = state.apply(ChromeAction::ToggleMenu);
        assert!(opened.menu_open);
        assert!(!opened.apply(ChromeAction::ToggleMenu).menu_open);
    }

    #[test]
    fn test_scroll_button_threshold_is_exclusive() {
        let state = ChromeState::default();
        assert!(!state.apply(ChromeAction::Scrolled(0.0)).scroll_top_visible);
        assert!(!state.apply(ChromeAction::Scrolled(300.0)).scroll_top_visible);
        assert!(state.apply(ChromeAction::Scrolled(300.5)).scroll_top_visible);

        let shown = state.apply(ChromeAction::Scrolled(800.0));
        assert!(!shown.apply(ChromeAction::Scrolled(120.0)).scroll_top_visible);
    }

    #[test]
    fn test_alert_overlay_is_created_once_and_reused() {
        let state = ChromeState::default();
        assert!(!state.alert_mounted);

        let shown = state.apply(ChromeAction::alert("Message Sent Successfully!"));
        assert!(shown.alert_mounted);
        assert!(shown.alert_active());

        let dismissed = shown.apply(ChromeAction::DismissAlert);
        assert!(dismissed.alert_mounted);
        assert!(!dismissed.alert_active());

        let again = dismissed.apply(ChromeAction::alert("Donor deleted successfully!"));
        assert_eq!(again.alert.unwrap().message, "Donor deleted successfully!");
    }

    #[test]
    fn test_alert_carries_follow_up() {
        let state = ChromeState::default()
            .apply(ChromeAction::alert_then_navigate("Registration Successful!", "index.html"));

        assert_eq!(
            state.alert.unwrap().follow_up,
            Some(AlertFollowUp::NavigateTo("index.html".to_string()))
        );
    }
}
