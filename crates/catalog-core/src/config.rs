//! Client Configuration
//!
//! Defaults for the catalog endpoint, input debouncing and storage keys.

use std::time::Duration;

/// Public catalog service
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Delay between the last keystroke and the search event
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Durable key holding `{favorites, viewMode}`
pub const FAVORITES_STORAGE_KEY: &str = "rick-morty-favorites-storage";

/// Durable key holding the color theme
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without trailing slash
    pub api_base_url: String,
    pub search_debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
