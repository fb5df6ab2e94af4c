//! Client Configuration
//!
//! The browser build has no environment, so the defaults here describe a UI
//! served from the same origin as the backend. Native consumers can read
//! overrides from the environment with [`UiConfig::from_env`]; the web UI
//! bakes `KRISHI_API_BASE` in at compile time.
//!
//! ## Usage
//!
//! ```rust
//! use krishi_core::config::UiConfig;
//!
//! let config = UiConfig::from_json(r#"{"api_base": "http://localhost:5000"}"#).unwrap();
//! assert_eq!(config.url("/api/mandi"), "http://localhost:5000/api/mandi");
//! assert_eq!(config.default_city, "Agra");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// City loaded on startup and when the weather tab opens without a selection
pub const DEFAULT_CITY: &str = "Agra";

/// Storage key holding the persisted theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Cities the backend can resolve to coordinates
pub const KNOWN_CITIES: &[&str] = &[
    "Agra",
    "Delhi",
    "Mumbai",
    "Bengaluru",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
];

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Backend origin; empty means same-origin relative URLs
    pub api_base: String,
    pub default_city: String,
    /// Options offered by the city selector
    pub cities: Vec<String>,
    pub theme_storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_city: DEFAULT_CITY.to_string(),
            cities: KNOWN_CITIES.iter().map(|c| c.to_string()).collect(),
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from `KRISHI_API_BASE` / `KRISHI_DEFAULT_CITY`.
    pub fn from_env() -> Result<Self> {
        let mut config = UiConfig::default();
        if let Some(base) = get_config_opt("KRISHI_API_BASE") {
            debug!("Using API base from environment: {}", base);
            config.api_base = base;
        }
        config.default_city = get_config("KRISHI_DEFAULT_CITY", &config.default_city);
        config.validate()?;
        Ok(config)
    }

    /// Override the API base, ignoring empty values.
    pub fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_city.trim().is_empty() {
            return Err(Error::invalid_config("default_city must not be empty"));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(Error::invalid_config("theme_storage_key must not be empty"));
        }
        if !self.cities.is_empty() && !self.cities.iter().any(|c| c == &self.default_city) {
            return Err(Error::invalid_config(format!(
                "default_city '{}' is not one of the configured cities",
                self.default_city
            )));
        }
        Ok(())
    }

    /// Join the API base and an endpoint path.
    pub fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Get a configuration value with a default.
pub fn get_config(key: &str, default: &str) -> String {
    get_config_opt(key).unwrap_or_else(|| default.to_string())
}

/// Get an optional configuration value.
pub fn get_config_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.default_city, "Agra");
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.cities.len(), KNOWN_CITIES.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = UiConfig::from_json(r#"{"api_base": "http://farm.local/"}"#).unwrap();
        assert_eq!(config.api_base, "http://farm.local/");
        assert_eq!(config.default_city, "Agra");
        assert_eq!(config.url("/api/weather"), "http://farm.local/api/weather");
    }

    #[test]
    fn test_from_json_rejects_unknown_default_city() {
        let err = UiConfig::from_json(r#"{"default_city": "Atlantis"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_city_list_accepts_any_default() {
        let config = UiConfig::from_json(r#"{"cities": [], "default_city": "Nagpur"}"#).unwrap();
        assert_eq!(config.default_city, "Nagpur");
    }

    #[test]
    fn test_url_same_origin() {
        let config = UiConfig::default();
        assert_eq!(config.url("/status"), "/status");
        assert_eq!(config.url("api/mandi"), "/api/mandi");
    }

    #[test]
    fn test_with_api_base_ignores_blank() {
        let config = UiConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api_base, "");
        let config = config.with_api_base(Some("http://10.0.0.2:5000"));
        assert_eq!(config.url("/status"), "http://10.0.0.2:5000/status");
    }
}
