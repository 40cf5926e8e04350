//! Configuration and settings management
//!
//! Loads settings from environment variables with placeholder defaults.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vendor endpoint probed for availability unless overridden.
const DEFAULT_TICKETS_API_URL: &str =
    "https://api.iticket.uz/ru/v5/events/concerts/uzbekistan-vs-kyrgyz-republic?client=web";

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    #[serde(default = "default_telegram_token")]
    pub telegram_token: String,

    /// Ticket vendor availability endpoint
    #[serde(default = "default_tickets_api_url")]
    pub tickets_api_url: String,

    /// Seconds between auto-check ticks
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,

    /// Listen port for the liveness endpoint
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_telegram_token() -> String {
    "YOUR_TOKEN".to_string()
}

fn default_tickets_api_url() -> String {
    DEFAULT_TICKETS_API_URL.to_string()
}

const fn default_check_interval_secs() -> u64 {
    30
}

const fn default_port() -> u16 {
    8080
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add in the current environment file
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked into git
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of APP)
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Also add settings from environment variables directly (without prefix)
            // ignore_empty treats empty env vars as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }

    /// Interval between auto-check ticks.
    #[must_use]
    pub const fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::time::Duration;

    #[test]
    fn defaults_applied_when_fields_absent() {
        let settings: Settings =
            serde_json::from_value(serde_json::json!({})).expect("defaults deserialize");

        assert_eq!(settings.telegram_token, "YOUR_TOKEN");
        assert!(settings.tickets_api_url.contains("api.iticket.uz"));
        assert_eq!(settings.check_interval_secs, 30);
        assert_eq!(settings.port, 8080);
    }

    #[test]
    fn check_interval_converts_seconds() {
        let settings: Settings =
            serde_json::from_value(serde_json::json!({ "check_interval_secs": 5 }))
                .expect("settings deserialize");

        assert_eq!(settings.check_interval(), Duration::from_secs(5));
    }
}
