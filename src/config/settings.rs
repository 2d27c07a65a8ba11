//! Application settings loading from config.toml
//!
//! This module provides functionality to load deployment settings from an
//! optional TOML configuration file. Every field has a fallback, so a missing
//! file is not an error - the bot runs fine on defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings parsed from the config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Discord channel that receives operation notifications
    pub notify_channel_id: Option<u64>,
    /// Symbol prefixed to formatted amounts (defaults to `$`)
    pub currency_symbol: Option<String>,
}

impl Settings {
    /// Currency symbol to prefix formatted amounts with.
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or("$")
    }

    /// Notification channel, preferring the TOML value over the
    /// `NOTIFY_CHANNEL_ID` environment variable.
    #[must_use]
    pub fn notify_channel(&self) -> Option<u64> {
        self.notify_channel_id.or_else(|| {
            std::env::var("NOTIFY_CHANNEL_ID")
                .ok()
                .and_then(|raw| raw.parse().ok())
        })
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read settings file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// defaults when the file is absent or unreadable.
#[must_use]
pub fn load_default_settings() -> Settings {
    load_settings("config.toml").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            notify_channel_id = 123456789
            currency_symbol = "₫"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.notify_channel_id, Some(123_456_789));
        assert_eq!(settings.currency(), "₫");
    }

    #[test]
    fn test_defaults_when_fields_absent() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.notify_channel_id, None);
        assert_eq!(settings.currency(), "$");
    }
}
