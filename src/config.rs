//! Match configuration loaded from TOML.

use crate::games::tictactoe::COMPUTER_NAME;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a match session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Delay before the computer plays, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Name used when player one leaves the name blank.
    #[serde(default = "default_player1_name")]
    player1_default: String,

    /// Name used when player two leaves the name blank.
    #[serde(default = "default_player2_name")]
    player2_default: String,

    /// Name shown for the computer seat.
    #[serde(default = "default_computer_name")]
    computer_name: String,
}

fn default_computer_delay_ms() -> u64 {
    300
}

fn default_player1_name() -> String {
    "Player 1".to_string()
}

fn default_player2_name() -> String {
    "Player 2".to_string()
}

fn default_computer_name() -> String {
    COMPUTER_NAME.to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            player1_default: default_player1_name(),
            player2_default: default_player2_name(),
            computer_name: default_computer_name(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(computer_delay_ms = config.computer_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Delay before the computer plays.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Resolves entered names, substituting defaults for missing or blank ones.
    pub fn resolve_names(&self, player1: Option<&str>, player2: Option<&str>) -> (String, String) {
        (
            name_or_default(player1, &self.player1_default),
            name_or_default(player2, &self.player2_default),
        )
    }
}

fn name_or_default<'a>(entered: Option<&'a str>, fallback: &'a str) -> String {
    entered
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.computer_delay(), Duration::from_millis(300));
        assert_eq!(config.player1_default(), "Player 1");
        assert_eq!(config.player2_default(), "Player 2");
        assert_eq!(config.computer_name(), "Computer");
    }

    #[test]
    fn test_computer_name_is_kept() {
        let config = MatchConfig::from_toml("computer_name = \"Robot\"").expect("valid toml");
        assert_eq!(config.computer_name(), "Robot");
        let text = config.to_toml().expect("serializable");
        assert!(text.contains("computer_name = \"Robot\""));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MatchConfig::from_toml("computer_delay_ms = 50").expect("valid toml");
        assert_eq!(*config.computer_delay_ms(), 50);
        assert_eq!(config.player2_default(), "Player 2");
    }

    #[test]
    fn test_blank_names_fall_back() {
        let config = MatchConfig::default();
        let (p1, p2) = config.resolve_names(Some("  "), None);
        assert_eq!(p1, "Player 1");
        assert_eq!(p2, "Player 2");

        let (p1, p2) = config.resolve_names(Some("Alice"), Some(" Bob "));
        assert_eq!(p1, "Alice");
        assert_eq!(p2, "Bob");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = MatchConfig::from_toml("computer_delay_ms = \"soon\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MatchConfig::default();
        let text = config.to_toml().expect("serializable");
        assert_eq!(MatchConfig::from_toml(&text).expect("parses"), config);
    }
}
