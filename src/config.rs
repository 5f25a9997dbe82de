//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Longest cosmetic reply delay the engine honors, in milliseconds.
const MAX_REPLY_DELAY_MS: u64 = 5_000;

/// Configuration for the session engine.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pause before the machine answers a human move, in milliseconds.
    /// Purely cosmetic; clamped to five seconds.
    #[serde(default = "default_reply_delay_ms")]
    reply_delay_ms: u64,

    /// Seed for session randomness. `None` draws from entropy.
    #[serde(default)]
    rng_seed: Option<u64>,
}

fn default_reply_delay_ms() -> u64 {
    1_000
}

impl EngineConfig {
    /// Creates a configuration with an explicit reply delay and seed.
    pub fn new(reply_delay_ms: u64, rng_seed: Option<u64>) -> Self {
        Self {
            reply_delay_ms,
            rng_seed,
        }
        .clamped()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading engine config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(reply_delay_ms = config.reply_delay_ms, "Config loaded");
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        self.reply_delay_ms = self.reply_delay_ms.min(MAX_REPLY_DELAY_MS);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            rng_seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
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
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(*config.reply_delay_ms(), 1_000);
        assert_eq!(*config.rng_seed(), None);
    }

    #[test]
    fn test_new_clamps_delay() {
        let config = EngineConfig::new(60_000, Some(3));
        assert_eq!(*config.reply_delay_ms(), MAX_REPLY_DELAY_MS);
        assert_eq!(*config.rng_seed(), Some(3));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "reply_delay_ms = 250").expect("Failed to write config");
        writeln!(file, "rng_seed = 42").expect("Failed to write config");

        let config = EngineConfig::from_file(file.path()).expect("Load failed");
        assert_eq!(*config.reply_delay_ms(), 250);
        assert_eq!(*config.rng_seed(), Some(42));
    }

    #[test]
    fn test_from_file_applies_defaults_and_clamp() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "reply_delay_ms = 999999").expect("Failed to write config");

        let config = EngineConfig::from_file(file.path()).expect("Load failed");
        assert_eq!(*config.reply_delay_ms(), MAX_REPLY_DELAY_MS);
        assert_eq!(*config.rng_seed(), None);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "reply_delay_ms = \"soon\"").expect("Failed to write config");

        assert!(EngineConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = EngineConfig::from_file("/nonexistent/engine.toml");
        assert!(err.is_err());
    }
}
