//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Level names accepted for `logging.level`.
pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback level when `ROSTER_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Check that `level` names a known level (ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for any other value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(self.level.trim()))
        {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                self.level,
                LEVELS.join(", ")
            ),
        })
    }
}
