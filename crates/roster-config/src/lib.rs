//! # roster-config
//!
//! Layered configuration loading for Roster using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROSTER_*` prefix, `__` as separator)
//! 2. Project-level `.roster/config.toml`
//! 3. User-level `~/.config/roster/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROSTER_CONNECTOR__MEMBER_TYPE_POLICY` ->
//! `connector.member_type_policy` and `ROSTER_LOGGING__LEVEL` ->
//! `logging.level`. The `__` (double underscore) separates nested sections.
//!
//! # Usage
//!
//! ```no_run
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load_with_dotenv().expect("config");
//! println!("member policy: {}", config.connector.member_type_policy);
//! ```

mod connector;
mod error;
mod logging;

pub use connector::ConnectorConfig;
pub use error::ConfigError;
pub use logging::{LEVELS, LoggingConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of the environment variables read by [`RosterConfig::figment`].
pub const ENV_PREFIX: &str = "ROSTER_";

/// Levels searched for `.env`: the crate, `crates/`, the workspace root.
pub const DOTENV_SEARCH_DEPTH: usize = 3;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".roster/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub connector: ConnectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed or a
    /// value has the wrong shape, and `ConfigError::InvalidValue` when
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the workspace root.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and hosts can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field and free-form values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }

    /// Read the first `.env` found walking up [`DOTENV_SEARCH_DEPTH`] levels
    /// from `CARGO_MANIFEST_DIR`, else the one in the working directory.
    /// Variables already set in the process are left alone.
    fn load_dotenv() {
        let nearest = std::env::var_os("CARGO_MANIFEST_DIR").and_then(|manifest_dir| {
            PathBuf::from(manifest_dir)
                .ancestors()
                .take(DOTENV_SEARCH_DEPTH)
                .map(|dir| dir.join(".env"))
                .find(|path| path.exists())
        });

        let _ = match nearest {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
    }
}
