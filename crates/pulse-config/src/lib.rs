//! # pulse-config
//!
//! Layered configuration loading for MarketPulse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MARKETPULSE_*` prefix, `__` as separator)
//! 2. Project-level `.marketpulse/config.toml`
//! 3. User-level `~/.config/marketpulse/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MARKETPULSE_GENERATOR__SEED` -> `generator.seed`,
//! `MARKETPULSE_DATABASE__PATH` -> `database.path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pulse_config::PulseConfig;
//!
//! let config = PulseConfig::load().expect("config");
//! println!("database: {}", config.database_path().display());
//! ```

mod database;
mod directory;
mod error;
mod general;
mod generator;

pub use database::DatabaseConfig;
pub use directory::DirectoryConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generator::GeneratorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "marketpulse.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PulseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are the caller's concern and must be applied before this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on malformed sources and
    /// `ConfigError::InvalidValue` if the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".marketpulse/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MARKETPULSE_").split("__"))
    }

    /// Cross-field checks figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        if self.general.data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.data_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Directory holding the database and the session file.
    pub fn data_dir(&self) -> &Path {
        Path::new(&self.general.data_dir)
    }

    /// Resolved database location: the explicit `database.path`, or
    /// `<data_dir>/marketpulse.db`.
    pub fn database_path(&self) -> PathBuf {
        if self.database.has_explicit_path() {
            PathBuf::from(&self.database.path)
        } else {
            self.data_dir().join(DATABASE_FILE)
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("marketpulse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PulseConfig::default();
        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.generator.initial_batch, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn database_path_defaults_into_data_dir() {
        let config = PulseConfig::default();
        assert_eq!(
            config.database_path(),
            PathBuf::from(".marketpulse").join("marketpulse.db")
        );
    }

    #[test]
    fn explicit_database_path_wins() {
        let mut config = PulseConfig::default();
        config.database.path = "/tmp/other.db".into();
        assert_eq!(config.database_path(), PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn blank_data_dir_is_invalid() {
        let mut config = PulseConfig::default();
        config.general.data_dir = "  ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
