//! Insight generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_min_batch() -> usize {
    15
}

const fn default_max_batch() -> usize {
    25
}

const fn default_initial_batch() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Smallest batch a `generate` trigger produces.
    #[serde(default = "default_min_batch")]
    pub min_batch: usize,

    /// Largest batch a `generate` trigger produces.
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,

    /// Batch size seeded by `mpulse init`.
    #[serde(default = "default_initial_batch")]
    pub initial_batch: usize,

    /// Fixed RNG seed. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_batch: default_min_batch(),
            max_batch: default_max_batch(),
            initial_batch: default_initial_batch(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check that the batch bounds form a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `min_batch > max_batch`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_batch > self.max_batch {
            return Err(ConfigError::InvalidValue {
                field: "generator.min_batch".into(),
                reason: format!(
                    "min_batch ({}) exceeds max_batch ({})",
                    self.min_batch, self.max_batch
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_batch, 15);
        assert_eq!(config.max_batch, 25);
        assert_eq!(config.initial_batch, 50);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = GeneratorConfig {
            min_batch: 30,
            max_batch: 10,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("generator.min_batch"), "{err}");
    }

    #[test]
    fn equal_bounds_are_fine() {
        let config = GeneratorConfig {
            min_batch: 20,
            max_batch: 20,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
