//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default data directory, relative to the working directory.
fn default_data_dir() -> String {
    ".marketpulse".to_string()
}

/// Default number of ranked rows shown by `mpulse dashboard`.
const fn default_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the database and the session file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Default result limit for dashboard rankings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.data_dir, ".marketpulse");
        assert_eq!(config.default_limit, 10);
    }
}
