//! libSQL database configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path. Empty means `<data_dir>/marketpulse.db`.
    /// `":memory:"` opens a throwaway in-memory database.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Whether an explicit path overrides the data-dir default.
    pub fn has_explicit_path(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
