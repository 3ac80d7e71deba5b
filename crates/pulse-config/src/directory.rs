//! Enterprise directory configuration.

use serde::{Deserialize, Serialize};

const fn default_size() -> usize {
    1000
}

const fn default_seed() -> u64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// JSONL file of directory entries. Empty, or a missing file, means
    /// the directory is synthesized.
    #[serde(default)]
    pub source_path: String,

    /// Number of entries in a synthesized directory.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Seed for the synthesized directory, so lookups are stable across runs.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            size: default_size(),
            seed: default_seed(),
        }
    }
}

impl DirectoryConfig {
    pub fn has_source_file(&self) -> bool {
        !self.source_path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DirectoryConfig::default();
        assert!(!config.has_source_file());
        assert_eq!(config.size, 1000);
        assert_eq!(config.seed, 7);
    }
}
