//! Enterprise directory sources.
//!
//! A configured JSONL file wins. When no file is configured, or the file is
//! missing, the directory is synthesized from [`DirectoryConfig::seed`] so the
//! same lookups give the same answers on every run.

use std::path::{Path, PathBuf};

use pulse_config::DirectoryConfig;
use pulse_core::catalog::{ACTIVITIES, DISTRICTS, UNKNOWN_CODE, code_for_activity};
use pulse_core::entities::DirectoryEntry;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::SearchError;

const NAME_PREFIXES: [&str; 16] = [
    "Shree", "Bharat", "Ganesh", "Sai", "Lakshmi", "Krishna", "Apex", "Vardhman", "Patel",
    "Mehta", "Sunrise", "Kaveri", "Om", "Navratna", "Rajdhani", "Sagar",
];

const NAME_TRADES: [&str; 12] = [
    "Polymers", "Textiles", "Auto Components", "Foods", "Electronics", "Pharma", "Fabricators",
    "Industries", "Enterprises", "Exports", "Engineering", "Traders",
];

const NAME_SUFFIXES: [&str; 5] = ["Pvt Ltd", "Ltd", "LLP", "& Sons", "and Co"];

/// Where the loaded directory came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOrigin {
    File(PathBuf),
    Synthesized { seed: u64 },
}

/// The loaded enterprise directory.
#[derive(Debug, Clone)]
pub struct Directory {
    pub entries: Vec<DirectoryEntry>,
    pub origin: DirectoryOrigin,
}

impl Directory {
    /// Load the directory described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the configured file exists but cannot be read
    /// or contains a malformed line. A missing file is not an error.
    pub fn load(config: &DirectoryConfig) -> Result<Self, SearchError> {
        if config.has_source_file() {
            let path = Path::new(&config.source_path);
            if path.exists() {
                let entries = load_jsonl(path)?;
                tracing::debug!(path = %path.display(), entries = entries.len(), "directory loaded");
                return Ok(Self {
                    entries,
                    origin: DirectoryOrigin::File(path.to_path_buf()),
                });
            }
            tracing::warn!(
                path = %path.display(),
                "directory source not found, using synthesized directory"
            );
        }

        Ok(Self {
            entries: synthesize(config.size, config.seed),
            origin: DirectoryOrigin::Synthesized { seed: config.seed },
        })
    }
}

/// Read one [`DirectoryEntry`] per line from a JSONL file.
///
/// # Errors
///
/// Returns `SearchError::DirectorySource` if the file cannot be opened and
/// `SearchError::Jsonl` on the first line that fails to parse.
pub fn load_jsonl(path: &Path) -> Result<Vec<DirectoryEntry>, SearchError> {
    let lines = serde_jsonlines::json_lines(path).map_err(|source| {
        SearchError::DirectorySource {
            path: path.to_path_buf(),
            source,
        }
    })?;

    lines
        .collect::<std::io::Result<Vec<DirectoryEntry>>>()
        .map_err(|source| SearchError::Jsonl {
            path: path.to_path_buf(),
            source,
        })
}

/// Build `size` directory entries from `seed`.
///
/// Activities come from the catalog and codes follow the activity mapping.
#[must_use]
pub fn synthesize(size: usize, seed: u64) -> Vec<DirectoryEntry> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let activity = pick(&ACTIVITIES, &mut rng);
            DirectoryEntry {
                enterprise_name: company_name(&mut rng),
                district: pick(&DISTRICTS, &mut rng).to_string(),
                activity: activity.to_string(),
                classification_code: code_for_activity(activity)
                    .unwrap_or(UNKNOWN_CODE)
                    .to_string(),
            }
        })
        .collect()
}

fn company_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(&NAME_PREFIXES, rng),
        pick(&NAME_TRADES, rng),
        pick(&NAME_SUFFIXES, rng)
    )
}

fn pick<R: Rng>(items: &[&'static str], rng: &mut R) -> &'static str {
    items[rng.random_range(0..items.len())]
}
