//! Search error types for pulse-search.

use std::path::PathBuf;

/// Errors from loading the enterprise directory.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The configured directory file could not be opened or read.
    #[error("cannot read directory source {path}: {source}")]
    DirectorySource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the directory file is not a valid entry.
    #[error("malformed directory entry in {path}: {source}")]
    Jsonl {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
