// crates/govdb-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading reference data.
///
/// None of these are recovered from inside the crate: the loader hands them
/// straight back to the caller.
#[derive(Debug, Error)]
pub enum GovError {
    /// The requested data file does not exist in the data directory.
    #[error("data file not found at {}", path.display())]
    MissingFile { path: PathBuf },

    /// The file exists but is not a JSON array of the expected records.
    #[error("malformed JSON in {file}: {source}")]
    MalformedJson {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GovError>;
