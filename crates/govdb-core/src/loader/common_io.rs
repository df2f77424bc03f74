// crates/govdb-core/src/loader/common_io.rs
use crate::error::{GovError, Result};
use serde::de::DeserializeOwned;
#[cfg(feature = "compact")]
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;
#[cfg(feature = "compact")]
use std::io::Read;

/// Suffix of the compressed variant of a data file.
#[cfg(feature = "compact")]
pub const GZ_SUFFIX: &str = ".gz";

/// Parses `bytes` as a JSON array of `T`.
pub fn parse_records<T: DeserializeOwned>(file_name: &str, bytes: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(bytes).map_err(|source| GovError::MalformedJson {
        file: file_name.to_owned(),
        source,
    })
}

/// `<path>.gz`, the file looked up when the plain one is missing.
#[cfg(feature = "compact")]
pub fn gz_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(GZ_SUFFIX);
    name.into()
}

/// Gunzips the raw content of `path`.
#[cfg(feature = "compact")]
pub fn gunzip(path: &Path, bytes: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut out)
        .map_err(|source| GovError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(out)
}
