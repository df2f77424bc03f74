// crates/govdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Splits the Physical Layer (where the bytes come from) from the payload
//! parsing. A [`DataSource`] only knows how to fetch the raw content of a
//! named file; [`load_all`] turns that content into typed records.
//!
//! Nothing is cached: every call goes back to the source.

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

mod common_io;
mod dir;
mod memory;

pub use dir::DirSource;
pub use memory::MemorySource;

/// Where the raw JSON files live.
///
/// Implementations must be cheap to share across requests; the server keeps
/// one behind an `Arc` and calls it concurrently.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Returns the full content of `file_name`.
    ///
    /// A file that does not exist must be reported as
    /// [`GovError::MissingFile`](crate::GovError::MissingFile).
    async fn read(&self, file_name: &str) -> Result<Vec<u8>>;
}

/// Loads every record of type `T` from `file_name`.
///
/// The file must hold a JSON array; records are returned in array order.
/// Read and parse failures are returned unchanged.
pub async fn load_all<T, S>(source: &S, file_name: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let bytes = source.read(file_name).await?;
    let records: Vec<T> = common_io::parse_records(file_name, &bytes)?;
    tracing::debug!(file = file_name, count = records.len(), "loaded records");
    Ok(records)
}
