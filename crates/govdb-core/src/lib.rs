// crates/govdb-core/src/lib.rs

//! govdb-core
//! ==========
//!
//! Governorate and city reference data, read from flat JSON files.
//!
//! - [`model`]: the [`Government`] and [`City`] records and their JSON field names
//! - [`loader`]: the [`DataSource`] abstraction and [`load_all`]
//! - [`enrich`]: resolves `City::government_id` against a list of governorates
//!
//! ```no_run
//! use govdb_core::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let source = DirSource::current_dir()?;
//! let cities: Vec<City> = load_all(&source, CITIES_FILE).await?;
//! let governments: Vec<Government> = load_all(&source, GOVERNMENTS_FILE).await?;
//! let enriched = enrich(&cities, &governments);
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod enrich;
pub mod error;
pub mod loader;
pub mod model;

// Re-exports
pub use crate::enrich::enrich;
pub use crate::error::{GovError, Result};
pub use crate::loader::{load_all, DataSource, DirSource, MemorySource};
pub use crate::model::{City, Government, CITIES_FILE, GOVERNMENTS_FILE};

pub mod prelude {
    pub use crate::enrich::enrich;
    pub use crate::error::{GovError, Result};
    pub use crate::loader::{load_all, DataSource, DirSource, MemorySource};
    pub use crate::model::{City, Government, CITIES_FILE, GOVERNMENTS_FILE};
}
