//! govdb-rs
//!
//! Umbrella crate for the demos; re-exports `govdb-core`.

pub use govdb_core::*;
