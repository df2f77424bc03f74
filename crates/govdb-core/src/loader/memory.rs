// crates/govdb-core/src/loader/memory.rs
use super::DataSource;
use crate::error::{GovError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory stand-in for the data directory. Handy for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), content.into());
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        self.files
            .get(file_name)
            .cloned()
            .ok_or_else(|| GovError::MissingFile {
                path: PathBuf::from(file_name),
            })
    }
}
