// crates/govdb-core/src/loader/dir.rs
#[cfg(feature = "compact")]
use super::common_io;
use super::DataSource;
use crate::error::{GovError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads data files from a directory on disk.
///
/// Each call opens, reads and closes the file; the handle never outlives
/// [`DataSource::read`].
///
/// With the `compact` feature, a missing `<name>` is looked up again as
/// `<name>.gz`, and any `*.gz` file is gunzipped before it is returned.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the process's current working directory.
    pub fn current_dir() -> Result<Self> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(|source| GovError::Io {
                path: PathBuf::from("."),
                source,
            })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

#[async_trait]
impl DataSource for DirSource {
    async fn read(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.path_of(file_name);
        match read_file(&path).await {
            #[cfg(feature = "compact")]
            Ok(bytes) if file_name.ends_with(common_io::GZ_SUFFIX) => {
                common_io::gunzip(&path, &bytes)
            }
            #[cfg(feature = "compact")]
            Err(GovError::MissingFile { .. }) => {
                let gz = common_io::gz_path(&path);
                let bytes = read_file(&gz).await.map_err(|e| match e {
                    GovError::MissingFile { .. } => GovError::MissingFile { path: path.clone() },
                    other => other,
                })?;
                tracing::debug!(path = %gz.display(), "reading compressed data file");
                common_io::gunzip(&gz, &bytes)
            }
            other => other,
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| match source.kind() {
        ErrorKind::NotFound => GovError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => GovError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
