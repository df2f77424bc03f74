// crates/govdb-server/src/state.rs
use govdb_core::DataSource;
use std::sync::Arc;

/// Shared handler state. Holds no data, only the place to read it from.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn DataSource>,
}

impl AppState {
    pub fn new(source: impl DataSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }
}
