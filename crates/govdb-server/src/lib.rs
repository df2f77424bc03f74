// crates/govdb-server/src/lib.rs

//! govdb-server
//! ============
//!
//! Versioned, read-only HTTP API over the `govdb-core` reference data.
//!
//! | Route | Behavior |
//! |---|---|
//! | `GET /api/v1/governments` | first five governorates |
//! | `GET /api/v2/governments` | all governorates |
//! | `GET /api/v2/cities` | all cities, each with its governorate resolved |
//! | `GET /api/governments`, `GET /api/cities` | version picked by `api-version` (query or header), default v2 |
//! | `GET /swagger/{v1,v2}/swagger.json` | OpenAPI documents (development only) |
//! | `GET /health` | liveness probe |
//!
//! Every request reads the JSON files again; nothing is cached.
//!
//! ```text
//! govdb-server --data-dir ./data --port 5000 --environment development
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod args;
pub mod error;
pub mod logging;
pub mod openapi;
pub mod shutdown;
pub mod state;
pub mod version;

pub use crate::args::{Environment, LogFormat, ServerArgs};
pub use crate::error::{ApiError, ApiResult};
pub use crate::state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the full application router.
pub fn app(state: AppState, environment: Environment) -> Router {
    let mut router = Router::new()
        .merge(api::router())
        .route("/health", get(health));

    if environment.is_development() {
        router = router.merge(openapi::router());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
