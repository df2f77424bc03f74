// crates/govdb-server/src/api/mod.rs

//! Versioned endpoint layer.
//!
//! | Route                   | Handler                      |
//! |-------------------------|------------------------------|
//! | `GET /api/v1/governments` | [`v1::list_governments`]   |
//! | `GET /api/v2/governments` | [`v2::list_governments`]   |
//! | `GET /api/v2/cities`      | [`v2::list_cities`]        |
//! | `GET /api/governments`    | [`neutral::list_governments`] |
//! | `GET /api/cities`         | [`neutral::list_cities`]   |

pub mod neutral;
pub mod v1;
pub mod v2;

use crate::state::AppState;
use crate::version::report_versions;
use axum::middleware::map_response;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/governments", get(v1::list_governments))
        .route("/api/v2/governments", get(v2::list_governments))
        .route("/api/v2/cities", get(v2::list_cities))
        .route("/api/governments", get(neutral::list_governments))
        .route("/api/cities", get(neutral::list_cities))
        .layer(map_response(report_versions))
}
