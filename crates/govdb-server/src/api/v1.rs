// crates/govdb-server/src/api/v1.rs

//! Version 1: the legacy, restricted surface.

use crate::error::{ApiResult, Problem};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use govdb_core::{load_all, DataSource, Government, Result, GOVERNMENTS_FILE};

/// v1 only ever hands out this many governorates.
pub const GOVERNMENT_LIMIT: usize = 5;

/// The first [`GOVERNMENT_LIMIT`] governorates, in file order.
pub async fn governments(source: &dyn DataSource) -> Result<Vec<Government>> {
    let mut governments: Vec<Government> = load_all(source, GOVERNMENTS_FILE).await?;
    governments.truncate(GOVERNMENT_LIMIT);
    Ok(governments)
}

#[utoipa::path(
    get,
    path = "/api/v1/governments",
    tag = "Governments",
    responses(
        (status = 200, description = "First five governorates", body = Vec<Government>),
        (status = 500, description = "Data file missing or unreadable", body = Problem)
    )
)]
pub async fn list_governments(State(state): State<AppState>) -> ApiResult<Json<Vec<Government>>> {
    Ok(Json(governments(state.source()).await?))
}
