// crates/govdb-server/src/api/neutral.rs

//! Routes without a version segment; the version comes from
//! [`RequestedVersion`].

use super::{v1, v2};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::version::{ApiVersion, RequestedVersion};
use axum::extract::State;
use axum::Json;
use govdb_core::{City, Government};

const GOVERNMENTS: &str = "governments";
const CITIES: &str = "cities";

pub async fn list_governments(
    State(state): State<AppState>,
    requested: RequestedVersion,
) -> ApiResult<Json<Vec<Government>>> {
    let governments = match requested.for_resource(GOVERNMENTS)? {
        ApiVersion::V1 => v1::governments(state.source()).await?,
        ApiVersion::V2 => v2::governments(state.source()).await?,
    };
    Ok(Json(governments))
}

pub async fn list_cities(
    State(state): State<AppState>,
    requested: RequestedVersion,
) -> ApiResult<Json<Vec<City>>> {
    match requested.for_resource(CITIES)? {
        ApiVersion::V2 => Ok(Json(v2::cities(state.source()).await?)),
        version @ ApiVersion::V1 => Err(ApiError::UnsupportedVersion {
            requested: version.to_string(),
            resource: CITIES,
        }),
    }
}
