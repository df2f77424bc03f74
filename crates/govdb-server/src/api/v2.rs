// crates/govdb-server/src/api/v2.rs

//! Version 2: full governorate list and enriched cities.

use crate::error::{ApiResult, Problem};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use govdb_core::{
    enrich, load_all, City, DataSource, Government, Result, CITIES_FILE, GOVERNMENTS_FILE,
};

pub async fn governments(source: &dyn DataSource) -> Result<Vec<Government>> {
    load_all(source, GOVERNMENTS_FILE).await
}

/// Loads both files and resolves every city's governorate.
pub async fn cities(source: &dyn DataSource) -> Result<Vec<City>> {
    let cities: Vec<City> = load_all(source, CITIES_FILE).await?;
    let governments: Vec<Government> = load_all(source, GOVERNMENTS_FILE).await?;
    Ok(enrich(&cities, &governments))
}

#[utoipa::path(
    get,
    path = "/api/v2/governments",
    tag = "Governments",
    responses(
        (status = 200, description = "All governorates", body = Vec<Government>),
        (status = 500, description = "Data file missing or unreadable", body = Problem)
    )
)]
pub async fn list_governments(State(state): State<AppState>) -> ApiResult<Json<Vec<Government>>> {
    Ok(Json(governments(state.source()).await?))
}

#[utoipa::path(
    get,
    path = "/api/v2/cities",
    tag = "Cities",
    responses(
        (status = 200, description = "All cities with their governorate resolved (null when unknown)", body = Vec<City>),
        (status = 500, description = "Data file missing or unreadable", body = Problem)
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> ApiResult<Json<Vec<City>>> {
    Ok(Json(cities(state.source()).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use govdb_core::{GovError, MemorySource};

    const GOVERNMENTS: &str =
        r#"[{"id":1,"governorate_name_ar":"A","governorate_name_en":"Cairo"}]"#;
    const CITIES: &str = r#"[
        {"id":10,"city_name_ar":"x","city_name_en":"y","governorate_id":1},
        {"id":11,"city_name_ar":"p","city_name_en":"q","governorate_id":99}
    ]"#;

    #[tokio::test]
    async fn cities_are_enriched() {
        let src = MemorySource::new()
            .with_file(GOVERNMENTS_FILE, GOVERNMENTS)
            .with_file(CITIES_FILE, CITIES);

        let out = cities(&src).await.unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 10);
        assert_eq!(out[0].government().map(|g| g.name_en()), Some("Cairo"));
        assert_eq!(out[1].id, 11);
        assert!(out[1].government().is_none());
    }

    #[tokio::test]
    async fn missing_governments_file_fails_the_whole_call() {
        let src = MemorySource::new().with_file(CITIES_FILE, CITIES);
        let err = cities(&src).await.unwrap_err();
        assert!(matches!(err, GovError::MissingFile { .. }));
    }
}
