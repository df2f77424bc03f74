// crates/govdb-server/src/openapi.rs

//! One OpenAPI document per API version, served at
//! `/swagger/{group}/swagger.json`.

use crate::error::Problem;
use crate::version::ApiVersion;
use axum::routing::get;
use axum::{Json, Router};
use govdb_core::{City, Government};
use once_cell::sync::Lazy;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Api v1", version = "1"),
    paths(crate::api::v1::list_governments),
    components(schemas(Government, Problem)),
    tags((name = "Governments", description = "Governorate reference data"))
)]
pub struct V1Doc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Api v2", version = "2"),
    paths(crate::api::v2::list_governments, crate::api::v2::list_cities),
    components(schemas(Government, City, Problem)),
    tags(
        (name = "Governments", description = "Governorate reference data"),
        (name = "Cities", description = "Cities with their governorate")
    )
)]
pub struct V2Doc;

static V1: Lazy<OpenApiDoc> = Lazy::new(V1Doc::openapi);
static V2: Lazy<OpenApiDoc> = Lazy::new(V2Doc::openapi);

pub fn document(version: ApiVersion) -> &'static OpenApiDoc {
    match version {
        ApiVersion::V1 => &*V1,
        ApiVersion::V2 => &*V2,
    }
}

/// `/swagger/v1/swagger.json` and `/swagger/v2/swagger.json`.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    ApiVersion::ALL.into_iter().fold(Router::new(), |router, version| {
        router.route(
            &format!("/swagger/{}/swagger.json", version.group_name()),
            get(move || async move { Json(document(version)) }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_document_lists_only_its_paths() {
        let v1 = document(ApiVersion::V1);
        assert_eq!(v1.info.title, "Api v1");
        assert!(v1.paths.paths.contains_key("/api/v1/governments"));
        assert!(!v1.paths.paths.contains_key("/api/v2/cities"));

        let v2 = document(ApiVersion::V2);
        assert_eq!(v2.info.version, "2");
        assert!(v2.paths.paths.contains_key("/api/v2/governments"));
        assert!(v2.paths.paths.contains_key("/api/v2/cities"));
        assert!(!v2.paths.paths.contains_key("/api/v1/governments"));
    }

    #[test]
    fn schemas_use_wire_field_names() {
        let json = serde_json::to_value(document(ApiVersion::V2)).unwrap();
        let city = &json["components"]["schemas"]["City"]["properties"];
        assert!(city.get("city_name_en").is_some());
        assert!(city.get("governorate_id").is_some());
        assert!(city.get("government").is_some());
    }
}
