// crates/govdb-server/src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use govdb_core::GovError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Loader failure. The detail is logged, never sent to the client.
    #[error(transparent)]
    Data(#[from] GovError),

    #[error("The HTTP resource '{resource}' does not support the API version '{requested}'.")]
    UnsupportedVersion {
        requested: String,
        resource: &'static str,
    },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Error body returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, problem) = match &self {
            ApiError::Data(e) => {
                tracing::error!(error = %e, "failed to load reference data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Problem {
                        status: 500,
                        title: "Internal Server Error".to_owned(),
                        detail: None,
                    },
                )
            }
            ApiError::UnsupportedVersion { .. } => {
                tracing::debug!(error = %self, "unsupported api version");
                (
                    StatusCode::BAD_REQUEST,
                    Problem {
                        status: 400,
                        title: "UnsupportedApiVersion".to_owned(),
                        detail: Some(self.to_string()),
                    },
                )
            }
        };
        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn data_errors_are_opaque_500s() {
        let err = ApiError::from(GovError::MissingFile {
            path: PathBuf::from("/secret/cities.json"),
        });
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unsupported_version_message_names_both_parts() {
        let err = ApiError::UnsupportedVersion {
            requested: "1".into(),
            resource: "cities",
        };
        let msg = err.to_string();
        assert!(msg.contains("'cities'"));
        assert!(msg.contains("'1'"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
