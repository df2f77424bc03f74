// crates/govdb-server/src/version.rs

//! API version selection and reporting.
//!
//! Versioned routes carry the version in the path (`/api/v1/...`). The
//! version-neutral aliases (`/api/governments`, `/api/cities`) read it from
//! the `api-version` query parameter, then the `api-version` header, and
//! fall back to [`ApiVersion::DEFAULT`].

use crate::error::{ApiError, ApiResult};
use axum::extract::{FromRequestParts, Query};
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::request::Parts;
use axum::response::Response;
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const API_VERSION_HEADER: &str = "api-version";
pub const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub const DEFAULT: ApiVersion = ApiVersion::V2;
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    pub fn number(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    /// Group name used in the documentation routes, e.g. `v2`.
    pub fn group_name(self) -> String {
        format!("v{}", self.number())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVersion(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownVersion;

    /// Accepts `1`, `1.0`, `v1` and the same for 2, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let bare = token
            .strip_prefix('v')
            .or_else(|| token.strip_prefix('V'))
            .unwrap_or(token);
        match bare {
            "1" | "1.0" => Ok(ApiVersion::V1),
            "2" | "2.0" => Ok(ApiVersion::V2),
            _ => Err(UnknownVersion(token.to_owned())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VersionQuery {
    #[serde(rename = "api-version")]
    api_version: Option<String>,
}

/// Extractor for the version a version-neutral request asked for.
///
/// Extraction never fails; [`RequestedVersion::for_resource`] turns an
/// unknown token into an error naming the resource that was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedVersion(Result<ApiVersion, UnknownVersion>);

impl RequestedVersion {
    fn resolve(parts: &Parts) -> Self {
        let from_query = Query::<VersionQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.api_version);
        let from_header = || {
            parts
                .headers
                .get(API_VERSION_HEADER)
                .map(|v| v.to_str().unwrap_or_default().to_owned())
        };

        RequestedVersion(match from_query.or_else(from_header) {
            None => Ok(ApiVersion::DEFAULT),
            Some(raw) => raw.parse(),
        })
    }

    pub fn for_resource(self, resource: &'static str) -> ApiResult<ApiVersion> {
        self.0
            .map_err(|UnknownVersion(requested)| ApiError::UnsupportedVersion {
                requested,
                resource,
            })
    }
}

impl<S> FromRequestParts<S> for RequestedVersion
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::resolve(parts))
    }
}

/// Response mapper adding `api-supported-versions: 1, 2`.
pub async fn report_versions(mut res: Response) -> Response {
    let listed = ApiVersion::ALL
        .iter()
        .map(ApiVersion::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if let Ok(value) = HeaderValue::from_str(&listed) {
        res.headers_mut()
            .insert(HeaderName::from_static(SUPPORTED_VERSIONS_HEADER), value);
    }
    res
}
