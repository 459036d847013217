use axum::{
    http::{
        HeaderMap, HeaderValue,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use domain::conversion::OutputArtifact;

use crate::incoming::http_axum::core::content_disposition::attachment;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Standard API response wrapper with success indicator, optional error message, and optional data payload",
    example = json!({
        "ok": true,
        "data": {
            "service": "iconsmith",
            "version": "0.1.0"
        }
    })
))]
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success_with_data(data: Option<T>) -> Self {
        Self {
            ok: true,
            error: None,
            data,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    #[cfg_attr(feature = "docs", schema(example = "iconsmith"))]
    pub service: &'static str,
    #[cfg_attr(feature = "docs", schema(example = "0.1.0"))]
    pub version: &'static str,
}

#[cfg(feature = "docs")]
#[derive(serde::Serialize, utoipa::ToSchema)]
#[schema(title = "ApiResponseHealth")]
pub struct ApiResponseHealth {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HealthResponse>,
}

/// Converted file sent back as a download.
pub struct ArtifactResponse {
    pub artifact: OutputArtifact,
}

impl From<OutputArtifact> for ArtifactResponse {
    fn from(artifact: OutputArtifact) -> Self {
        Self { artifact }
    }
}

impl IntoResponse for ArtifactResponse {
    fn into_response(self) -> Response {
        let OutputArtifact {
            bytes,
            mime_type,
            suggested_filename,
        } = self.artifact;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime_type));
        headers.insert(CONTENT_DISPOSITION, attachment(&suggested_filename));
        (headers, bytes).into_response()
    }
}
