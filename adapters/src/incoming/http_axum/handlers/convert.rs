use axum::extract::{Multipart, State, multipart::MultipartRejection};
use tracing::{debug, instrument};

use iconsmith_application::error::AppError;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::{
    common_responses::{
        ArtifactDownloadResponse, BadRequestResponse, InternalServerErrorResponse,
        PayloadTooLargeResponse,
    },
    requests::ConvertForm,
};
use crate::incoming::http_axum::{
    core::multipart::read_convert_upload, dto::responses::ArtifactResponse,
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/convert",
    request_body(content = ConvertForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, response = ArtifactDownloadResponse),
        (status = 400, response = BadRequestResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "convert",
    summary = "Convert an image to an icon file",
    description = "Upload an image as `file` and pick `type`: `icns` returns a macOS icon container, `png-set` a zip with the original and 16, 48 and 128 px PNGs.",
    operation_id = "convert_image"
))]
#[instrument(skip(state, multipart))]
pub async fn convert_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ArtifactResponse, HttpError> {
    let multipart = multipart.map_err(|rejection| {
        debug!("Rejected non-multipart request: {}", rejection);
        HttpError(AppError::MissingFile)
    })?;

    let upload = read_convert_upload(multipart).await.map_err(HttpError)?;
    let artifact = state
        .convert_use_case
        .convert(upload)
        .await
        .map_err(HttpError)?;

    Ok(ArtifactResponse::from(artifact))
}
