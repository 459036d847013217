use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use tracing::{debug, trace};

use iconsmith_application::{
    contracts::upload::{ConvertUpload, UploadedFile},
    error::AppError,
};

pub const FILE_FIELD: &str = "file";
pub const TYPE_FIELD: &str = "type";

fn map_multipart_error(err: &MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::UploadTooLarge
    } else {
        AppError::MalformedUpload {
            message: err.body_text(),
        }
    }
}

/// Collects the `file` and `type` parts. The first occurrence of each wins,
/// other parts are skipped.
pub async fn read_convert_upload(mut multipart: Multipart) -> Result<ConvertUpload, AppError> {
    let mut upload = ConvertUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| map_multipart_error(&e))?
    {
        let name = field.name().map(ToString::to_string);

        match name.as_deref() {
            Some(FILE_FIELD) if upload.file.is_none() => {
                let filename = field.file_name().map(ToString::to_string);
                let data = field.bytes().await.map_err(|e| map_multipart_error(&e))?;
                debug!("Received file part {:?}: {} bytes", filename, data.len());
                upload.file = Some(UploadedFile {
                    data: data.to_vec(),
                    filename,
                });
            }
            Some(TYPE_FIELD) if upload.kind.is_none() => {
                let kind = field.text().await.map_err(|e| map_multipart_error(&e))?;
                upload.kind = Some(kind);
            }
            other => {
                trace!("Skipping multipart field {:?}", other);
            }
        }
    }

    Ok(upload)
}
