use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use iconsmith_application::error::AppError;

pub struct HttpError(pub AppError);

impl HttpError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded"),

            AppError::InvalidConversionType { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid conversion type")
            }

            AppError::MalformedUpload { .. } => {
                (StatusCode::BAD_REQUEST, "Malformed multipart body")
            }

            AppError::UploadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Upload too large"),

            AppError::Domain(_) | AppError::DecodeError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process image")
            }

            AppError::EncodeError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode image")
            }

            AppError::ArchiveError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build archive")
            }

            AppError::ConfigError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error")
            }

            AppError::IoError(_) | AppError::TaskError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status_code, message) = self.status_and_message();

        if status_code.is_client_error() {
            debug!("Client error response generated: {}", self.0);
        } else {
            error!("Server error response generated: {}", self.0);
        }

        (status_code, message).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
