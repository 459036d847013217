use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid conversion type: {message}")]
    InvalidConversionType { message: String },

    #[error("Malformed upload: {message}")]
    MalformedUpload { message: String },

    #[error("Upload exceeds the configured size limit")]
    UploadTooLarge,

    #[error("Failed to decode image: {message}")]
    DecodeError { message: String },

    #[error("Failed to encode image: {message}")]
    EncodeError { message: String },

    #[error("Failed to build archive: {message}")]
    ArchiveError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Task error: {message}")]
    TaskError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
