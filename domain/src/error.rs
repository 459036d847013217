use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown conversion kind: '{0}'")]
    UnknownConversionKind(String),

    #[error("Invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("Mask is {mask_width}x{mask_height}, bitmap is {width}x{height}")]
    MaskSizeMismatch {
        width: u32,
        height: u32,
        mask_width: u32,
        mask_height: u32,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;
