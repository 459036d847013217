#[cfg(feature = "docs")]
use utoipa::ToResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Converted icon file: `application/x-icns` for `icns`, `application/zip` for `png-set`",
    headers(
        ("Content-Type" = String),
        ("Content-Disposition" = String, description = "attachment; filename=\"<base>.icns\" or \"<base>-icons.zip\"")
    )
))]
pub struct ArtifactDownloadResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Bad Request: no file uploaded, invalid conversion type or malformed multipart body"
))]
pub struct BadRequestResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Upload exceeds the configured size limit"
))]
pub struct PayloadTooLargeResponse;

#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToResponse))]
#[cfg_attr(feature = "docs", response(
    description = "Internal Server Error: the image could not be decoded or encoded"
))]
pub struct InternalServerErrorResponse;
