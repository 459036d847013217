#[cfg(feature = "docs")]
use utoipa::ToSchema;

/// Multipart form accepted by `POST /convert`. Only used for the OpenAPI
/// description; the handler reads the parts directly.
#[allow(dead_code)]
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Image upload with the requested output kind"
))]
pub struct ConvertForm {
    /// Source image (PNG, JPEG, GIF, BMP, TIFF or WebP).
    #[cfg_attr(feature = "docs", schema(value_type = String, format = Binary))]
    pub file: Vec<u8>,
    /// Either `icns` or `png-set`.
    #[cfg_attr(feature = "docs", schema(example = "icns", pattern = "^(icns|png-set)$"))]
    pub r#type: String,
}
