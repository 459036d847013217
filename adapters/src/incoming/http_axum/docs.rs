use crate::incoming::http_axum::{dto, handlers};
use dto::common_responses::{
    ArtifactDownloadResponse, BadRequestResponse, InternalServerErrorResponse,
    PayloadTooLargeResponse,
};
use dto::requests::ConvertForm;
use dto::responses::{ApiResponseHealth, HealthResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::convert::convert_image,
        handlers::health::health_check,
    ),
    components(
        schemas(ConvertForm, HealthResponse, ApiResponseHealth),
        responses(
            ArtifactDownloadResponse,
            BadRequestResponse,
            PayloadTooLargeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "convert", description = "Image to icon conversion: a macOS .icns container or a zip of PNG renditions"),
        (name = "system", description = "Liveness")
    ),
    info(
        title = "Iconsmith API",
        description = "Turns one uploaded image into a macOS icon set in a single multipart request.",
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
    )
)]
pub struct ApiDoc;
