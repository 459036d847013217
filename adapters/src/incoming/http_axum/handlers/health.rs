use axum::Json;

use crate::incoming::http_axum::dto::responses::{ApiResponse, HealthResponse};
#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseHealth;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponseHealth,
         example = json!({
             "ok": true,
             "data": {
                 "service": "iconsmith",
                 "version": "0.1.0"
             }
         })
        )
    ),
    tag = "system",
    summary = "Liveness check",
    operation_id = "health_check"
))]
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success_with_data(Some(HealthResponse {
        service: "iconsmith",
        version: env!("CARGO_PKG_VERSION"),
    })))
}
