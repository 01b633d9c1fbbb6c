use crate::health::responses::HealthCheckResponse;
use crate::http::responses::JsonResponse;

#[axum::debug_handler]
pub async fn healthcheck() -> JsonResponse<HealthCheckResponse> {
    JsonResponse::ok(HealthCheckResponse { error: false })
}
