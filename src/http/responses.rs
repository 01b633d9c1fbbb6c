use crate::http::config::RESPONSE_HEADERS;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

const SERIALIZATION_FAILURE_BODY: &str =
    r#"{"errors":[{"status":"500","detail":"Failed to serialize response"}]}"#;

/// JSON body sent with [`RESPONSE_HEADERS`] instead of axum's bare `application/json`.
#[derive(Debug)]
pub struct JsonResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonResponse<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        let (status, body) = match serde_json::to_vec(&self.body) {
            Ok(bytes) => (self.status, Body::from(bytes)),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Body::from(SERIALIZATION_FAILURE_BODY),
                )
            }
        };
        (status, RESPONSE_HEADERS.clone(), body).into_response()
    }
}
