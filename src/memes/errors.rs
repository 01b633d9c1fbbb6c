use crate::http::responses::JsonResponse;
use crate::memegen::errors::UpstreamError;
use crate::memes::responses::ErrorEnvelope;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Bad request - no text provided")]
    BadRequest,
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed - use POST")]
    MethodNotAllowed,
    #[error("Request timed out")]
    Timeout,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl CommandError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Upstream(err) = &self {
            tracing::warn!(error = %err, "Failed to create meme instance.");
        }
        JsonResponse::new(status, ErrorEnvelope::new(status, self.to_string())).into_response()
    }
}
