use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every API error.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code
    pub status: u16,
    /// Human-readable reason
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody { status: status.as_u16(), message: message.into() };
    (status, Json(body)).into_response()
}

impl IntoResponse for super::state::SiteStateError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Site state misconfigured");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Service unavailable")
    }
}
