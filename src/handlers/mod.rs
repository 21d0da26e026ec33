pub mod countries;
pub mod names;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::error::ApiError;
use crate::middleware::response::APPLICATION_JSON_UTF8;

/// Responder for methods a resource does not support.
pub async fn not_allowed() -> ApiError {
    ApiError::not_allowed()
}

/// OPTIONS responder: empty 200 body, no authentication. CORS headers are
/// added by the layer on the way out.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, APPLICATION_JSON_UTF8)],
        "",
    )
}
