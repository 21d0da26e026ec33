// HTTP API Error Types
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::{json, Value};

use crate::middleware::response::APPLICATION_JSON_UTF8;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 500 Internal Server Error - unrecoverable startup/infrastructure failure
    Fatal(String),

    // 404 Not Found - a read produced zero rows
    NoResult(String),

    // 403 Forbidden - token could not be decoded
    Forbidden(String),

    // 401 Unauthorized - token decoded but is expired or otherwise invalid
    Unauthorized(String),

    // 400 Bad Request - filter grammar violated or unknown field
    BadFilters(String),

    // 400 Bad Request - required body fields missing or referenced entity unknown
    BadParams(String),

    // 405 Method Not Allowed
    NotAllowed(String),

    // 500 Internal Server Error - anything outside the typed taxonomy
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Fatal(_) => 500,
            ApiError::NoResult(_) => 404,
            ApiError::Forbidden(_) => 403,
            ApiError::Unauthorized(_) => 401,
            ApiError::BadFilters(_) => 400,
            ApiError::BadParams(_) => 400,
            ApiError::NotAllowed(_) => 405,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get machine-readable error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Fatal(_) => "FATAL",
            ApiError::NoResult(_) => "NORESULT",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::BadFilters(_) => "BADFILTERS",
            ApiError::BadParams(_) => "BADPARAMS",
            ApiError::NotAllowed(_) => "NOTALLOWED",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Fatal(msg)
            | ApiError::NoResult(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::BadFilters(msg)
            | ApiError::BadParams(msg)
            | ApiError::NotAllowed(msg)
            | ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to the uniform error envelope
    pub fn to_json(&self) -> Value {
        json!({
            "status": "error",
            "code": self.status_code(),
            "error": self.error_code(),
            "message": self.message(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn fatal(message: impl Into<String>) -> Self {
        ApiError::Fatal(message.into())
    }

    pub fn no_result() -> Self {
        ApiError::NoResult("No results were found.".to_string())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn bad_filters(message: impl Into<String>) -> Self {
        ApiError::BadFilters(message.into())
    }

    pub fn bad_params(message: impl Into<String>) -> Self {
        ApiError::BadParams(message.into())
    }

    pub fn not_allowed() -> Self {
        ApiError::NotAllowed("Method not allowed on this resource.".to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Convert other error types to ApiError
impl From<crate::filter::FilterError> for ApiError {
    fn from(err: crate::filter::FilterError) -> Self {
        ApiError::bad_filters(err.to_string())
    }
}

impl From<crate::auth::AuthError> for ApiError {
    fn from(err: crate::auth::AuthError) -> Self {
        use crate::auth::AuthError;
        match err {
            AuthError::Malformed => ApiError::forbidden("Could not decode token."),
            AuthError::Expired => ApiError::unauthorized("Signature expired."),
            AuthError::Invalid => ApiError::unauthorized("Invalid token."),
            AuthError::Signing(msg) => {
                tracing::error!("token signing error: {}", msg);
                ApiError::internal("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::database::manager::DatabaseError> for ApiError {
    fn from(err: crate::database::manager::DatabaseError) -> Self {
        // Don't expose internal SQL errors to clients
        tracing::error!("database error: {}", err);
        ApiError::internal("An error occurred while processing your request")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, APPLICATION_JSON_UTF8)],
            self.to_json().to_string(),
        )
            .into_response()
    }
}
