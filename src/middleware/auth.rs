use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth;
use crate::error::ApiError;

/// Bearer-token gate for mutating routes.
///
/// Runs before the wrapped handler; on any validation failure the handler
/// body never executes.
pub async fn bearer_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = token_from_headers(request.headers());
    auth::validate(&token, &state.config.secret_key)?;
    Ok(next.run(request).await)
}

/// Raw bearer string from the Authorization header: the literal "Bearer "
/// prefix is stripped when present, an absent header becomes the empty
/// string (which then fails decoding).
fn token_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn strips_bearer_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(token_from_headers(&headers), "abc.def.ghi");
    }

    #[test]
    fn passes_raw_value_without_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("abc.def.ghi"));
        assert_eq!(token_from_headers(&headers), "abc.def.ghi");
    }

    #[test]
    fn absent_header_is_empty() {
        assert_eq!(token_from_headers(&HeaderMap::new()), "");
    }
}
