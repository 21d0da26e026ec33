use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

pub const APPLICATION_JSON_UTF8: &str = "application/json;charset=UTF-8";

/// Uniform success envelope: `{status, code, count, data}`.
///
/// An empty result list is not a success; wrapping it yields `NORESULT`
/// instead, so `count` is always > 0.
#[derive(Debug)]
pub struct Envelope<T: Serialize> {
    count: usize,
    data: Vec<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn of(data: Vec<T>) -> Result<Self, ApiError> {
        if data.is_empty() {
            return Err(ApiError::no_result());
        }
        Ok(Self {
            count: data.len(),
            data,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let data = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("failed to serialize response data: {}", e);
                return ApiError::internal("Failed to serialize response data").into_response();
            }
        };

        let body = json!({
            "status": "ok",
            "code": 200,
            "count": self.count,
            "data": data,
        });

        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, APPLICATION_JSON_UTF8)],
            body.to_string(),
        )
            .into_response()
    }
}

/// Handler return type: success envelope or a typed error, both translated
/// to the wire format in one place.
pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_are_not_a_success() {
        let wrapped = Envelope::<String>::of(vec![]);
        match wrapped {
            Err(ApiError::NoResult(_)) => {}
            other => panic!("expected NoResult, got {:?}", other),
        }
    }

    #[test]
    fn count_tracks_the_data_length() {
        let envelope = Envelope::of(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(envelope.count(), 2);
    }
}
