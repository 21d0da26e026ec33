use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use crate::app::AppState;
use crate::database::models::Country;
use crate::error::ApiError;
use crate::middleware::response::{ApiResult, Envelope};

#[derive(Debug, Deserialize)]
pub struct NamePayload {
    #[serde(default)]
    pub country_id: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

/// POST /names - add a name to an existing country
pub async fn names_post(State(state): State<AppState>, body: Bytes) -> ApiResult<Country> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "names POST");

    let (country_id, country_name) = parse_payload(&body)?;

    let mut country = state
        .store
        .country_by_id(&country_id)
        .await?
        .ok_or_else(|| ApiError::bad_params(format!("Unknown country '{}'", country_id)))?;

    state.store.append_name(&country_id, &country_name).await?;
    country.country_names.push(country_name);

    Envelope::of(vec![country])
}

/// DELETE /names - remove one occurrence of a country name
pub async fn names_delete(State(state): State<AppState>, body: Bytes) -> ApiResult<Country> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "names DELETE");

    let (country_id, country_name) = parse_payload(&body)?;

    let mut country = state
        .store
        .country_by_id(&country_id)
        .await?
        .ok_or_else(|| ApiError::bad_params(format!("Unknown country '{}'", country_id)))?;

    let position = country
        .country_names
        .iter()
        .position(|name| name == &country_name)
        .ok_or_else(|| {
            ApiError::bad_params(format!("Unknown country name '{}'", country_name))
        })?;

    state.store.remove_name(&country_id, &country_name).await?;
    country.country_names.remove(position);

    Envelope::of(vec![country])
}

/// Body validation happens before any repository lookup.
fn parse_payload(body: &Bytes) -> Result<(String, String), ApiError> {
    let payload: NamePayload = serde_json::from_slice(body)
        .map_err(|_| ApiError::bad_params("Invalid JSON payload"))?;

    match (payload.country_id, payload.country_name) {
        (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => Ok((id, name)),
        _ => Err(ApiError::bad_params(
            "You must provide a country_id and a country_name",
        )),
    }
}
