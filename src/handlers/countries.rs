use axum::extract::{Query, State};
use serde::Deserialize;

use crate::app::AppState;
use crate::database::models::Country;
use crate::filter::Filter;
use crate::middleware::response::{ApiResult, Envelope};

#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    pub filters: Option<String>,
}

/// GET /countries - list countries, optionally filtered by continent
pub async fn countries_get(
    State(state): State<AppState>,
    Query(query): Query<CountriesQuery>,
) -> ApiResult<Country> {
    let filter = Filter::parse(query.filters.as_deref().unwrap_or_default())?;
    let countries = state.store.select_countries(&filter).await?;
    Envelope::of(countries)
}
