use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A country and its alternate names.
///
/// `country_names` preserves insertion order; names are appended and removed
/// by value, never by index. Continent code and name are immutable per
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Country {
    pub country_id: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_names: Vec<String>,
}
