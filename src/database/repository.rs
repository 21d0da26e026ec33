use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::Country;
use crate::filter::Filter;

/// Query contract the request pipeline needs from persistence.
///
/// Each call is a single statement; the fetch-then-mutate-then-persist
/// sequence in the handlers is not wrapped in a transaction.
#[async_trait]
pub trait CountryStore: Send + Sync {
    async fn select_countries(&self, filter: &Filter) -> Result<Vec<Country>, DatabaseError>;
    async fn country_by_id(&self, country_id: &str) -> Result<Option<Country>, DatabaseError>;
    async fn append_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError>;
    async fn remove_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError>;
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// sqlx-backed store over the `country` / `country_name` tables.
pub struct CountryRepository {
    pool: PgPool,
}

// Alternate names aggregate in name_id order, so insertion order survives
// the round trip through the database.
const COUNTRY_SELECT: &str = "\
SELECT c.country_id, c.continent_code, c.continent_name, \
       COALESCE(array_agg(n.country_name ORDER BY n.name_id) \
                FILTER (WHERE n.country_name IS NOT NULL), '{}') AS country_names \
  FROM country c \
  LEFT JOIN country_name n ON n.country_id = c.country_id";

const COUNTRY_GROUP: &str = " \
 GROUP BY c.country_id, c.continent_code, c.continent_name \
 ORDER BY c.country_id";

impl CountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryStore for CountryRepository {
    async fn select_countries(&self, filter: &Filter) -> Result<Vec<Country>, DatabaseError> {
        let (clause, values) = filter.predicate().positional(1);
        let sql = format!("{COUNTRY_SELECT} WHERE 1=1{clause}{COUNTRY_GROUP}");

        let mut query = sqlx::query_as::<_, Country>(&sql);
        for value in values {
            query = query.bind(value);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn country_by_id(&self, country_id: &str) -> Result<Option<Country>, DatabaseError> {
        let sql = format!("{COUNTRY_SELECT} WHERE c.country_id = $1{COUNTRY_GROUP}");

        Ok(sqlx::query_as::<_, Country>(&sql)
            .bind(country_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn append_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO country_name (country_id, country_name) VALUES ($1, $2)")
            .bind(country_id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError> {
        // Removes exactly one occurrence, the earliest inserted.
        sqlx::query(
            "DELETE FROM country_name \
              WHERE name_id = (SELECT name_id FROM country_name \
                                WHERE country_id = $1 AND country_name = $2 \
                                ORDER BY name_id LIMIT 1)",
        )
        .bind(country_id)
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
