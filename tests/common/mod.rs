#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use countries_api::app::{app, AppState};
use countries_api::auth::{self, Claims};
use countries_api::config::AppConfig;
use countries_api::database::manager::DatabaseError;
use countries_api::database::models::Country;
use countries_api::database::repository::CountryStore;
use countries_api::filter::Filter;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// In-memory store standing in for the Postgres repository.
pub struct MemoryStore {
    countries: RwLock<Vec<Country>>,
    /// Number of by-id lookups, so tests can assert that validation
    /// failures never reach the repository.
    pub lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: RwLock::new(countries),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryStore for MemoryStore {
    async fn select_countries(&self, filter: &Filter) -> Result<Vec<Country>, DatabaseError> {
        let countries = self.countries.read().unwrap();
        Ok(countries
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn country_by_id(&self, country_id: &str) -> Result<Option<Country>, DatabaseError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let countries = self.countries.read().unwrap();
        Ok(countries.iter().find(|c| c.country_id == country_id).cloned())
    }

    async fn append_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError> {
        let mut countries = self.countries.write().unwrap();
        if let Some(country) = countries.iter_mut().find(|c| c.country_id == country_id) {
            country.country_names.push(name.to_string());
        }
        Ok(())
    }

    async fn remove_name(&self, country_id: &str, name: &str) -> Result<(), DatabaseError> {
        let mut countries = self.countries.write().unwrap();
        if let Some(country) = countries.iter_mut().find(|c| c.country_id == country_id) {
            if let Some(position) = country.country_names.iter().position(|n| n == name) {
                country.country_names.remove(position);
            }
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

pub fn country(id: &str, code: &str, name: &str, names: &[&str]) -> Country {
    Country {
        country_id: id.to_string(),
        continent_code: code.to_string(),
        continent_name: name.to_string(),
        country_names: names.iter().map(|n| n.to_string()).collect(),
    }
}

pub fn fixtures() -> Vec<Country> {
    vec![
        country("DEU", "EU", "Europe", &["Germany", "Deutschland"]),
        country("ESP", "EU", "Europe", &["Spain", "España"]),
        country("JPN", "AS", "Asia", &["Japan", "Nihon"]),
        country("NZL", "OC", "Oceania", &["New Zealand", "Aotearoa"]),
    ]
}

/// Build the real router over an in-memory store.
pub fn test_app(countries: Vec<Country>) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(countries));
    let config = AppConfig {
        debug: true,
        port: 0,
        secret_key: TEST_SECRET.to_string(),
        allow_origin: HeaderValue::from_static(TEST_ORIGIN),
        database_url: String::new(),
        db_max_connections: 1,
    };
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };
    (app(state), store)
}

pub fn token(expiry_hours: i64) -> String {
    auth::issue(&Claims::new("tester", expiry_hours), TEST_SECRET).unwrap()
}

/// Drive one request through the router, returning status, headers and the
/// parsed JSON body (Null for an empty body).
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    send(app, Method::GET, uri, None, None).await
}
