use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::repository::CountryStore;
use crate::handlers::{self, countries, names};
use crate::middleware::bearer_auth;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CountryStore>,
    pub config: Arc<AppConfig>,
}

/// Build the full router. Composition order is the contract: the bearer
/// gate wraps only the mutating /names routes, so authentication runs
/// before body validation, which runs before the repository is touched;
/// envelope wrapping happens on the way out of every handler.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route(
            "/countries",
            get(countries::countries_get)
                .post(handlers::not_allowed)
                .put(handlers::not_allowed)
                .delete(handlers::not_allowed)
                .options(handlers::preflight),
        )
        .route(
            "/names",
            get(handlers::not_allowed)
                .put(handlers::not_allowed)
                .options(handlers::preflight),
        );

    let protected = Router::new()
        .route("/names", post(names::names_post).delete(names::names_delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), bearer_auth));

    Router::new()
        .route("/health", get(health))
        .merge(public)
        .merge(protected)
        .layer(cors(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(config.allow_origin.clone()))
        .allow_credentials(true)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-test-header"),
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "code": 200,
                "timestamp": now,
                "database": "ok",
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "error",
                    "code": 503,
                    "timestamp": now,
                    "message": "database unavailable",
                })),
            )
        }
    }
}
