//! REST API endpoints.
//!
//! Axum-based HTTP API over the derived views: map catalog, per-map
//! rankings, type list, and the stateless draft reducer. Non-API paths
//! fall through to the static assets directory.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::loader::BrawlerTables;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Brawler data is still loading")]
    Loading,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Loading => (StatusCode::SERVICE_UNAVAILABLE, "LOADING"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Loaded tables, or `ApiError::Loading` while the loader has not published.
pub async fn ready_tables(state: &AppState) -> Result<Arc<BrawlerTables>, ApiError> {
    state.data.read().await.tables().ok_or(ApiError::Loading)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            warn!("Invalid CORS origin {:?}, allowing any origin", origin);
            layer.allow_origin(Any)
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/status", get(routes::status::status))
        .route("/api/maps", get(routes::maps::list_maps))
        .route("/api/maps/:map/brawlers", get(routes::maps::map_brawlers))
        .route("/api/maps/:map/stats", get(routes::maps::map_stats))
        .route("/api/types", get(routes::maps::list_types))
        .route("/api/draft", post(routes::draft::apply_event));

    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    let cors = cors_layer(&state.cors_origin);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
