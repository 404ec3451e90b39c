//! Readiness endpoint
//!
//! Answers with the stored book count, which also proves the repository
//! (and so the pool) is reachable. A failing repository gives 503.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Stored books; absent when storage is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION").to_owned();

    match state.books.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".into(),
                version,
                books: Some(count),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach storage");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".into(),
                    version,
                    books: None,
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
