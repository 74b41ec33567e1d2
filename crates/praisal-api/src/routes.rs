//! Bootstrap-owned routes.
//!
//! Business routes are supplied by the application; the bootstrap itself
//! only exposes a liveness probe.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Liveness report for the API process.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process can answer at all.
    pub status: String,
    /// Server crate version.
    pub version: String,
}

/// Router with the bootstrap-owned endpoints.
pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

/// Report process liveness.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up", body = HealthResponse))
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
