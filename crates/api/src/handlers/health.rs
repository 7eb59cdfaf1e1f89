use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub storage_healthy: bool,
    pub blob_store: &'static str,
}

/// GET /health
///
/// Always 200; `status` is `degraded` when the store does not answer.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_healthy = match state.storage.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Storage health check failed");
            false
        }
    };
    Json(HealthResponse {
        status: if storage_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.backend_name(),
        storage_healthy,
        blob_store: state.blobs.backend_name(),
    })
}
