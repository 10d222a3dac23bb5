//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Number of accounts loaded.
    pub accounts: usize,
    /// Number of contacts loaded.
    pub contacts: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "sales-directory".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        accounts: state.store.account_count(),
        contacts: state.store.contact_count(),
    })
}
