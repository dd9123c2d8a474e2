use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogInfo,
}

#[derive(Serialize)]
pub struct CatalogInfo {
    pub titles: usize,
    pub playable: usize,
    pub missing: usize,
}

/// Structured health check endpoint. The playable/missing split doubles as
/// an operator's shopping list alongside the per-asset 404 messages.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let playable = state
        .catalog
        .entries()
        .iter()
        .filter(|e| state.shelf.is_present(&e.slug))
        .count();
    let titles = state.catalog.len();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        catalog: CatalogInfo {
            titles,
            playable,
            missing: titles - playable,
        },
    })
}

/// Readiness check — verifies essential state is initialized.
pub async fn readiness_check(State(state): State<AppState>) -> &'static str {
    if state.catalog.is_empty() {
        return "not ready: catalog is empty";
    }
    "ready"
}
