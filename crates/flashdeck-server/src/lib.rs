pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod shelf;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use flashdeck_core::catalog::Catalog;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config and an
/// already-loaded catalog.
pub fn build_app(config: ServerConfig, catalog: Catalog) -> (Router<()>, AppState) {
    let web_root = config.web_root.clone();
    let timeout = Duration::from_secs(config.limits.request_timeout_secs);
    let state = AppState::new(config, catalog);

    let api_routes = Router::new()
        .route("/games", axum::routing::get(api::list_games))
        .route("/games/{slug}", axum::routing::get(api::get_game));

    let app = Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .route("/ready", axum::routing::get(health::readiness_check))
        .route("/games/{file}", axum::routing::get(shelf::get_game_file))
        .nest("/api/v1", api_routes)
        .fallback_service(ServeDir::new(&web_root))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state.clone());

    (app, state)
}
