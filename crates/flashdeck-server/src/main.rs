use std::path::Path;

use tracing_subscriber::EnvFilter;

use flashdeck_core::catalog::Catalog;
use flashdeck_server::build_app;
use flashdeck_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();

    let catalog = match Catalog::load(Path::new(&config.catalog_path)) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(path = %config.catalog_path, error = %e, "Failed to load game catalog");
            std::process::exit(1);
        },
    };
    tracing::info!(titles = catalog.len(), "Catalog loaded");

    let addr = config.listen_addr.clone();
    let (app, state) = build_app(config, catalog);

    let missing: Vec<String> = state
        .catalog
        .entries()
        .iter()
        .filter(|e| !state.shelf.is_present(&e.slug))
        .map(|e| flashdeck_core::resolver::expected_path(&e.slug))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(count = missing.len(), files = ?missing, "Titles without a game file");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    tracing::info!("flashdeck serving on {addr}");

    axum::serve(listener, app).await.expect("Server error");
}
