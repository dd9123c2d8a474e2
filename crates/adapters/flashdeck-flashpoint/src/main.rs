use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use flashdeck_core::catalog::Catalog;
use flashdeck_flashpoint::{FetcherConfig, GameFetcher};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog_path = std::env::args()
        .find_map(|a| a.strip_prefix("--catalog=").map(String::from))
        .unwrap_or_else(|| "games.toml".to_string());
    let games_dir = std::env::args()
        .find_map(|a| a.strip_prefix("--games-dir=").map(String::from))
        .unwrap_or_else(|| "games".to_string());

    let catalog = match Catalog::load(Path::new(&catalog_path)) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(path = %catalog_path, error = %e, "Failed to load game catalog");
            std::process::exit(1);
        },
    };

    tracing::info!(titles = catalog.len(), games_dir = %games_dir, "Fetching catalog assets");

    let config = FetcherConfig {
        games_dir: PathBuf::from(games_dir),
        ..FetcherConfig::default()
    };
    let fetcher = GameFetcher::new(config);
    let summary = fetcher.fetch_catalog(&catalog).await;

    tracing::info!(
        downloaded = summary.downloaded.len(),
        skipped = summary.skipped.len(),
        missing = summary.missing.len(),
        "Done"
    );

    for path in summary.missing_paths() {
        tracing::warn!(file = %path, "Still missing — add the .swf by hand");
    }
}
