use std::sync::Arc;

use flashdeck_core::catalog::Catalog;

use crate::config::ServerConfig;
use crate::shelf::GameShelf;

#[derive(Clone)]
pub struct AppState {
    /// Immutable for the life of the deployment; loaded once at startup.
    pub catalog: Arc<Catalog>,
    pub shelf: Arc<GameShelf>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        let shelf = GameShelf::new(&config.games_dir, config.limits.max_asset_bytes);
        Self {
            catalog: Arc::new(catalog),
            shelf: Arc::new(shelf),
            config: Arc::new(config),
        }
    }
}
