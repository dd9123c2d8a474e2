use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the archive fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Flashpoint Archive database API.
    pub flashpoint_api: String,
    /// Wayback Machine CDX search endpoint.
    pub wayback_cdx: String,
    /// Where downloaded `<slug>.swf` files land.
    pub games_dir: PathBuf,
    /// Politeness delay between titles that hit the network.
    pub delay: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            flashpoint_api: "https://db-api.unstable.life".to_string(),
            wayback_cdx: "https://web.archive.org/cdx/search/cdx".to_string(),
            games_dir: PathBuf::from("games"),
            delay: Duration::from_secs(1),
            user_agent: "flashdeck-fetch/0.1 (https://github.com/a-bissell/flashdeck)".to_string(),
        }
    }
}
