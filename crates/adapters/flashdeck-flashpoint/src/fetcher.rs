use std::path::PathBuf;

use flashdeck_core::catalog::{Catalog, GameEntry};
use flashdeck_core::resolver::expected_path;
use flashdeck_core::slug::Slug;
use flashdeck_core::swf;

use crate::config::FetcherConfig;
use crate::flashpoint::{FetchError, FlashpointClient, best_match};
use crate::wayback::{WaybackClient, raw_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded { bytes: usize },
    AlreadyPresent,
    /// No archive copy could be retrieved; the operator adds the file by hand.
    NotFound,
}

#[derive(Debug, Default)]
pub struct FetchSummary {
    pub downloaded: Vec<Slug>,
    pub skipped: Vec<Slug>,
    pub missing: Vec<Slug>,
}

impl FetchSummary {
    /// The `games/<slug>.swf` paths still absent after the run — the same
    /// literal paths the server's 404s name.
    pub fn missing_paths(&self) -> Vec<String> {
        self.missing.iter().map(expected_path).collect()
    }
}

/// Downloads catalog assets: Flashpoint Archive lookup, direct download from
/// the original host, Wayback Machine fallback when the original is dead.
pub struct GameFetcher {
    config: FetcherConfig,
    flashpoint: FlashpointClient,
    wayback: WaybackClient,
    client: reqwest::Client,
}

impl GameFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");
        let flashpoint = FlashpointClient::new(client.clone(), config.flashpoint_api.clone());
        let wayback = WaybackClient::new(client.clone(), config.wayback_cdx.clone());
        Self {
            config,
            flashpoint,
            wayback,
            client,
        }
    }

    /// Fetch every catalog title that is not already on disk.
    pub async fn fetch_catalog(&self, catalog: &Catalog) -> FetchSummary {
        let mut summary = FetchSummary::default();

        for entry in catalog.entries() {
            let outcome = match self.fetch_one(entry).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(slug = %entry.slug, error = %e, "Fetch failed");
                    FetchOutcome::NotFound
                },
            };

            match &outcome {
                FetchOutcome::Downloaded { bytes } => {
                    tracing::info!(slug = %entry.slug, bytes, "Downloaded");
                    summary.downloaded.push(entry.slug.clone());
                },
                FetchOutcome::AlreadyPresent => {
                    tracing::debug!(slug = %entry.slug, "Already on disk, skipping");
                    summary.skipped.push(entry.slug.clone());
                },
                FetchOutcome::NotFound => {
                    tracing::warn!(slug = %entry.slug, "No archive copy found");
                    summary.missing.push(entry.slug.clone());
                },
            }

            // Be polite to both APIs; skips never touched the network
            if outcome != FetchOutcome::AlreadyPresent {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        summary
    }

    pub async fn fetch_one(&self, entry: &GameEntry) -> Result<FetchOutcome, FetchError> {
        let out_path = self.out_path(&entry.slug);
        if out_path.exists() {
            return Ok(FetchOutcome::AlreadyPresent);
        }

        tracing::info!(slug = %entry.slug, title = %entry.title, "Searching Flashpoint");
        let results = self.flashpoint.search(&entry.title).await?;
        let Some(found) = best_match(&results, &entry.title) else {
            return Ok(FetchOutcome::NotFound);
        };
        tracing::debug!(
            slug = %entry.slug,
            found = %found.title,
            platform = %found.platform,
            "Flashpoint match"
        );

        let launch_url = found.launch_command.as_deref();
        let swf_bytes = match self.try_direct(launch_url).await {
            Some(bytes) => Some(bytes),
            None => self.try_wayback(launch_url).await,
        };

        match swf_bytes {
            Some(bytes) => {
                if let Some(parent) = out_path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                let len = bytes.len();
                tokio::fs::write(&out_path, bytes).await?;
                Ok(FetchOutcome::Downloaded { bytes: len })
            },
            None => Ok(FetchOutcome::NotFound),
        }
    }

    fn out_path(&self, slug: &Slug) -> PathBuf {
        self.config.games_dir.join(format!("{slug}.swf"))
    }

    /// Download straight from the original host. `localflash` URLs are
    /// Flashpoint-internal and never reachable.
    async fn try_direct(&self, url: Option<&str>) -> Option<Vec<u8>> {
        let url = url?;
        if url.starts_with("http://localflash") {
            return None;
        }
        self.download(url).await
    }

    async fn try_wayback(&self, url: Option<&str>) -> Option<Vec<u8>> {
        let url = url?;
        if url.starts_with("http://localflash") {
            return None;
        }
        let timestamp = self.wayback.latest_snapshot(url).await.ok()??;
        self.download(&raw_url(&timestamp, url)).await
    }

    /// Fetch a URL and keep the body only if it sniffs as a real SWF. Any
    /// network error means "this source is dead", not a fatal condition.
    async fn download(&self, url: &str) -> Option<Vec<u8>> {
        let resp = self.client.get(url).send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let bytes = resp.bytes().await.ok()?.to_vec();
        swf::is_swf(&bytes).then_some(bytes)
    }
}
