use std::fmt;

use serde::Deserialize;

/// Partial Flashpoint Archive search result.
#[derive(Debug, Clone, Deserialize)]
pub struct FlashpointGame {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(rename = "launchCommand")]
    pub launch_command: Option<String>,
}

impl FlashpointGame {
    pub fn is_flash(&self) -> bool {
        self.platform.to_lowercase().contains("flash")
    }
}

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Api { status: u16 },
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http error: {e}"),
            Self::Api { status } => write!(f, "api returned status {status}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Client for the Flashpoint Archive database API.
pub struct FlashpointClient {
    client: reqwest::Client,
    api_base: String,
}

impl FlashpointClient {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Search the archive by title. Returns raw results; ranking is the
    /// caller's concern via `best_match`.
    pub async fn search(&self, title: &str) -> Result<Vec<FlashpointGame>, FetchError> {
        let resp = self
            .client
            .get(format!("{}/search", self.api_base))
            .query(&[
                ("title", title),
                ("fields", "id,title,platform,launchCommand"),
                ("limit", "15"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Api {
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.json().await?)
    }
}

/// Pick the most trustworthy result for a title: exact title on Flash, then
/// exact title on any platform, then any Flash result, then the first hit.
pub fn best_match<'a>(results: &'a [FlashpointGame], title: &str) -> Option<&'a FlashpointGame> {
    let title_lower = title.to_lowercase();

    results
        .iter()
        .find(|r| r.title.to_lowercase() == title_lower && r.is_flash())
        .or_else(|| results.iter().find(|r| r.title.to_lowercase() == title_lower))
        .or_else(|| results.iter().find(|r| r.is_flash()))
        .or_else(|| results.first())
}
