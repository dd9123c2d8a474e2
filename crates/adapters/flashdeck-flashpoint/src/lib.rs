pub mod config;
pub mod fetcher;
pub mod flashpoint;
pub mod wayback;

pub use config::FetcherConfig;
pub use fetcher::{FetchOutcome, FetchSummary, GameFetcher};
pub use flashpoint::FlashpointClient;
pub use wayback::WaybackClient;
