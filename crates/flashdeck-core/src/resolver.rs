use std::fmt;

use crate::slug::{Slug, SlugError};

/// Flat directory every asset lives in, relative to the site root.
pub const ASSET_DIR: &str = "games";
pub const ASSET_EXT: &str = "swf";

/// Where a slug's asset must live: `games/<slug>.swf`. Pure function of the
/// slug; the slug charset admits no separators, so the result never leaves
/// the asset directory.
pub fn expected_path(slug: &Slug) -> String {
    format!("{ASSET_DIR}/{slug}.{ASSET_EXT}")
}

/// The emulator's embedding contract: one operation, owned by a third-party
/// component. The resolver hands it a path and treats everything past that
/// point as opaque.
pub trait SwfHost {
    fn embed(&self, source_path: &str) -> Result<(), EmbedError>;
}

/// Why a host could not present an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// No file at the source path.
    Missing,
    /// A file is there but the emulator cannot play it.
    Unplayable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    InvalidSlug(SlugError),
    AssetUnavailable {
        expected_path: String,
        cause: EmbedError,
    },
}

// The unavailable message always names the exact expected path. That string
// doubles as operator documentation: it tells a maintainer precisely which
// file to drop into the games directory.
impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug(e) => write!(f, "{e}"),
            Self::AssetUnavailable {
                expected_path,
                cause,
            } => match cause {
                EmbedError::Missing => {
                    write!(f, "missing game file: add {expected_path} to make this title playable")
                },
                EmbedError::Unplayable(reason) => {
                    write!(f, "{expected_path} is present but unplayable: {reason}")
                },
            },
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve a raw slug to its asset path and ask the host to load it.
///
/// Malformed slugs fail before any path reaches the host. Any host failure
/// surfaces as `AssetUnavailable` naming the expected path. Stateless and
/// idempotent: the same slug against the same host yields the same result
/// and the same message every time.
pub fn resolve_and_load(raw_slug: &str, host: &impl SwfHost) -> Result<String, ResolveError> {
    let slug = Slug::parse(raw_slug).map_err(ResolveError::InvalidSlug)?;
    let path = expected_path(&slug);
    match host.embed(&path) {
        Ok(()) => Ok(path),
        Err(cause) => Err(ResolveError::AssetUnavailable {
            expected_path: path,
            cause,
        }),
    }
}
