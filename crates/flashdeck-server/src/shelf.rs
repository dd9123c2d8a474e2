use std::io::Read;
use std::path::{Path, PathBuf};

use axum::extract::{Path as UrlPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use flashdeck_core::resolver::{ASSET_EXT, EmbedError, ResolveError, SwfHost, resolve_and_load};
use flashdeck_core::slug::Slug;
use flashdeck_core::swf;

use crate::error::AppError;
use crate::state::AppState;

/// Filesystem-backed `SwfHost`. The in-page emulator ultimately renders the
/// asset; this host answers the question the resolver asks of it — can the
/// file at this path be handed over for playback — by probing the games
/// directory and sniffing the SWF header.
#[derive(Debug, Clone)]
pub struct GameShelf {
    games_dir: PathBuf,
    max_asset_bytes: u64,
}

impl GameShelf {
    pub fn new(games_dir: impl Into<PathBuf>, max_asset_bytes: u64) -> Self {
        Self {
            games_dir: games_dir.into(),
            max_asset_bytes,
        }
    }

    /// On-disk location for a slug's asset. The slug charset admits no
    /// separators, so the result stays inside the games directory.
    pub fn disk_path(&self, slug: &Slug) -> PathBuf {
        self.games_dir.join(format!("{slug}.{ASSET_EXT}"))
    }

    pub fn is_present(&self, slug: &Slug) -> bool {
        self.disk_path(slug).is_file()
    }

    fn sniff_file(&self, path: &Path) -> Result<(), EmbedError> {
        let meta = std::fs::metadata(path).map_err(|_| EmbedError::Missing)?;
        if !meta.is_file() {
            return Err(EmbedError::Missing);
        }
        if meta.len() > self.max_asset_bytes {
            return Err(EmbedError::Unplayable(format!(
                "{} bytes exceeds the {} byte asset limit",
                meta.len(),
                self.max_asset_bytes
            )));
        }

        let mut file = std::fs::File::open(path).map_err(|_| EmbedError::Missing)?;
        let mut head = [0u8; swf::HEADER_LEN];
        file.read_exact(&mut head)
            .map_err(|_| EmbedError::Unplayable("file shorter than a SWF header".to_string()))?;
        swf::sniff(&head)
            .map(|_| ())
            .map_err(|e| EmbedError::Unplayable(e.to_string()))
    }
}

impl SwfHost for GameShelf {
    fn embed(&self, source_path: &str) -> Result<(), EmbedError> {
        // `source_path` is the site-relative `games/<slug>.swf`; only the
        // filename matters here, the shelf owns its own root.
        let file_name = source_path.rsplit('/').next().unwrap_or(source_path);
        self.sniff_file(&self.games_dir.join(file_name))
    }
}

/// GET /games/{file} — serve one game asset through the resolver.
///
/// Missing assets 404 with a message naming the exact expected path; files
/// that fail SWF sniffing 502 with the same path; malformed slugs 400
/// without touching the shelf.
pub async fn get_game_file(
    State(state): State<AppState>,
    UrlPath(file): UrlPath<String>,
) -> Result<Response, AppError> {
    let Some(raw) = file.strip_suffix(".swf") else {
        return Err(AppError::NotFound(format!("no such asset: {file}")));
    };

    let path = resolve_and_load(raw, &*state.shelf).map_err(map_resolve_error)?;

    // `raw` already parsed inside resolve_and_load, so this cannot fail
    let slug = Slug::parse(raw).map_err(|e| AppError::Internal(e.to_string()))?;
    let bytes = tokio::fs::read(state.shelf.disk_path(&slug)).await.map_err(|_| {
        // The file vanished between the probe and the read
        let gone = ResolveError::AssetUnavailable {
            expected_path: path.clone(),
            cause: EmbedError::Missing,
        };
        AppError::NotFound(gone.to_string())
    })?;

    tracing::debug!(asset = %path, bytes = bytes.len(), "Serving game asset");
    Ok((
        [
            (header::CONTENT_TYPE, "application/x-shockwave-flash"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        bytes,
    )
        .into_response())
}

pub(crate) fn map_resolve_error(err: ResolveError) -> AppError {
    match &err {
        ResolveError::InvalidSlug(_) => AppError::BadRequest(err.to_string()),
        ResolveError::AssetUnavailable {
            cause: EmbedError::Missing,
            ..
        } => AppError::NotFound(err.to_string()),
        ResolveError::AssetUnavailable {
            cause: EmbedError::Unplayable(_),
            ..
        } => AppError::Unplayable(err.to_string()),
    }
}
