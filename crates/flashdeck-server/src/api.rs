use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use flashdeck_core::catalog::GameEntry;
use flashdeck_core::resolver::{expected_path, resolve_and_load};

use crate::error::AppError;
use crate::shelf::map_resolve_error;
use crate::state::AppState;

/// One catalog entry as the site sees it. `available` is a filesystem probe
/// recomputed per request; the catalog itself never changes.
#[derive(Debug, Serialize)]
pub struct GameSummary {
    pub slug: String,
    pub title: String,
    pub expected_path: String,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<GameSummary>,
}

fn summarize(state: &AppState, entry: &GameEntry) -> GameSummary {
    GameSummary {
        slug: entry.slug.to_string(),
        title: entry.title.clone(),
        expected_path: expected_path(&entry.slug),
        available: state.shelf.is_present(&entry.slug),
    }
}

/// GET /api/v1/games — the full catalog with availability flags.
pub async fn list_games(State(state): State<AppState>) -> Json<GamesResponse> {
    let games = state
        .catalog
        .entries()
        .iter()
        .map(|entry| summarize(&state, entry))
        .collect();
    Json(GamesResponse { games })
}

/// GET /api/v1/games/{slug} — resolve a single title.
///
/// Runs the same resolve path the asset route does, so a missing asset
/// reports the identical message naming `games/<slug>.swf`.
pub async fn get_game(
    State(state): State<AppState>,
    Path(raw_slug): Path<String>,
) -> Result<Json<GameSummary>, AppError> {
    resolve_and_load(&raw_slug, &*state.shelf).map_err(map_resolve_error)?;

    let entry = state
        .catalog
        .entries()
        .iter()
        .find(|e| e.slug.as_str() == raw_slug)
        .ok_or_else(|| AppError::NotFound(format!("no catalog entry for {raw_slug}")))?;

    Ok(Json(summarize(&state, entry)))
}
