use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::content::Profile;
use crate::errors::AppError;
use crate::scene::{Scene, SceneSnapshot, MAX_SNAPSHOT_TICKS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SceneQuery {
    pub seed: Option<u64>,
    pub ticks: Option<u32>,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page.clone())
}

/// GET /api/content
pub async fn handle_content(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.as_ref().clone())
}

/// GET /api/scene?seed=&ticks=
///
/// Seed precedence: query, then `SCENE_SEED`, then random. `ticks` is capped
/// at `MAX_SNAPSHOT_TICKS`.
pub async fn handle_scene(
    State(state): State<AppState>,
    Query(query): Query<SceneQuery>,
) -> Result<Json<SceneSnapshot>, AppError> {
    let seed = query
        .seed
        .or(state.config.scene_seed)
        .unwrap_or_else(rand::random);
    let ticks = query.ticks.unwrap_or(0).min(MAX_SNAPSHOT_TICKS);

    // Fast-forwarding 1000+ particles per tick is CPU-bound.
    let snapshot = tokio::task::spawn_blocking(move || {
        let mut scene = Scene::new(seed);
        scene.advance(ticks);
        scene.snapshot()
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scene snapshot: {e}")))?;

    debug!(seed, ticks, "Scene snapshot built");
    Ok(Json(snapshot))
}
