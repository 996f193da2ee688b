use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{ChatController, ChatSnapshot, SubmitOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub chat: ChatSnapshot,
}

async fn find(state: &AppState, id: Uuid) -> Result<Arc<ChatController>, AppError> {
    state
        .chats
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("chat {id}")))
}

/// POST /api/chat/sessions
pub async fn handle_create(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChatSnapshot>), AppError> {
    let panel = state.chats.create().await?;
    Ok((StatusCode::CREATED, Json(panel.snapshot().await)))
}

/// GET /api/chat/sessions/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let panel = find(&state, id).await?;
    Ok(Json(panel.snapshot().await))
}

/// POST /api/chat/sessions/:id/toggle
pub async fn handle_toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSnapshot>, AppError> {
    let panel = find(&state, id).await?;
    Ok(Json(panel.toggle().await))
}

/// POST /api/chat/sessions/:id/messages
///
/// Blank text and closed panels are not errors; the outcome says what happened.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let panel = find(&state, id).await?;
    let outcome = panel.submit(&req.text).await;
    Ok(Json(SubmitResponse {
        outcome,
        chat: panel.snapshot().await,
    }))
}

/// DELETE /api/chat/sessions/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.chats.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("chat {id}")))
    }
}
