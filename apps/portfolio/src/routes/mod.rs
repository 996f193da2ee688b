pub mod assets;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_index))
        .route("/health", get(health::health_handler))
        .route("/assets/:name", get(assets::handle_asset))
        // Page data
        .route("/api/content", get(pages::handle_content))
        .route("/api/scene", get(pages::handle_scene))
        // Chat widget
        .route("/api/chat/sessions", post(handlers::handle_create))
        .route(
            "/api/chat/sessions/:id",
            get(handlers::handle_get).delete(handlers::handle_delete),
        )
        .route(
            "/api/chat/sessions/:id/toggle",
            post(handlers::handle_toggle),
        )
        .route(
            "/api/chat/sessions/:id/messages",
            post(handlers::handle_submit),
        )
        .with_state(state)
}
