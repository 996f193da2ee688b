use std::sync::Arc;

use axum::body::Bytes;

use crate::chat::ChatRegistry;
use crate::config::Config;
use crate::content::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Content record, read-only after startup.
    pub profile: Arc<Profile>,
    /// The page, rendered once at startup. Cloning is a refcount bump.
    pub page: Bytes,
    pub chats: Arc<ChatRegistry>,
}
