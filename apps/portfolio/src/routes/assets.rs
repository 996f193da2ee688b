//! Static assets compiled into the binary.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

const SITE_CSS: &str = include_str!("../../static/site.css");
const REVEAL_JS: &str = include_str!("../../static/reveal.js");
const SCENE_JS: &str = include_str!("../../static/scene.js");
const CHAT_JS: &str = include_str!("../../static/chat.js");

fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "site.css" => Some(("text/css; charset=utf-8", SITE_CSS)),
        "reveal.js" => Some(("text/javascript; charset=utf-8", REVEAL_JS)),
        "scene.js" => Some(("text/javascript; charset=utf-8", SCENE_JS)),
        "chat.js" => Some(("text/javascript; charset=utf-8", CHAT_JS)),
        _ => None,
    }
}

/// GET /assets/:name
pub async fn handle_asset(Path(name): Path<String>) -> Result<Response, AppError> {
    let (content_type, body) =
        lookup(&name).ok_or_else(|| AppError::NotFound(format!("asset {name}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        body,
    )
        .into_response())
}
