mod chat;
mod config;
mod content;
mod errors;
mod llm_client;
mod render;
mod routes;
mod scene;
mod state;

use anyhow::{Context, Result};
use axum::body::Bytes;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::{Assistant, AssistantFactory, ChatRegistry};
use crate::config::Config;
use crate::content::load_profile;
use crate::llm_client::{
    prompts, CompletionBackend, GeminiClient, InferenceClient, SessionSettings,
};
use crate::render::PageRenderer;
use crate::routes::build_router;
use crate::state::AppState;

/// Lower bound for the idle-panel sweep interval.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Content record, read-only from here on
    let profile = Arc::new(
        load_profile(config.content_path.as_deref()).context("Failed to load site content")?,
    );
    info!(name = %profile.name, "Content record loaded");

    // Render the page once
    let page = PageRenderer::new()
        .and_then(|renderer| renderer.render(&profile))
        .map_err(|e| anyhow::anyhow!("Failed to render page: {e}"))?;
    info!(bytes = page.len(), "Page rendered");

    // Initialize LLM client
    if !config.has_credential() {
        warn!("No GEMINI_API_KEY configured; chat will answer with the service apology");
    }
    let backend: Arc<dyn CompletionBackend> = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_api_url.clone(),
    )?);
    info!("LLM client initialized (model: {})", backend.model());

    // Every chat panel gets its own inference client over the shared backend
    let settings = SessionSettings {
        system_instruction: Arc::from(prompts::build_system_instruction(&profile)),
        temperature: config.chat_temperature,
    };
    let factory: AssistantFactory = {
        let backend = backend.clone();
        Arc::new(move || {
            Box::new(InferenceClient::new(backend.clone(), settings.clone())) as Box<dyn Assistant>
        })
    };
    let chats = Arc::new(ChatRegistry::new(
        factory,
        prompts::greeting(&profile),
        config.chat_idle_ttl,
        config.chat_max_sessions,
    ));
    let sweeper = chats
        .clone()
        .spawn_sweeper((config.chat_idle_ttl / 4).max(MIN_SWEEP_INTERVAL));

    // Build app state
    let state = AppState {
        config: config.clone(),
        profile,
        page: Bytes::from(page),
        chats: chats.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    chats.close_all().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
