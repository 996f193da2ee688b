use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Application configuration loaded from environment variables.
///
/// Nothing is required: without an API key the site still serves and the
/// chat answers every question with the service apology.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub chat_temperature: f32,
    pub chat_idle_ttl: Duration,
    pub chat_max_sessions: usize,
    pub content_path: Option<PathBuf>,
    pub scene_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_url: get("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            chat_temperature: parse_or(get("CHAT_TEMPERATURE"), "CHAT_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            chat_idle_ttl: Duration::from_secs(parse_or(
                get("CHAT_IDLE_TTL_SECS"),
                "CHAT_IDLE_TTL_SECS",
                1800u64,
            )?),
            chat_max_sessions: parse_or(get("CHAT_MAX_SESSIONS"), "CHAT_MAX_SESSIONS", 500usize)?,
            content_path: get("CONTENT_PATH").map(PathBuf::from),
            scene_seed: get("SCENE_SEED")
                .map(|v| v.parse::<u64>().context("SCENE_SEED must be an unsigned integer"))
                .transpose()?,
            port: parse_or(get("PORT"), "PORT", 8080u16)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{v}'")),
    }
}
