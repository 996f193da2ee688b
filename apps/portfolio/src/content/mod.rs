//! Content model: the static record every page section and the chat assistant read from.
//!
//! The record is loaded exactly once at startup (builtin or from a JSON file)
//! and shared read-only behind an `Arc` for the lifetime of the process.

pub mod defaults;
pub mod icons;
pub mod models;

use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use icons::{Icon, IconGlyph};
pub use models::Profile;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("content file is not a valid profile: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("required content field '{0}' is empty")]
    MissingField(&'static str),
}

/// Loads the content record.
///
/// With no path configured the builtin record is used; otherwise the file is
/// parsed as JSON with the same schema. Either way the result is validated.
pub fn load_profile(path: Option<&Path>) -> Result<Profile, ContentError> {
    let profile = match path {
        None => {
            info!("Using builtin content record");
            Profile::builtin()
        }
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let profile: Profile = serde_json::from_str(&raw)?;
            info!(path = %path.display(), "Loaded content record from file");
            profile
        }
    };

    profile.validate()?;
    Ok(profile)
}

impl Profile {
    /// Checks the fields the page and the assistant cannot do without.
    pub fn validate(&self) -> Result<(), ContentError> {
        let required: [(&'static str, &str); 3] = [
            ("name", &self.name),
            ("title", &self.title),
            ("contact.email", &self.contact.email),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::MissingField(field));
            }
        }
        Ok(())
    }
}
