//! Layout renderer: turns the content record into the single HTML page.
//!
//! Rendering is a pure function of the record (plus the current year for the
//! footer), so `main` renders once at startup and the router serves the
//! cached string.

pub mod reveal;
pub mod sections;

use chrono::{Datelike, Utc};
use minijinja::{context, Environment};
use serde::Serialize;
use tracing::debug;

use crate::content::{Icon, IconGlyph, Profile};
use crate::errors::AppError;

pub use sections::{build_sections, SectionKind};

const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug, Serialize)]
struct SocialView<'a> {
    platform: &'a str,
    url: &'a str,
    glyph: IconGlyph,
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("templates/page.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, profile: &Profile) -> Result<String, AppError> {
        self.render_for_year(profile, Utc::now().year())
    }

    pub fn render_for_year(&self, profile: &Profile, year: i32) -> Result<String, AppError> {
        let sections = build_sections(profile);
        let socials: Vec<SocialView<'_>> = profile
            .contact
            .socials
            .iter()
            .map(|s| SocialView {
                platform: &s.platform,
                url: &s.url,
                glyph: s.icon.glyph(),
            })
            .collect();

        let template = self.env.get_template(PAGE_TEMPLATE)?;
        let html = template.render(context! {
            profile => profile,
            sections => sections,
            socials => socials,
            placeholder => profile.placeholder_glyph(),
            mail_glyph => Icon::Mail.glyph(),
            external_glyph => IconGlyph { symbol: "external", tone: "tone-white" },
            year => year,
        })?;

        debug!(bytes = html.len(), sections = SectionKind::ALL.len(), "Page rendered");
        Ok(html)
    }
}
