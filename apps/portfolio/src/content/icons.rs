//! Icon keys used by the content record and the glyph each one renders as.
//!
//! The record stores icons as plain strings; deserialization maps them onto
//! this closed set, and anything unrecognized lands on `Icon::Unknown`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Layout,
    Box,
    Palette,
    Code,
    Layers,
    Cpu,
    Tool,
    Shield,
    Chart,
    Video,
    Github,
    Linkedin,
    Twitter,
    Telegram,
    Mail,
    #[serde(other)]
    Unknown,
}

/// Rendering instructions for an icon: the sprite symbol id and its tone class.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct IconGlyph {
    pub symbol: &'static str,
    pub tone: &'static str,
}

impl Icon {
    pub fn glyph(self) -> IconGlyph {
        let (symbol, tone) = match self {
            Icon::Layout => ("layout", "tone-indigo"),
            Icon::Box => ("box", "tone-pink"),
            Icon::Palette => ("palette", "tone-purple"),
            Icon::Code => ("terminal", "tone-emerald"),
            Icon::Layers => ("layers", "tone-blue"),
            Icon::Cpu => ("cpu", "tone-orange"),
            Icon::Tool => ("wrench", "tone-gray"),
            Icon::Shield => ("shield", "tone-rose"),
            Icon::Chart => ("chart", "tone-amber"),
            Icon::Video => ("video", "tone-sky"),
            Icon::Github => ("github", "tone-white"),
            Icon::Linkedin => ("linkedin", "tone-white"),
            Icon::Twitter => ("twitter", "tone-white"),
            Icon::Telegram => ("send", "tone-white"),
            Icon::Mail => ("mail", "tone-white"),
            Icon::Unknown => ("code", "tone-indigo"),
        };
        IconGlyph { symbol, tone }
    }
}
