use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RevealEffect {
    /// Fade in while rising 20px.
    FadeUp,
    /// Fade in while growing from 95%.
    Scale,
}

/// Entrance transition for one element. Played once, the first time the
/// element enters the viewport.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Reveal {
    pub effect: RevealEffect,
    pub delay_ms: u32,
}

impl Reveal {
    pub const HEADER: Reveal = Reveal {
        effect: RevealEffect::FadeUp,
        delay_ms: 0,
    };

    pub fn fade_up() -> Self {
        Self::HEADER
    }

    /// The `index`-th element of a list, delayed by `step_ms` per predecessor.
    pub fn staggered(effect: RevealEffect, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            effect,
            delay_ms: index.saturating_mul(step_ms),
        }
    }
}
