//! Floating code labels drifting in a slowly turning cloud.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

pub const LABEL_COUNT: usize = 50;

const SYMBOLS: &[&str] = &[
    "{ }", "< >", "</>", "0", "1", "&&", "||", "const", "let", "fn", "=>", ";", "[]", "()",
    "return", "import", "export", "npm", "sudo", "git", "try", "catch",
];

const COLORS: &[&str] = &[
    "#818cf8", "#c084fc", "#2dd4bf", "#38bdf8", "#f472b6", "#ffffff",
];

const FLOAT_INTENSITY: f32 = 0.5;
const ROTATION_INTENSITY: f32 = 0.5;
/// Half-height of the float range; the float curve maps onto [-range, range].
const FLOAT_RANGE: f32 = 0.2;
const CLOUD_SPIN_PER_TICK: f32 = 0.002;
const CLOUD_SWAY: f32 = 0.05;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FloatingLabel {
    pub text: &'static str,
    pub color: &'static str,
    pub base: [f32; 3],
    pub speed: f32,
    pub phase: f32,
    pub opacity: f32,
    pub font_size: f32,
}

/// Offset applied to a label at a given time, on top of its base position.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FloatPose {
    pub offset_y: f32,
    pub rotation: [f32; 3],
}

impl FloatingLabel {
    pub fn pose(&self, elapsed: f32) -> FloatPose {
        let angle = (self.phase + elapsed) / 4.0 * self.speed;
        let wave = angle.sin() / 10.0;
        // map [-0.1, 0.1] onto [-FLOAT_RANGE, FLOAT_RANGE]
        let mapped = wave * (FLOAT_RANGE / 0.1);
        FloatPose {
            offset_y: mapped * FLOAT_INTENSITY,
            rotation: [
                angle.cos() / 8.0 * ROTATION_INTENSITY,
                angle.sin() / 8.0 * ROTATION_INTENSITY,
                angle.sin() / 20.0 * ROTATION_INTENSITY,
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodeCloud {
    labels: Vec<FloatingLabel>,
    rotation_y: f32,
    rotation_z: f32,
}

impl CodeCloud {
    pub fn seeded<R: Rng>(rng: &mut R, count: usize) -> Self {
        let labels = (0..count)
            .map(|_| FloatingLabel {
                text: SYMBOLS.choose(rng).copied().unwrap_or("{ }"),
                color: COLORS.choose(rng).copied().unwrap_or("#ffffff"),
                base: [
                    (rng.gen::<f32>() - 0.5) * 25.0,
                    (rng.gen::<f32>() - 0.5) * 15.0,
                    (rng.gen::<f32>() - 0.5) * 10.0,
                ],
                speed: rng.gen::<f32>() + 0.2,
                phase: rng.gen::<f32>() * 10_000.0,
                opacity: rng.gen::<f32>() * 0.3 + 0.2,
                font_size: rng.gen::<f32>() * 0.4 + 0.3,
            })
            .collect();

        Self {
            labels,
            rotation_y: 0.0,
            rotation_z: 0.0,
        }
    }

    pub fn step(&mut self, elapsed: f32) {
        self.rotation_y += CLOUD_SPIN_PER_TICK;
        self.rotation_z = (elapsed * 0.2).sin() * CLOUD_SWAY;
    }

    pub fn labels(&self) -> &[FloatingLabel] {
        &self.labels
    }

    pub fn rotation(&self) -> [f32; 2] {
        [self.rotation_y, self.rotation_z]
    }
}
