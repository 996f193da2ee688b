//! Particle rain: a point cloud falling at per-particle speeds.
//!
//! Motion is linear in ticks, not time: each tick moves a particle down by its
//! own speed, and a particle below `RAIN_BOTTOM` reappears at `RAIN_TOP`.
//! Horizontal and depth coordinates are fixed at creation.

use rand::Rng;
use serde::Serialize;

pub const RAIN_COUNT: usize = 1000;
pub const RAIN_TOP: f32 = 25.0;
pub const RAIN_BOTTOM: f32 = -25.0;

const SPREAD_X: f32 = 50.0;
const SPREAD_Y: f32 = 50.0;
const SPREAD_Z: f32 = 30.0;
const DEPTH_SHIFT: f32 = -10.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RainDrop {
    pub position: [f32; 3],
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct DigitalRain {
    drops: Vec<RainDrop>,
}

impl DigitalRain {
    pub fn seeded<R: Rng>(rng: &mut R, count: usize) -> Self {
        let drops = (0..count)
            .map(|_| RainDrop {
                position: [
                    (rng.gen::<f32>() - 0.5) * SPREAD_X,
                    (rng.gen::<f32>() - 0.5) * SPREAD_Y,
                    (rng.gen::<f32>() - 0.5) * SPREAD_Z + DEPTH_SHIFT,
                ],
                speed: rng.gen::<f32>() * 0.2 + 0.05,
            })
            .collect();
        Self { drops }
    }

    pub fn from_drops(drops: Vec<RainDrop>) -> Self {
        Self { drops }
    }

    pub fn step(&mut self) {
        for drop in &mut self.drops {
            drop.position[1] = fall(drop.position[1], drop.speed);
        }
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }
}

/// One tick of vertical motion with wraparound at the lower bound.
pub fn fall(y: f32, speed: f32) -> f32 {
    let next = y - speed;
    if next < RAIN_BOTTOM {
        RAIN_TOP
    } else {
        next
    }
}
