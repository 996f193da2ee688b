//! Background scene: decorative animated backdrop behind the page.
//!
//! # Model
//! - Everything random is drawn once from a seeded `StdRng` in `Scene::new`.
//! - `Scene::tick` advances one frame: time-driven parts (labels, blocks, grid)
//!   are recomputed from elapsed time, frame-driven parts (rain, cloud spin,
//!   camera easing) take one step.
//! - `Scene::snapshot` exposes the seeded parameters plus the current pose so
//!   the browser renderer can keep animating from where the server left off.
//!
//! There is a single "running" state. Nothing here can fail.

pub mod blocks;
pub mod camera;
pub mod grid;
pub mod labels;
pub mod rain;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use blocks::{DataBlock, DataBlocks, InstanceTransform, BLOCK_COUNT};
use camera::CameraRig;
use grid::GridPlane;
use labels::{CodeCloud, FloatPose, FloatingLabel, LABEL_COUNT};
use rain::{DigitalRain, RainDrop, RAIN_BOTTOM, RAIN_COUNT, RAIN_TOP};

pub use camera::Pointer;

/// Frame length used when the caller advances the scene by whole ticks.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;
/// Upper bound on ticks a single snapshot request may fast-forward.
pub const MAX_SNAPSHOT_TICKS: u32 = 600;

pub const BACKGROUND_COLOR: &str = "#030712";
const BLOCK_COLOR: &str = "#4f46e5";
const RAIN_COLOR: &str = "#38bdf8";

/// Static star field parameters; the stars themselves do not move.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StarField {
    pub count: u32,
    pub radius: f32,
    pub depth: f32,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            count: 2000,
            radius: 100.0,
            depth: 50.0,
        }
    }
}

pub struct Scene {
    seed: u64,
    ticks: u64,
    elapsed: f32,
    cloud: CodeCloud,
    blocks: DataBlocks,
    rain: DigitalRain,
    grid: GridPlane,
    camera: CameraRig,
    stars: StarField,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            seed,
            ticks: 0,
            elapsed: 0.0,
            cloud: CodeCloud::seeded(&mut rng, LABEL_COUNT),
            blocks: DataBlocks::seeded(&mut rng, BLOCK_COUNT),
            rain: DigitalRain::seeded(&mut rng, RAIN_COUNT),
            grid: GridPlane::default(),
            camera: CameraRig::default(),
            stars: StarField::default(),
        }
    }

    /// Advances one frame of `dt` seconds with the pointer at `pointer`.
    pub fn tick(&mut self, dt: f32, pointer: Pointer) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        self.ticks += 1;

        self.camera.follow(pointer);
        self.grid.step(self.elapsed);
        self.cloud.step(self.elapsed);
        self.blocks.step(self.elapsed);
        self.rain.step();
    }

    /// Runs `ticks` frames at the fixed frame rate with a resting pointer.
    pub fn advance(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick(FRAME_SECONDS, Pointer::default());
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rain(&self) -> &DigitalRain {
        &self.rain
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let [cloud_rotation_y, cloud_rotation_z] = self.cloud.rotation();
        SceneSnapshot {
            seed: self.seed,
            ticks: self.ticks,
            elapsed: self.elapsed,
            background: BACKGROUND_COLOR,
            camera: self.camera,
            grid: self.grid,
            stars: self.stars,
            cloud: CloudSnapshot {
                rotation_y: cloud_rotation_y,
                rotation_z: cloud_rotation_z,
                labels: self
                    .cloud
                    .labels()
                    .iter()
                    .map(|label| LabelSnapshot {
                        label: label.clone(),
                        pose: label.pose(self.elapsed),
                    })
                    .collect(),
            },
            blocks: BlocksSnapshot {
                color: BLOCK_COLOR,
                instances: self
                    .blocks
                    .blocks()
                    .iter()
                    .zip(self.blocks.transforms())
                    .map(|(block, transform)| BlockSnapshot {
                        block: block.clone(),
                        transform: *transform,
                    })
                    .collect(),
            },
            rain: RainSnapshot {
                color: RAIN_COLOR,
                top: RAIN_TOP,
                bottom: RAIN_BOTTOM,
                drops: self.rain.drops().to_vec(),
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Snapshot types (wire format for the browser renderer)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub seed: u64,
    pub ticks: u64,
    pub elapsed: f32,
    pub background: &'static str,
    pub camera: CameraRig,
    pub grid: GridPlane,
    pub stars: StarField,
    pub cloud: CloudSnapshot,
    pub blocks: BlocksSnapshot,
    pub rain: RainSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloudSnapshot {
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub labels: Vec<LabelSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelSnapshot {
    #[serde(flatten)]
    pub label: FloatingLabel,
    pub pose: FloatPose,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlocksSnapshot {
    pub color: &'static str,
    pub instances: Vec<BlockSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockSnapshot {
    #[serde(flatten)]
    pub block: DataBlock,
    pub transform: InstanceTransform,
}

#[derive(Debug, Clone, Serialize)]
pub struct RainSnapshot {
    pub color: &'static str,
    pub top: f32,
    pub bottom: f32,
    pub drops: Vec<RainDrop>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_scene() {
        let a = Scene::new(42).snapshot();
        let b = Scene::new(42).snapshot();
        assert_eq!(a.rain.drops, b.rain.drops);
        assert_eq!(a.cloud.labels.len(), LABEL_COUNT);
        assert_eq!(a.blocks.instances.len(), BLOCK_COUNT);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Scene::new(1).snapshot();
        let b = Scene::new(2).snapshot();
        assert_ne!(a.rain.drops, b.rain.drops);
    }

    #[test]
    fn test_advance_counts_ticks_and_time() {
        let mut scene = Scene::new(5);
        scene.advance(120);
        assert_eq!(scene.ticks(), 120);
        let snap = scene.snapshot();
        assert!((snap.elapsed - 2.0).abs() < 1e-3);
        assert!((snap.cloud.rotation_y - 0.24).abs() < 1e-4);
    }

    #[test]
    fn test_rain_columns_fixed_across_ticks() {
        let mut scene = Scene::new(8);
        let before: Vec<RainDrop> = scene.rain().drops().to_vec();
        scene.advance(MAX_SNAPSHOT_TICKS);
        for (now, start) in scene.rain().drops().iter().zip(&before) {
            assert_eq!(now.position[0], start.position[0]);
            assert_eq!(now.position[2], start.position[2]);
            assert!(now.position[1] >= RAIN_BOTTOM && now.position[1] <= RAIN_TOP);
        }
    }

    #[test]
    fn test_pointer_only_moves_camera() {
        let mut still = Scene::new(3);
        let mut moved = Scene::new(3);
        for _ in 0..30 {
            still.tick(FRAME_SECONDS, Pointer::default());
            moved.tick(FRAME_SECONDS, Pointer::new(1.0, 1.0));
        }
        assert_eq!(still.rain().drops(), moved.rain().drops());
        assert!(moved.camera().position[0] > still.camera().position[0]);
    }

    #[test]
    fn test_bad_dt_does_not_advance_time() {
        let mut scene = Scene::new(1);
        scene.tick(f32::NAN, Pointer::default());
        scene.tick(-1.0, Pointer::default());
        assert_eq!(scene.snapshot().elapsed, 0.0);
        assert_eq!(scene.ticks(), 2);
    }
}
