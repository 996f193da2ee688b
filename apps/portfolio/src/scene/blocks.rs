//! Wireframe octahedra drawn as one instanced batch.
//!
//! Each instance bobs vertically, spins, and pulses its scale, all as pure
//! functions of elapsed time and the instance's seeded parameters.

use std::f32::consts::PI;

use rand::Rng;
use serde::Serialize;

pub const BLOCK_COUNT: usize = 40;

const BOB_AMPLITUDE: f32 = 2.0;
const PULSE_RATE: f32 = 3.0;
const PULSE_DEPTH: f32 = 0.2;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataBlock {
    pub base: [f32; 3],
    pub scale: f32,
    pub speed: f32,
    pub offset: f32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct InstanceTransform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
}

impl DataBlock {
    pub fn transform(&self, elapsed: f32) -> InstanceTransform {
        let spin = elapsed * self.speed;
        let pulse = 1.0 + (elapsed * PULSE_RATE + self.offset).sin() * PULSE_DEPTH;
        InstanceTransform {
            position: [
                self.base[0],
                self.base[1] + (spin + self.offset).sin() * BOB_AMPLITUDE,
                self.base[2],
            ],
            rotation: [spin, spin * 0.5, 0.0],
            scale: self.scale * pulse,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataBlocks {
    blocks: Vec<DataBlock>,
    transforms: Vec<InstanceTransform>,
}

impl DataBlocks {
    pub fn seeded<R: Rng>(rng: &mut R, count: usize) -> Self {
        let blocks: Vec<DataBlock> = (0..count)
            .map(|_| DataBlock {
                base: [
                    (rng.gen::<f32>() - 0.5) * 30.0,
                    (rng.gen::<f32>() - 0.5) * 30.0,
                    (rng.gen::<f32>() - 0.5) * 20.0 - 5.0,
                ],
                scale: rng.gen::<f32>() * 0.5 + 0.2,
                speed: rng.gen::<f32>() * 0.5 + 0.2,
                offset: rng.gen::<f32>() * PI,
            })
            .collect();
        let transforms = blocks.iter().map(|b| b.transform(0.0)).collect();
        Self { blocks, transforms }
    }

    pub fn step(&mut self, elapsed: f32) {
        for (block, slot) in self.blocks.iter().zip(self.transforms.iter_mut()) {
            *slot = block.transform(elapsed);
        }
    }

    pub fn blocks(&self) -> &[DataBlock] {
        &self.blocks
    }

    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }
}
