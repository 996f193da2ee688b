use serde::{Deserialize, Serialize};

pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 12.0];
pub const CAMERA_FOV: f32 = 45.0;
const SMOOTHING: f32 = 0.05;

/// Pointer position in normalized screen coordinates, both axes in [-1, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Parallax camera that eases toward the pointer and always looks at the origin.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CameraRig {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    pub fov: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            look_at: [0.0, 0.0, 0.0],
            fov: CAMERA_FOV,
        }
    }
}

impl CameraRig {
    pub fn follow(&mut self, pointer: Pointer) {
        self.position[0] = lerp(self.position[0], pointer.x, SMOOTHING);
        self.position[1] = lerp(self.position[1], pointer.y, SMOOTHING);
        self.look_at = [0.0, 0.0, 0.0];
    }
}
