use serde::Serialize;

const SCROLL_SPEED: f32 = 1.5;
/// The grid repeats every section, so scrolling wraps at this modulus.
const SCROLL_MODULUS: f32 = 3.0;

/// Reference grid under the scene, scrolling toward the viewer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GridPlane {
    pub height: f32,
    pub scroll: f32,
    pub cell_size: f32,
    pub section_size: f32,
    pub fade_distance: f32,
    pub cell_color: &'static str,
    pub section_color: &'static str,
}

impl Default for GridPlane {
    fn default() -> Self {
        Self {
            height: -6.0,
            scroll: 0.0,
            cell_size: 0.8,
            section_size: 4.0,
            fade_distance: 30.0,
            cell_color: "#38bdf8",
            section_color: "#6366f1",
        }
    }
}

impl GridPlane {
    pub fn step(&mut self, elapsed: f32) {
        self.scroll = (elapsed * SCROLL_SPEED).rem_euclid(SCROLL_MODULUS);
    }
}
