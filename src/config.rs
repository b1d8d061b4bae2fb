// Fixed configuration for the light-rays scene.
// Constants are the defaults; `SceneConfig` is what the CLI can override.

use crate::error::{Error, Result};
use crate::types::Circle;

pub const SCREEN_WIDTH: usize = 1200;
pub const SCREEN_HEIGHT: usize = 900;
pub const RAYS_NUMBER: usize = 1000;
pub const WORKERS: usize = 4;
pub const TARGET_FPS: usize = 100;

/// Vertical pixels per frame for the oscillating obstacle.
pub const OBSTACLE_SPEED: i32 = 10;

// 0x00RRGGBB, as minifb expects
pub const COLOR_BACKGROUND: u32 = 0x00_00_00_00;
pub const COLOR_RAY: u32 = 0x00_FF_D7_00; // gold
pub const COLOR_OBSTACLE: u32 = 0x00_DC_14_3C; // crimson
pub const COLOR_OUTLINE: u32 = 0x00_FF_FF_FF;

pub const DEFAULT_EMITTER: Circle = Circle::new(200, 200, 40);
pub const DEFAULT_OBSTACLES: [Circle; 2] = [Circle::new(820, 300, 140), Circle::new(350, 650, 80)];

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub rays: usize,
    pub workers: usize,
    pub target_fps: usize,
    pub emitter: Circle,
    pub obstacles: Vec<Circle>,
    pub obstacle_speed: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            rays: RAYS_NUMBER,
            workers: WORKERS,
            target_fps: TARGET_FPS,
            emitter: DEFAULT_EMITTER,
            obstacles: DEFAULT_OBSTACLES.to_vec(),
            obstacle_speed: OBSTACLE_SPEED,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn rays(mut self, rays: usize) -> Self {
        self.rays = rays;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn target_fps(mut self, fps: usize) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn obstacles(mut self, obstacles: Vec<Circle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Reject values the ray core would otherwise assert on.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(Error::Config("viewport does not fit in i32 pixel coordinates".into()));
        }
        if self.rays == 0 {
            return Err(Error::Config("ray count must be at least 1".into()));
        }
        if self.workers == 0 {
            return Err(Error::Config("worker count must be at least 1".into()));
        }
        if self.obstacles.iter().any(|o| o.r < 0) {
            return Err(Error::Config("obstacle radius must be >= 0".into()));
        }
        Ok(())
    }
}
