// Per-frame scene state: the emitter, its ray fan, and the obstacles.
// Visual: the gold fan follows the mouse while dragging; the big crimson
// circle bobs up and down, bouncing off the top and bottom edges.

use crate::canvas::RayCanvas;
use crate::config::{SceneConfig, COLOR_BACKGROUND};
use crate::dispatch::{compute_rays, DispatchStats};
use crate::rays::{generate_rays, RaySet};
use crate::types::Circle;
use log::debug;

pub struct Scene {
    pub emitter: Circle,
    pub obstacles: Vec<Circle>,
    rays: RaySet,
    speed_y: i32, // vertical speed of obstacles[0], sign flips on bounce
    height: i32,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        let emitter = config.emitter;
        Self {
            emitter,
            obstacles: config.obstacles.clone(),
            rays: generate_rays(emitter.x, emitter.y, config.rays),
            speed_y: config.obstacle_speed,
            height: i32::try_from(config.height).expect("viewport height must fit in i32"),
        }
    }

    pub fn rays(&self) -> &RaySet {
        &self.rays
    }

    /// Move the emitter; rays are rebuilt only if the position changed.
    pub fn move_emitter(&mut self, x: i32, y: i32) -> bool {
        if (self.emitter.x, self.emitter.y) == (x, y) {
            return false;
        }
        self.emitter.x = x;
        self.emitter.y = y;
        self.rays.regenerate(x, y);
        debug!("emitter moved to ({x}, {y})");
        true
    }

    /// One frame of obstacle motion. Only the first obstacle moves.
    pub fn advance(&mut self) {
        let Some(o) = self.obstacles.first_mut() else { return };
        o.y += self.speed_y;
        if o.y - o.r <= 0 || o.y + o.r > self.height {
            self.speed_y = -self.speed_y;
        }
    }

    /// Clear the canvas and march the whole fan into it.
    pub fn render(&self, canvas: &mut RayCanvas, workers: usize) -> DispatchStats {
        canvas.clear(COLOR_BACKGROUND);
        compute_rays(canvas, self.rays.as_slice(), &self.obstacles, workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLOR_OBSTACLE, COLOR_RAY};

    fn small_config() -> SceneConfig {
        SceneConfig::new()
            .size(100, 100)
            .rays(64)
            .workers(2)
            .obstacles(vec![Circle::new(50, 50, 10)])
    }

    #[test]
    fn test_move_emitter_regenerates_on_change_only() {
        let mut scene = Scene::new(&small_config());
        assert!(!scene.move_emitter(200, 200));
        assert!(scene.move_emitter(20, 30));
        assert_eq!(scene.rays().origin(), Some((20, 30)));
        assert_eq!(scene.rays().len(), 64);
        assert!(!scene.move_emitter(20, 30));
    }

    #[test]
    fn test_obstacle_bounces_off_bottom_then_top() {
        let config = small_config();
        let mut scene = Scene::new(&config);
        // y=50, r=10, speed 10: 60, 70, 80, 90 (90+10 > 100 is false), 100 flips
        let mut ys = Vec::new();
        for _ in 0..7 {
            scene.advance();
            ys.push(scene.obstacles[0].y);
        }
        assert_eq!(ys, vec![60, 70, 80, 90, 100, 90, 80]);

        for _ in 0..7 {
            scene.advance();
        }
        // 70, 60, 50, 40, 30, 20, 10 (10-10 <= 0 flips)
        assert_eq!(scene.obstacles[0].y, 10);
        scene.advance();
        assert_eq!(scene.obstacles[0].y, 20);
    }

    #[test]
    fn test_advance_with_no_obstacles_is_noop() {
        let mut scene = Scene::new(&small_config().obstacles(vec![]));
        scene.advance();
        assert!(scene.obstacles.is_empty());
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let config = small_config();
        let mut scene = Scene::new(&config);
        let mut canvas = RayCanvas::new(100, 100, COLOR_BACKGROUND);

        scene.move_emitter(10, 10);
        scene.render(&mut canvas, config.workers);
        assert_eq!(canvas.load(10, 10), COLOR_RAY);

        scene.move_emitter(90, 90);
        let stats = scene.render(&mut canvas, config.workers);
        assert_eq!(canvas.load(10, 10), COLOR_BACKGROUND);
        assert_eq!(canvas.load(90, 90), COLOR_RAY);
        assert_eq!(stats.exited + stats.blocked, 64);
    }

    #[test]
    fn test_ray_toward_obstacle_marks_hit() {
        let config = small_config().rays(4); // angles 0, π/2, π, 3π/2
        let mut scene = Scene::new(&config);
        scene.move_emitter(20, 50);
        let mut canvas = RayCanvas::new(100, 100, COLOR_BACKGROUND);
        let stats = scene.render(&mut canvas, 1);

        // the 0-angle ray reaches x=41, first pixel strictly inside r=10
        assert_eq!(canvas.load(41, 50), COLOR_OBSTACLE);
        assert_eq!(canvas.load(42, 50), COLOR_BACKGROUND);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.exited, 3);
    }

    #[test]
    #[should_panic(expected = "viewport height must fit in i32")]
    fn test_oversized_height_panics() {
        let config = small_config().size(100, i32::MAX as usize + 1).rays(1);
        Scene::new(&config);
    }
}
