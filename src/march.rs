// Ray marcher: walk one ray a unit step at a time until it leaves the
// canvas or enters an obstacle.

use crate::canvas::RayCanvas;
use crate::config::{COLOR_OBSTACLE, COLOR_RAY};
use crate::types::{Circle, Ray};

/// How a ray's march ended. `steps` counts pixels written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarchOutcome {
    /// Left the viewport.
    Exited { steps: usize },
    /// Entered `obstacles[obstacle]`; the last pixel holds the obstacle color.
    Blocked { obstacle: usize, steps: usize },
}

/// March `ray` into `canvas`.
///
/// Every visited pixel gets the ray color. The first position strictly
/// inside an obstacle is repainted with the obstacle color and the march
/// stops there. Obstacles are tested in slice order, so when two overlap
/// the earlier one wins.
pub fn march(canvas: &RayCanvas, ray: &Ray, obstacles: &[Circle]) -> MarchOutcome {
    debug_assert!(
        ray.dx.is_finite() && ray.dy.is_finite() && (ray.dx != 0.0 || ray.dy != 0.0),
        "ray direction ({}, {}) would never leave the canvas",
        ray.dx,
        ray.dy
    );
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let mut x = ray.x_start as f64;
    let mut y = ray.y_start as f64;
    let mut steps = 0;

    loop {
        if x < 0.0 || x >= w || y < 0.0 || y >= h {
            return MarchOutcome::Exited { steps };
        }

        // truncation; coordinates are non-negative here
        let (px, py) = (x as usize, y as usize);
        canvas.store(px, py, COLOR_RAY);
        steps += 1;

        if let Some(obstacle) = obstacles.iter().position(|o| o.contains(x, y)) {
            canvas.store(px, py, COLOR_OBSTACLE);
            return MarchOutcome::Blocked { obstacle, steps };
        }

        x += ray.dx;
        y += ray.dy;
    }
}
