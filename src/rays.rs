// Ray field generator: a fan of evenly spaced rays around one origin.

use crate::types::Ray;
use std::f64::consts::TAU;

/// Fixed-length set of rays. The length never changes after creation;
/// moving the origin rebuilds every ray in place.
#[derive(Debug, Clone)]
pub struct RaySet {
    rays: Vec<Ray>,
}

impl RaySet {
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    pub fn as_slice(&self) -> &[Ray] {
        &self.rays
    }

    /// Origin shared by every ray, or `None` for an empty set.
    pub fn origin(&self) -> Option<(i32, i32)> {
        self.rays.first().map(|r| (r.x_start, r.y_start))
    }

    /// Replace every ray for a new origin. Angles are unchanged.
    pub fn regenerate(&mut self, x_start: i32, y_start: i32) {
        let count = self.rays.len();
        for (i, ray) in self.rays.iter_mut().enumerate() {
            *ray = Ray::new(x_start, y_start, angle_of(i, count));
        }
    }
}

#[inline]
fn angle_of(i: usize, count: usize) -> f64 {
    (i as f64 / count as f64) * TAU
}

/// `count` rays from `(x_start, y_start)` at angles `2π·i/count`.
pub fn generate_rays(x_start: i32, y_start: i32, count: usize) -> RaySet {
    let rays = (0..count)
        .map(|i| Ray::new(x_start, y_start, angle_of(i, count)))
        .collect();
    RaySet { rays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RAYS_NUMBER;

    #[test]
    fn test_ray_count_matches() {
        let set = generate_rays(200, 200, RAYS_NUMBER);
        assert_eq!(set.len(), RAYS_NUMBER);
        assert!(!set.is_empty());
        assert_eq!(set.origin(), Some((200, 200)));
    }

    #[test]
    fn test_angles_partition_full_turn() {
        let set = generate_rays(-5, 17, 360);
        let step = TAU / 360.0;
        for (i, ray) in set.as_slice().iter().enumerate() {
            assert!((ray.angle - step * i as f64).abs() < 1e-9, "ray {i}");
            assert!(ray.angle >= 0.0 && ray.angle < TAU);
            assert_eq!((ray.x_start, ray.y_start), (-5, 17));
        }
        assert_eq!(set.as_slice()[0].angle, 0.0);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let set = generate_rays(0, 0, RAYS_NUMBER);
        for ray in set.as_slice() {
            let mag2 = ray.dx * ray.dx + ray.dy * ray.dy;
            assert!((mag2 - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_rays(10, 20, 64);
        let b = generate_rays(10, 20, 64);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_regenerate_replaces_every_ray() {
        let mut set = generate_rays(10, 20, 64);
        set.regenerate(300, 400);
        assert_eq!(set.len(), 64);
        assert!(set.as_slice().iter().all(|r| r.x_start == 300 && r.y_start == 400));
        assert_eq!(set.as_slice(), generate_rays(300, 400, 64).as_slice());
    }

    #[test]
    fn test_empty_set_has_no_origin() {
        let set = generate_rays(1, 1, 0);
        assert!(set.is_empty());
        assert_eq!(set.origin(), None);
    }
}
