//! Infinite checkerboard floor primitive.
//!
//! A horizontal plane y = height with a procedural two-tone checker pattern.
//! The plane has a single analytic intersection, guarded against rays that
//! travel parallel to it.

use crate::hittable::{Color, HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use glam::Vec3A;

/// Rays with |direction.y| below this are treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Infinite horizontal plane with checkerboard coloring and Phong surface attributes.
#[derive(Debug, Clone)]
pub struct Floor {
    /// World-space y coordinate of the plane.
    pub height: f32,

    /// Base surface color; alternate tiles use half of it.
    pub color: Color,

    /// Phong specular exponent (0 disables highlights).
    pub specular: f32,

    /// Mirror reflectivity in [0.0, 1.0].
    pub reflectivity: f32,

    /// Edge length of one checker tile in world units.
    ///
    /// Must be positive; [`Scene::validate`](crate::scene::Scene::validate)
    /// rejects anything else before a render starts.
    pub tile_size: f32,
}

impl Floor {
    /// Create a new floor plane.
    pub fn new(height: f32, color: Color, specular: f32, reflectivity: f32, tile_size: f32) -> Self {
        Self {
            height,
            color,
            specular,
            reflectivity,
            tile_size,
        }
    }

    /// Resolve the checker color at a point on the plane.
    ///
    /// Tiles are indexed by flooring x and z against the tile size; tiles
    /// whose index sum is even keep the base color, odd tiles are darkened
    /// to half. Euclidean parity keeps the pattern consistent across
    /// negative coordinates.
    pub fn checker_color(&self, point: Vec3A) -> Color {
        let xi = (point.x / self.tile_size).floor() as i64;
        let zi = (point.z / self.tile_size).floor() as i64;
        if (xi + zi).rem_euclid(2) == 0 {
            self.color
        } else {
            self.color * 0.5
        }
    }
}

impl Hittable for Floor {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        if ray.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin.y - self.height) / ray.direction.y;
        if !t_range.surrounds(t) {
            return None;
        }

        let point = ray.at(t);
        Some(HitRecord {
            t,
            point,
            // Fixed upward normal, also for rays arriving from below
            normal: Vec3A::Y,
            color: self.checker_color(point),
            specular: self.specular,
            reflectivity: self.reflectivity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey_floor() -> Floor {
        Floor::new(-1.0, Color::new(0.5, 0.5, 0.5), 10.0, 0.1, 1.0)
    }

    fn full_range() -> Interval {
        Interval::new(0.0, f32::INFINITY)
    }

    #[test]
    fn test_floor_hit_straight_down() {
        let floor = grey_floor();
        let ray = Ray::new(Vec3A::new(0.0, 2.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let hit = floor.hit(&ray, full_range()).unwrap();
        assert!((hit.t - 3.0).abs() < 0.001);
        assert!((hit.point.y + 1.0).abs() < 0.001);
        assert_eq!(hit.normal, Vec3A::Y);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let floor = grey_floor();
        let ray = Ray::new(Vec3A::new(0.0, 2.0, 0.0), Vec3A::new(1.0, 0.0, 0.0));
        assert!(floor.hit(&ray, full_range()).is_none());

        // Also when traveling exactly in the plane itself
        let in_plane = Ray::new(Vec3A::new(0.0, -1.0, 0.0), Vec3A::new(1.0, 0.0, 0.0));
        assert!(floor.hit(&in_plane, full_range()).is_none());
    }

    #[test]
    fn test_floor_behind_origin_misses() {
        let floor = grey_floor();
        let ray = Ray::new(Vec3A::new(0.0, 2.0, 0.0), Vec3A::new(0.0, 1.0, 0.0));
        assert!(floor.hit(&ray, full_range()).is_none());
    }

    #[test]
    fn test_hit_from_below_keeps_upward_normal() {
        let floor = grey_floor();
        let ray = Ray::new(Vec3A::new(0.0, -4.0, 0.0), Vec3A::new(0.0, 1.0, 0.0));
        let hit = floor.hit(&ray, full_range()).unwrap();
        assert!((hit.t - 3.0).abs() < 0.001);
        assert_eq!(hit.normal, Vec3A::Y);
    }

    #[test]
    fn test_checker_alternates_between_adjacent_tiles() {
        let floor = grey_floor();
        let a = floor.checker_color(Vec3A::new(0.5, -1.0, 0.5));
        let b = floor.checker_color(Vec3A::new(1.5, -1.0, 0.5));
        assert_eq!(a, Color::new(0.5, 0.5, 0.5));
        assert_eq!(b, Color::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_checker_parity_across_negative_coordinates() {
        let floor = grey_floor();
        // Tile indices (-1, 0) and (0, 0) differ in parity
        let negative = floor.checker_color(Vec3A::new(-0.5, -1.0, 0.5));
        let origin = floor.checker_color(Vec3A::new(0.5, -1.0, 0.5));
        assert_ne!(negative, origin);
        // (-1, -1) sums to an even index again
        let diagonal = floor.checker_color(Vec3A::new(-0.5, -1.0, -0.5));
        assert_eq!(diagonal, origin);
    }

    #[test]
    fn test_tile_size_scales_pattern() {
        let mut floor = grey_floor();
        floor.tile_size = 2.0;
        let a = floor.checker_color(Vec3A::new(0.5, -1.0, 0.5));
        let b = floor.checker_color(Vec3A::new(1.5, -1.0, 0.5));
        assert_eq!(a, b);
        let c = floor.checker_color(Vec3A::new(2.5, -1.0, 0.5));
        assert_ne!(a, c);
    }
}
