//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// This represents the ray's origin, typically the camera position for
    /// primary rays or an offset surface point for reflection rays.
    pub origin: Vec3A,

    /// Direction vector of the ray, normalized at construction.
    ///
    /// A unit direction keeps t equal to world-space distance, so intersection
    /// results from different primitives compare directly. A degenerate input
    /// direction collapses to the zero vector, which intersects nothing.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    ///
    /// The direction is normalized exactly once here. Near-zero directions
    /// become the zero vector rather than NaN, so such rays simply miss.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

/// Reflect a vector off a surface using the law of reflection.
///
/// Expects a unit surface normal. The mirrored vector satisfies
/// dot(reflect(v, n), n) == -dot(v, n).
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, 2.0));
        let p = ray.at(5.0);
        assert!((p.x - 1.0).abs() < 0.001);
        assert!((p.y - 2.0).abs() < 0.001);
        assert!((p.z - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(3.0, -4.0, 12.0));
        assert!((ray.direction.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_direction_becomes_zero() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::ZERO);
        assert_eq!(ray.direction, Vec3A::ZERO);

        let tiny = Ray::new(Vec3A::ZERO, Vec3A::splat(1e-30));
        assert_eq!(tiny.direction, Vec3A::ZERO);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3A::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let r = reflect(v, n);
        assert!((r.dot(n) + v.dot(n)).abs() < 0.001);
        assert!((r.x - v.x).abs() < 0.001);
        assert!((r.y + v.y).abs() < 0.001);
    }

    #[test]
    fn test_reflect_head_on() {
        let r = reflect(Vec3A::new(0.0, 0.0, 1.0), Vec3A::new(0.0, 0.0, -1.0));
        assert!((r.z + 1.0).abs() < 0.001);
    }
}
