//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data used by the shading and reflection passes.

use crate::interval::Interval;
use crate::ray::Ray;
use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are linear-light values, nominally in [0.0, 1.0].
pub type Color = Vec3A;

/// Ray-object intersection information.
///
/// Contains the intersection point, the outward surface normal and the
/// surface attributes of the primitive that was hit, resolved at the hit
/// point (the floor resolves its checker color here).
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the object
    pub point: Vec3A,
    /// Outward surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Surface color at the intersection point
    pub color: Color,
    /// Phong specular exponent of the surface (0 disables highlights)
    pub specular: f32,
    /// Mirror reflectivity of the surface in [0.0, 1.0]
    pub reflectivity: f32,
}

/// Trait for objects that can be intersected by rays.
///
/// Core abstraction for geometric primitives. Must be thread-safe
/// (Sync + Send) for parallel rendering.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns the nearest intersection with t inside the open range, or
    /// None if the ray misses.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord>;
}
