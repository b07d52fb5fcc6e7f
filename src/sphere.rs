//! Sphere primitive for ray tracing.
//!
//! Implements efficient ray-sphere intersection using an optimized quadratic formula.

use crate::hittable::{Color, HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use glam::Vec3A;

/// Sphere primitive defined by center, radius, and Phong surface attributes.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere.
    ///
    /// Must be positive; [`Scene::validate`](crate::scene::Scene::validate)
    /// rejects anything else before a render starts.
    pub radius: f32,

    /// Surface color.
    pub color: Color,

    /// Phong specular exponent (0 disables highlights).
    pub specular: f32,

    /// Mirror reflectivity in [0.0, 1.0].
    pub reflectivity: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, color: Color, specular: f32, reflectivity: f32) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
            reflectivity,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        // Vector from ray origin to sphere center
        let oc = self.center - ray.origin;

        // Optimized quadratic equation coefficients
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(HitRecord {
            t: root,
            point,
            // Outward normal, never flipped toward the ray
            normal: (point - self.center) / self.radius,
            color: self.color,
            specular: self.specular,
            reflectivity: self.reflectivity,
        })
    }
}
