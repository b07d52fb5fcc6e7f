//! Phong local illumination.
//!
//! Computes the local surface color at a hit point from three terms:
//! a constant ambient floor, Lambertian diffuse, and a Phong specular
//! highlight. There are no shadow rays; every surface sees the light.

use crate::hittable::{Color, HitRecord};
use crate::ray::reflect;
use crate::scene::Light;
use glam::Vec3A;

/// Shade a hit point under a single point light.
///
/// `view_dir` is the unit vector from the hit point back toward the ray
/// origin. The diffuse and specular terms are scaled by the light color;
/// the specular term is skipped entirely when the surface exponent is 0.
/// The result is the surface color times the accumulated intensity,
/// clamped per channel to [0.0, 1.0].
pub fn shade(hit: &HitRecord, view_dir: Vec3A, light: &Light, ambient: f32) -> Color {
    let light_dir = (light.position - hit.point).normalize();

    let mut intensity = Vec3A::splat(ambient);

    let diffuse = hit.normal.dot(light_dir).max(0.0);
    intensity += diffuse * light.color;

    if hit.specular > 0.0 {
        let reflect_dir = reflect(-light_dir, hit.normal);
        let highlight = reflect_dir.dot(view_dir).max(0.0).powf(hit.specular);
        intensity += 0.5 * highlight * light.color;
    }

    clamp01(hit.color * intensity)
}

/// Clamp a color to [0.0, 1.0] per channel, with NaN degrading to black.
///
/// f32::clamp would propagate NaN, so the check is explicit. Infinities
/// saturate to 1.0.
pub fn clamp01(color: Color) -> Color {
    fn channel(value: f32) -> f32 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
    Color::new(channel(color.x), channel(color.y), channel(color.z))
}
