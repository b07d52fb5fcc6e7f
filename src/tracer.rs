//! Recursive Whitted tracer.
//!
//! Follows a ray into the scene, shades the nearest hit locally, and blends
//! in a mirror reflection up to a fixed recursion depth. Rays that miss
//! everything return the black background.

use crate::hittable::{Color, Hittable};
use crate::interval::Interval;
use crate::ray::{reflect, Ray};
use crate::scene::Scene;
use crate::shading::shade;

/// Offset along the surface normal for reflection ray origins, keeping them
/// clear of the surface they just left.
const SELF_INTERSECT_OFFSET: f32 = 1e-4;

/// Trace a ray through the scene and return its color.
///
/// `depth` counts the remaining ray segments: 0 returns black immediately,
/// 1 allows the primary hit with no reflection, each further level allows
/// one more mirror bounce. Surfaces with zero reflectivity never recurse.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.hit(ray, Interval::new(0.0, f32::INFINITY)) else {
        return Color::ZERO;
    };

    // Ray directions are unit vectors, so the view direction is just the reverse
    let view_dir = -ray.direction;
    let local = shade(&hit, view_dir, &scene.light, scene.ambient);

    if hit.reflectivity > 0.0 {
        let bounced = Ray::new(
            hit.point + hit.normal * SELF_INTERSECT_OFFSET,
            reflect(ray.direction, hit.normal),
        );
        let reflected = trace(scene, &bounced, depth - 1);
        local * (1.0 - hit.reflectivity) + reflected * hit.reflectivity
    } else {
        local
    }
}
