//! Scene description: camera position, point light, and the two primitives.
//!
//! The scene is plain immutable data during a render; the render call holds a
//! shared borrow for its whole duration, so nothing can mutate it mid-frame.

use crate::floor::Floor;
use crate::hittable::{Color, HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use glam::Vec3A;
use thiserror::Error;

/// Point light source.
#[derive(Debug, Clone)]
pub struct Light {
    /// Position of the light in world coordinates.
    pub position: Vec3A,

    /// RGB color of the light.
    ///
    /// Scales the diffuse and specular contributions per channel; the
    /// default white light leaves them untouched.
    pub color: Color,
}

/// Complete description of the renderable world.
///
/// One sphere floating above an infinite checkerboard floor, lit by a single
/// point light. The camera is a position only; the view axis is fixed to +z.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Camera position in world coordinates (eye point of all primary rays).
    pub camera: Vec3A,

    /// The single point light.
    pub light: Light,

    /// Ambient light intensity in [0.0, 1.0], applied to every surface.
    pub ambient: f32,

    /// The sphere primitive.
    pub sphere: Sphere,

    /// The floor primitive.
    pub floor: Floor,
}

/// Scene parameter violations caught before any pixel work starts.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Sphere radius must be a positive number.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    /// Specular exponents must be non-negative numbers.
    #[error("specular exponent must be non-negative, got {0}")]
    InvalidSpecular(f32),

    /// Reflectivity values must stay within the blend range.
    #[error("reflectivity must be within [0, 1], got {0}")]
    InvalidReflectivity(f32),

    /// The checker tile size must be a positive number.
    #[error("floor tile size must be positive, got {0}")]
    InvalidTileSize(f32),

    /// Ambient intensity must stay within [0, 1].
    #[error("ambient intensity must be within [0, 1], got {0}")]
    InvalidAmbient(f32),
}

impl Scene {
    /// Check every numeric scene parameter against its allowed range.
    ///
    /// NaN fails the same checks as any out-of-range value.
    pub fn validate(&self) -> Result<(), SceneError> {
        let radius = self.sphere.radius;
        if radius.is_nan() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        for specular in [self.sphere.specular, self.floor.specular] {
            if specular.is_nan() || specular < 0.0 {
                return Err(SceneError::InvalidSpecular(specular));
            }
        }
        for reflectivity in [self.sphere.reflectivity, self.floor.reflectivity] {
            if !(0.0..=1.0).contains(&reflectivity) {
                return Err(SceneError::InvalidReflectivity(reflectivity));
            }
        }
        let tile_size = self.floor.tile_size;
        if tile_size.is_nan() || tile_size <= 0.0 {
            return Err(SceneError::InvalidTileSize(tile_size));
        }
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(SceneError::InvalidAmbient(self.ambient));
        }
        Ok(())
    }
}

impl Default for Scene {
    /// The classic demo setup: a red-ish shiny sphere resting over a grey
    /// checkerboard, lit by a white light up on the right.
    fn default() -> Self {
        Self {
            camera: Vec3A::new(0.0, 2.0, -6.0),
            light: Light {
                position: Vec3A::new(5.0, 5.0, -5.0),
                color: Color::ONE,
            },
            ambient: 0.1,
            sphere: Sphere::new(Vec3A::ZERO, 1.0, Color::new(0.7, 0.3, 0.3), 50.0, 0.3),
            floor: Floor::new(-1.0, Color::new(0.5, 0.5, 0.5), 10.0, 0.1, 1.0),
        }
    }
}

impl Hittable for Scene {
    /// Nearest hit over both primitives.
    ///
    /// The floor is tested against a range shrunk to the sphere's hit, so it
    /// displaces the sphere only when strictly nearer.
    fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord> {
        let mut closest = self.sphere.hit(ray, t_range);
        let max = closest.as_ref().map_or(t_range.max, |hit| hit.t);
        if let Some(hit) = self.floor.hit(ray, Interval::new(t_range.min, max)) {
            closest = Some(hit);
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_range() -> Interval {
        Interval::new(0.0, f32::INFINITY)
    }

    #[test]
    fn test_default_scene_validates() {
        assert!(Scene::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let mut scene = Scene::default();
        scene.sphere.radius = 0.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRadius(_))
        ));
        scene.sphere.radius = f32::NAN;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_specular() {
        let mut scene = Scene::default();
        scene.floor.specular = -1.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidSpecular(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_reflectivity() {
        let mut scene = Scene::default();
        scene.sphere.reflectivity = 1.5;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidReflectivity(_))
        ));
        scene.sphere.reflectivity = f32::NAN;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidReflectivity(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_tile_size() {
        let mut scene = Scene::default();
        scene.floor.tile_size = -2.0;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidTileSize(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ambient() {
        let mut scene = Scene::default();
        scene.ambient = 1.1;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidAmbient(_))
        ));
    }

    #[test]
    fn test_sphere_occludes_floor() {
        let scene = Scene::default();
        // Straight down through the sphere: sphere top at t=4, floor at t=6
        let ray = Ray::new(Vec3A::new(0.0, 5.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let hit = scene.hit(&ray, full_range()).unwrap();
        assert!((hit.t - 4.0).abs() < 0.001);
        assert_eq!(hit.color, scene.sphere.color);
    }

    #[test]
    fn test_floor_wins_when_nearer() {
        let scene = Scene::default();
        let ray = Ray::new(Vec3A::new(3.0, 2.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let hit = scene.hit(&ray, full_range()).unwrap();
        assert!((hit.t - 3.0).abs() < 0.001);
        assert_eq!(hit.normal, Vec3A::Y);
    }

    #[test]
    fn test_sphere_wins_exact_tie() {
        let scene = Scene::default();
        // From the sphere's top straight down: the t=0 entry root is excluded
        // and both the sphere exit and the floor sit exactly at t=2
        let ray = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let hit = scene.hit(&ray, full_range()).unwrap();
        assert!((hit.t - 2.0).abs() < 0.001);
        assert_eq!(hit.color, scene.sphere.color);
        assert!((hit.normal.y + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_miss_above_horizon() {
        let scene = Scene::default();
        let ray = Ray::new(Vec3A::new(0.0, 5.0, 0.0), Vec3A::new(0.0, 1.0, 0.0));
        assert!(scene.hit(&ray, full_range()).is_none());
    }
}
