//! Frame renderer: projects one ray per pixel through a pinhole camera and
//! fills an RGB byte framebuffer in parallel.

use glam::Vec3A;
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use thiserror::Error;

use crate::ray::Ray;
use crate::scene::{Scene, SceneError};
use crate::shading::clamp01;
use crate::tracer::trace;

/// Final rendered frame: tightly packed RGB bytes, row-major from the
/// top-left corner.
pub type FrameBuffer = RgbImage;

/// Per-frame settings independent of scene content.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Maximum number of ray segments per pixel (recursion depth limit)
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: 60.0,
            max_depth: 3,
        }
    }
}

/// Render failures, all reported before any pixel work starts.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Width and height must both be non-zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested image width
        width: u32,
        /// Requested image height
        height: u32,
    },

    /// A scene parameter failed validation.
    #[error("invalid scene parameter: {0}")]
    InvalidScene(#[from] SceneError),
}

/// Render the scene into a fresh framebuffer.
///
/// Validates the dimensions and the scene first, then traces one ray per
/// pixel through a pinhole camera looking along +z, in parallel across the
/// rayon thread pool. Blocks until the frame is complete; the returned
/// buffer is always fully written.
pub fn render_scene(scene: &Scene, settings: &RenderSettings) -> Result<FrameBuffer, RenderError> {
    if settings.width == 0 || settings.height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: settings.width,
            height: settings.height,
        });
    }
    scene.validate()?;

    let width = settings.width as f32;
    let height = settings.height as f32;
    let aspect = width / height;
    let half_tan = (settings.fov.to_radians() / 2.0).tan();

    let mut image: FrameBuffer = RgbImage::new(settings.width, settings.height);

    info!(
        "Rendering {}x{} using {} CPU cores...",
        settings.width,
        settings.height,
        rayon::current_num_threads()
    );
    let render_start = std::time::Instant::now();
    let pb = ProgressBar::new((settings.width * settings.height) as u64);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

    // Parallel pixel processing using Rayon, one primary ray per pixel
    image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
        // Map the pixel center onto the view plane at z=1; y runs downward
        // in image space, upward in screen space
        let screen_x = (2.0 * (x as f32 + 0.5) / width - 1.0) * half_tan * aspect;
        let screen_y = (1.0 - 2.0 * (y as f32 + 0.5) / height) * half_tan;

        let ray = Ray::new(scene.camera, Vec3A::new(screen_x, screen_y, 1.0));
        let color = clamp01(trace(scene, &ray, settings.max_depth)) * 255.0;
        *pixel = Rgb([
            color.x.round() as u8,
            color.y.round() as u8,
            color.z.round() as u8,
        ]);
        pb.inc(1);
    });

    pb.finish();
    info!("Frame rendered in {:.2?}", render_start.elapsed());

    Ok(image)
}
