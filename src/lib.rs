//! Whitted-style ray tracer
//!
//! Renders a fixed scene (one sphere floating above an infinite checkerboard
//! floor, lit by a single point light) with Phong local illumination and
//! recursive mirror reflections. The renderer is a pure function from scene
//! and settings to an RGB byte framebuffer; output formats and viewers live
//! in the binary.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod interval;
pub mod hittable;
pub mod sphere;
pub mod floor;
pub mod scene;
pub mod shading;
pub mod tracer;
pub mod renderer;
