//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! Renders a static scene of spheres and planes lit by point lights:
//! Phong shading, hard shadows and recursive mirror reflection.
//!
//! # Example
//!
//! ```no_run
//! use glint_renderer::{presets, Renderer, RenderConfig};
//!
//! let scene = presets::showcase_scene();
//! let camera = presets::showcase_camera();
//! let renderer = Renderer::new(&scene, &camera, RenderConfig::default())?;
//! renderer.render().save_png("render.png")?;
//! # Ok::<(), glint_renderer::RenderError>(())
//! ```

mod bucket;
mod camera;
mod error;
mod hittable;
mod light;
mod material;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub mod presets;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, Intersection, Shape};
pub use light::PointLight;
pub use material::Material;
pub use plane::Plane;
pub use renderer::{render, ImageBuffer, RenderConfig, Renderer};
pub use scene::{Scene, DEFAULT_AMBIENT};
pub use shading::{shade, sky_gradient, trace_ray};
pub use sphere::Sphere;

/// Re-export common math types from glint_math
pub use glint_math::{Color, DVec3, Interval, Ray, EPSILON};
