//! Render entry point.
//!
//! Maps every pixel to a primary ray, traces it, and collects the colors
//! into an [`ImageBuffer`]. Buckets are rendered in parallel with rayon.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::error::{RenderError, RenderResult};
use crate::{trace_ray, Camera, Color, Scene};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum reflection depth; primary rays are traced with this depth
    pub max_depth: u32,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_depth: 4,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum reflection depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Check that this configuration describes a renderable image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidBucketSize);
        }
        Ok(())
    }
}

/// Grid of linear colors, row-major, `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copy a rendered bucket into place.
    ///
    /// Parts of the bucket outside the image are dropped.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        if bucket.x >= self.width || bucket.y >= self.height {
            return;
        }

        let visible = bucket.width.min(self.width - bucket.x) as usize;
        let rows = result.pixels.chunks_exact(bucket.width.max(1) as usize);
        for (y, row) in (bucket.y..self.height).take(bucket.height as usize).zip(rows) {
            let start = self.offset(bucket.x, y);
            self.pixels[start..start + visible].copy_from_slice(&row[..visible]);
        }
    }

    /// Convert to RGBA bytes.
    ///
    /// Channels are clamped and truncated to 8 bits; alpha is always opaque.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let rgba: Vec<[u8; 4]> = self.pixels.iter().map(|c| c.to_rgba8()).collect();
        bytemuck::cast_slice(&rgba).to_vec()
    }

    /// Write the image to `path` as an 8-bit RGBA PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let rgba = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8())
            .ok_or(RenderError::BufferSize {
                width: self.width,
                height: self.height,
            })?;
        rgba.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Renders one scene through one camera.
///
/// Construction validates the configuration; after that every operation is
/// infallible. Both the scene and the camera are only borrowed immutably, so
/// pixels can be computed in any order or in parallel.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    config: RenderConfig,
}

impl<'a> Renderer<'a> {
    /// Create a renderer, rejecting configurations that cannot produce an image.
    pub fn new(scene: &'a Scene, camera: &'a Camera, config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;

        let fov = camera.fov();
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(RenderError::InvalidFieldOfView(fov));
        }

        log::debug!(
            "Renderer ready: {} shapes, {} lights, {}x{}",
            scene.len(),
            scene.lights().len(),
            config.width,
            config.height
        );

        Ok(Self { scene, camera, config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Trace the primary ray through pixel (x, y).
    ///
    /// Pixel (x, y) maps to `u = x / (width - 1)` and `v = y / (height - 1)`,
    /// so the first and last columns sit exactly on the image-plane edges.
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let u = image_coord(x, self.config.width);
        let v = image_coord(y, self.config.height);

        let ray = self.camera.generate_ray(u, v, self.config.aspect_ratio());
        trace_ray(self.scene, &ray, self.config.max_depth)
    }

    /// Render the entire image.
    pub fn render(&self) -> ImageBuffer {
        self.render_with_progress(|_| {})
    }

    /// Render the entire image, calling `on_bucket` as each bucket finishes.
    ///
    /// Buckets finish in no particular order and the callback may run on any
    /// rayon worker thread.
    pub fn render_with_progress<F>(&self, on_bucket: F) -> ImageBuffer
    where
        F: Fn(&BucketResult) + Sync,
    {
        let RenderConfig {
            width,
            height,
            max_depth,
            bucket_size,
        } = self.config;

        let start = Instant::now();
        let buckets = generate_buckets(width, height, bucket_size);
        log::info!(
            "Rendering {}x{} in {} buckets, max depth {}",
            width,
            height,
            buckets.len(),
            max_depth
        );

        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| {
                let result = render_bucket(bucket, self);
                on_bucket(&result);
                result
            })
            .collect();

        let mut image = ImageBuffer::new(width, height);
        for result in &results {
            image.write_bucket(result);
        }

        log::info!("Rendered in {:?}", start.elapsed());
        image
    }

    /// Render the entire image on the calling thread, row by row.
    pub fn render_sequential(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.config.width, self.config.height);

        for y in 0..self.config.height {
            for x in 0..self.config.width {
                image.set(x, y, self.render_pixel(x, y));
            }
        }

        image
    }
}

/// Normalized image-plane coordinate of pixel `i` along an axis of `extent`.
///
/// A one-pixel axis has no span to divide, so it samples the center.
#[inline]
fn image_coord(i: u32, extent: u32) -> f64 {
    if extent > 1 {
        i as f64 / (extent - 1) as f64
    } else {
        0.5
    }
}

/// Render the scene to an image buffer.
pub fn render(scene: &Scene, camera: &Camera, config: RenderConfig) -> RenderResult<ImageBuffer> {
    Ok(Renderer::new(scene, camera, config)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presets, Material, PointLight, Sphere};
    use glint_math::DVec3;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small_config() -> RenderConfig {
        RenderConfig::default()
            .with_resolution(24, 18)
            .with_bucket_size(7)
    }

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.bucket_size, DEFAULT_BUCKET_SIZE);
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_empty_image() {
        let scene = Scene::new();
        let camera = presets::showcase_camera();

        let err = Renderer::new(&scene, &camera, RenderConfig::default().with_resolution(0, 10))
            .unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { width: 0, height: 10 }));

        let err = render(&scene, &camera, RenderConfig::default().with_resolution(10, 0))
            .unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { .. }));
    }

    #[test]
    fn test_rejects_zero_bucket_size() {
        let scene = Scene::new();
        let camera = presets::showcase_camera();
        let config = RenderConfig::default().with_bucket_size(0);

        assert!(matches!(
            Renderer::new(&scene, &camera, config),
            Err(RenderError::InvalidBucketSize)
        ));
    }

    #[test]
    fn test_rejects_bad_field_of_view() {
        let scene = Scene::new();
        for fov in [0.0, -10.0, 180.0, f64::NAN, f64::INFINITY] {
            let camera = Camera::new(DVec3::ZERO, DVec3::NEG_Z, fov);
            let result = Renderer::new(&scene, &camera, small_config());
            assert!(matches!(result, Err(RenderError::InvalidFieldOfView(_))));
        }
    }

    #[test]
    fn test_image_coord() {
        assert_eq!(image_coord(0, 800), 0.0);
        assert_eq!(image_coord(799, 800), 1.0);
        assert_eq!(image_coord(0, 1), 0.5);
    }

    #[test]
    fn test_empty_scene_renders_sky() {
        let scene = Scene::new();
        let camera = Camera::new(DVec3::ZERO, DVec3::NEG_Z, 90.0);
        let image = render(&scene, &camera, small_config()).expect("valid config");

        assert_eq!(image.pixels.len(), 24 * 18);
        // Top row looks up, bottom row looks down
        let top = image.get(12, 0);
        let bottom = image.get(12, 17);
        assert!(top.r < bottom.r);
        assert!(top.b >= bottom.b);
    }

    #[test]
    fn test_render_pixel_hits_sphere_at_center() {
        let material = Material::matte(Color::new(1.0, 0.0, 0.0));
        let mut scene = Scene::new();
        scene.add(Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, material));

        let camera = Camera::new(DVec3::ZERO, DVec3::NEG_Z, 60.0);
        // Odd dimensions put a pixel exactly on the image-plane center
        let config = RenderConfig::default().with_resolution(11, 11);
        let renderer = Renderer::new(&scene, &camera, config).expect("valid config");

        let center = renderer.render_pixel(5, 5);
        assert_eq!(center, material.color * material.ambient * scene.ambient_light());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = presets::showcase_scene();
        let camera = presets::showcase_camera();
        let renderer = Renderer::new(&scene, &camera, small_config()).expect("valid config");

        assert_eq!(renderer.render(), renderer.render_sequential());
    }

    #[test]
    fn test_progress_reports_every_bucket() {
        let scene = presets::showcase_scene();
        let camera = presets::showcase_camera();
        let config = small_config();
        let renderer = Renderer::new(&scene, &camera, config).expect("valid config");

        let buckets = AtomicUsize::new(0);
        let pixels = AtomicUsize::new(0);
        renderer.render_with_progress(|result| {
            buckets.fetch_add(1, Ordering::Relaxed);
            pixels.fetch_add(result.pixels.len(), Ordering::Relaxed);
        });

        let expected = generate_buckets(config.width, config.height, config.bucket_size).len();
        assert_eq!(buckets.load(Ordering::Relaxed), expected);
        assert_eq!(pixels.load(Ordering::Relaxed), 24 * 18);
    }

    #[test]
    fn test_occluded_light_leaves_ambient() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, Material::matte(Color::WHITE)));
        // Light above and in front of the hit point, blocked halfway by a small sphere
        scene.add_light(PointLight::new(DVec3::new(0.0, 4.0, 0.0), Color::WHITE));

        let camera = Camera::new(DVec3::ZERO, DVec3::NEG_Z, 60.0);
        let config = RenderConfig::default().with_resolution(11, 11);

        let lit = Renderer::new(&scene, &camera, config)
            .expect("valid config")
            .render_pixel(5, 5);
        assert!(lit.r > 0.5);

        scene.add(Sphere::new(DVec3::new(0.0, 2.0, -2.0), 0.5, Material::default()));
        let renderer = Renderer::new(&scene, &camera, config).expect("valid config");

        assert_eq!(renderer.render_pixel(5, 5), Color::splat(0.1 * 0.1));
    }

    #[test]
    fn test_image_buffer_access() {
        let mut image = ImageBuffer::new(4, 3);
        assert!(image.pixels.iter().all(|&c| c == Color::BLACK));

        image.set(3, 2, Color::WHITE);
        assert_eq!(image.get(3, 2), Color::WHITE);
        assert_eq!(image.pixels[11], Color::WHITE);
    }

    #[test]
    fn test_write_bucket() {
        let mut image = ImageBuffer::new(4, 4);
        let bucket = crate::Bucket::new(1, 2, 2, 2, 0);
        let pixels = vec![Color::splat(0.1), Color::splat(0.2), Color::splat(0.3), Color::splat(0.4)];
        image.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(image.get(1, 2), Color::splat(0.1));
        assert_eq!(image.get(2, 2), Color::splat(0.2));
        assert_eq!(image.get(1, 3), Color::splat(0.3));
        assert_eq!(image.get(2, 3), Color::splat(0.4));
        assert_eq!(image.get(0, 2), Color::BLACK);
    }

    #[test]
    fn test_write_bucket_clips_to_image() {
        let mut image = ImageBuffer::new(3, 3);
        let bucket = crate::Bucket::new(2, 1, 2, 3, 0);
        let pixels = (1..=6).map(|i| Color::splat(i as f64 / 10.0)).collect();
        image.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(image.get(2, 1), Color::splat(0.1));
        assert_eq!(image.get(2, 2), Color::splat(0.3));
        assert_eq!(image.get(1, 2), Color::BLACK);

        // Entirely outside
        let outside = crate::Bucket::new(5, 0, 2, 2, 1);
        image.write_bucket(&BucketResult::new(outside, vec![Color::WHITE; 4]));
        assert!(image.pixels.iter().all(|&c| c != Color::WHITE));
    }

    #[test]
    fn test_to_rgba8() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.5, 0.0));
        image.set(1, 0, Color::new(2.0, -1.0, 0.999));

        assert_eq!(image.to_rgba8(), vec![255, 127, 0, 255, 255, 0, 254, 255]);
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(1, 1, Color::new(1.0, 0.0, 0.5));

        let path = std::env::temp_dir().join(format!("glint_test_{}.png", std::process::id()));
        image.save_png(&path).expect("png should be written");

        let loaded = image::open(&path).expect("png should load").to_rgba8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 0, 127, 255]);

        let _ = std::fs::remove_file(&path);
    }
}
