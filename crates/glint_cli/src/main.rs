use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use glint_math::DVec3;
use glint_renderer::{generate_buckets, presets, Camera, Renderer};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting Glint {}", env!("CARGO_PKG_VERSION"));

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let scene = presets::showcase_scene();
    let camera = Camera::new(DVec3::ZERO, DVec3::NEG_Z, args.fov);
    let config = args.render_config();

    let renderer = Renderer::new(&scene, &camera, config).context("Invalid render settings")?;
    let config = renderer.config();
    log::debug!("Render settings: {:?}, fov {}", config, camera.fov());

    let total = generate_buckets(config.width, config.height, config.bucket_size).len();
    let done = AtomicUsize::new(0);
    let image = renderer.render_with_progress(|result| {
        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        log::debug!(
            "Bucket {} at ({}, {}) done [{}/{}]",
            result.bucket.index,
            result.bucket.x,
            result.bucket.y,
            finished,
            total
        );
    });

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
