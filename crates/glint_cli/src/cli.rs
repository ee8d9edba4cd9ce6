use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{presets::SHOWCASE_FOV, RenderConfig, DEFAULT_BUCKET_SIZE};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render the Glint showcase scene with a Whitted-style ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Maximum reflection depth
    #[arg(long, short = 'd', default_value_t = 4)]
    pub max_depth: u32,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = SHOWCASE_FOV)]
    pub fov: f64,

    /// Worker threads, 0 lets rayon decide
    #[arg(long, short = 'j', default_value_t = 0)]
    pub threads: usize,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_max_depth(self.max_depth)
            .with_bucket_size(self.bucket_size)
    }
}
