//! Errors raised when setting up a render or writing its output.
//!
//! Tracing itself cannot fail; these only come from the render entry point
//! and image export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image must have non-zero dimensions, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Bucket size must be at least one pixel")]
    InvalidBucketSize,

    #[error("Field of view must be finite and within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
