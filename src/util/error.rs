//! Error types for fingermatch.

use thiserror::Error;

/// Result alias for fingermatch operations.
pub type FingerMatchResult<T> = std::result::Result<T, FingerMatchError>;

/// Errors that can occur when constructing images or fingerprints.
///
/// Not finding a template is never an error; matchers report it as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerMatchError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer is shorter than the view requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Requested region does not fit inside the image.
    #[error("roi ({x}, {y}, {width}x{height}) out of bounds for {img_width}x{img_height} image")]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// A fingerprint point lies outside its template.
    #[error("point ({x}, {y}) outside {width}x{height} template")]
    PointOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Decoding or encoding through the `image` crate failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
