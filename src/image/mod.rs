//! Raster access for fingerprinting and matching.
//!
//! The matcher only needs dimensions and per-pixel colors, expressed by the
//! [`Raster`] trait. `ImageView` is a borrowed 2D view into a 1D buffer with an
//! explicit stride; the stride counts elements between the starts of
//! consecutive rows, so a stride larger than the width represents padded rows.
//! ROI slices are zero-copy views into the same backing slice and retain the
//! original stride. `OwnedImage` is the contiguous owned counterpart.

use crate::util::{FingerMatchError, FingerMatchResult};

mod color;
#[cfg(feature = "image-io")]
pub mod io;

pub use color::Color;

/// Read-only pixel grid consumed by the fingerprint builder and matcher.
pub trait Raster {
    /// Image width in pixels.
    fn width(&self) -> usize;

    /// Image height in pixels.
    fn height(&self) -> usize;

    /// Color at `(x, y)`, or `None` outside the image.
    fn color_at(&self, x: usize, y: usize) -> Option<Color>;

    /// Returns `(width, height)`.
    fn bounds(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}

impl<R: Raster + ?Sized> Raster for &R {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        (**self).color_at(x, y)
    }
}

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> FingerMatchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> FingerMatchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(FingerMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> FingerMatchResult<ImageView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(FingerMatchError::InvalidDimensions { width, height });
        }

        let out_of_bounds = FingerMatchError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(FingerMatchError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(FingerMatchError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.stride)
    }
}

impl Raster for ImageView<'_, Color> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.get(x, y).copied()
    }
}

/// Owned contiguous color image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImage {
    data: Vec<Color>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major color buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<Color>, width: usize, height: usize) -> FingerMatchResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() != needed {
            return Err(FingerMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> FingerMatchResult<Self>
    where
        F: FnMut(usize, usize) -> Color,
    {
        let needed = required_len(width, height, width)?;
        let mut data = Vec::with_capacity(needed);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(data, width, height)
    }

    /// Converts interleaved 8-bit RGBA samples (exactly four per pixel).
    pub fn from_rgba8(raw: &[u8], width: usize, height: usize) -> FingerMatchResult<Self> {
        check_samples(raw.len(), width, height)?;
        let data = raw
            .chunks_exact(4)
            .map(|px| Color::from_rgba8(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(data, width, height)
    }

    /// Converts interleaved 16-bit RGBA samples (exactly four per pixel).
    pub fn from_rgba16(raw: &[u16], width: usize, height: usize) -> FingerMatchResult<Self> {
        check_samples(raw.len(), width, height)?;
        let data = raw
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(data, width, height)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a borrowed view of the whole image.
    pub fn view(&self) -> ImageView<'_, Color> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

impl Raster for OwnedImage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> FingerMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(FingerMatchError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(FingerMatchError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(FingerMatchError::InvalidDimensions { width, height })?;
    Ok(needed)
}

fn check_samples(got: usize, width: usize, height: usize) -> FingerMatchResult<()> {
    let needed = required_len(width, height, width)?
        .checked_mul(4)
        .ok_or(FingerMatchError::InvalidDimensions { width, height })?;
    if got != needed {
        return Err(FingerMatchError::BufferTooSmall { needed, got });
    }
    Ok(())
}
