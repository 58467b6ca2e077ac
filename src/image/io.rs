//! Convenience helpers for decoding and writing images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Every decoded image is
//! widened to 16-bit RGBA before it reaches the matcher.

use crate::image::OwnedImage;
use crate::search::Rect;
use crate::util::{FingerMatchError, FingerMatchResult};
use std::path::Path;

/// Creates an owned image from a dynamic image of any pixel format.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> FingerMatchResult<OwnedImage> {
    let rgba = img.to_rgba16();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    OwnedImage::from_rgba16(rgba.as_raw(), width, height)
}

/// Decodes PNG or JPEG bytes into an owned image.
pub fn decode_image(bytes: &[u8]) -> FingerMatchResult<OwnedImage> {
    let img = image::load_from_memory(bytes).map_err(io_error)?;
    owned_from_dynamic_image(&img)
}

/// Opens an image file without converting it.
pub fn open_dynamic<P: AsRef<Path>>(path: P) -> FingerMatchResult<image::DynamicImage> {
    image::open(path).map_err(io_error)
}

/// Loads an image from disk and converts it to an owned 16-bit image.
pub fn load_image<P: AsRef<Path>>(path: P) -> FingerMatchResult<OwnedImage> {
    let img = open_dynamic(path)?;
    owned_from_dynamic_image(&img)
}

/// Writes the region `rect` of `img` to `path`; the format follows the extension.
pub fn save_region<P: AsRef<Path>>(
    img: &image::DynamicImage,
    rect: Rect,
    path: P,
) -> FingerMatchResult<()> {
    let img_width = img.width() as usize;
    let img_height = img.height() as usize;
    if !rect.is_ordered()
        || rect.x1 > img_width
        || rect.y1 > img_height
        || rect.width() == 0
        || rect.height() == 0
    {
        return Err(FingerMatchError::RoiOutOfBounds {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            img_width,
            img_height,
        });
    }
    let region = img.crop_imm(
        rect.x0 as u32,
        rect.y0 as u32,
        rect.width() as u32,
        rect.height() as u32,
    );
    region.save(path).map_err(io_error)
}

fn io_error(err: image::ImageError) -> FingerMatchError {
    FingerMatchError::ImageIo {
        reason: err.to_string(),
    }
}
