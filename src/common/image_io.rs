//! # Image File I/O
//!
//! Thin wrappers around the `image` crate. Every image is decoded fully into memory
//! and coerced to 8-bit RGB; alpha and palette information is dropped. Output is
//! always written as PNG, whatever the input format was.

use std::path::Path;

use image::{GenericImageView, ImageFormat, RgbImage};
use log::debug;

use crate::error::{Error, Result};

/// Open an image and convert it to 8-bit RGB.
///
/// # Errors
/// Returns [`Error::ImageLoad`] if the file is missing or cannot be decoded.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        width,
        height,
        img.color()
    );

    Ok(img.to_rgb8())
}

/// Encode `img` as PNG at `path`, regardless of the path's extension.
///
/// # Errors
/// Returns [`Error::ImageSave`] if the file cannot be written or encoded.
pub fn save_png<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {}", path.display());
    Ok(())
}
