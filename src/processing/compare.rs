//! # Image Comparison
//!
//! Exact, pixel-by-pixel equality between two RGB images.
//!
//! Dimensions are compared first; a mismatch short-circuits without scanning any
//! pixels. Otherwise pixels are scanned in row-major order and the first differing
//! pixel is reported. There is no tolerance: every channel must match.

use std::fmt;
use std::path::Path;

use image::RgbImage;
use log::debug;
use serde::Serialize;

use crate::common::image_io;
use crate::error::Result;

/// Result of comparing two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Comparison {
    /// Same dimensions and every pixel matches.
    Identical,
    /// Dimensions differ; no pixels were compared.
    SizeMismatch { left: (u32, u32), right: (u32, u32) },
    /// First differing pixel in row-major order.
    PixelMismatch {
        x: u32,
        y: u32,
        left: [u8; 3],
        right: [u8; 3],
    },
}

impl Comparison {
    pub fn is_identical(&self) -> bool {
        matches!(self, Comparison::Identical)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Identical => write!(f, "Images are the same"),
            Comparison::SizeMismatch { left, right } => write!(
                f,
                "Images are of different sizes ({}x{} vs {}x{})",
                left.0, left.1, right.0, right.1
            ),
            Comparison::PixelMismatch { x, y, left, right } => write!(
                f,
                "Images differ at pixel ({x}, {y}): {left:?} vs {right:?}"
            ),
        }
    }
}

/// Compare two in-memory images.
pub fn compare_buffers(left: &RgbImage, right: &RgbImage) -> Comparison {
    if left.dimensions() != right.dimensions() {
        return Comparison::SizeMismatch {
            left: left.dimensions(),
            right: right.dimensions(),
        };
    }

    left.enumerate_pixels()
        .zip(right.pixels())
        .find(|((_, _, a), b)| a != b)
        .map_or(Comparison::Identical, |((x, y, a), b)| {
            Comparison::PixelMismatch {
                x,
                y,
                left: a.0,
                right: b.0,
            }
        })
}

/// Load two images from disk and compare them.
///
/// # Errors
/// Returns an error if either image cannot be opened or decoded. A size mismatch is
/// not an error; it is reported as [`Comparison::SizeMismatch`].
///
/// # Example
/// ```ignore
/// let outcome = compare_images("7.jpg", "7.jpg.encrypted.png.decrypted.png")?;
/// println!("{outcome}");
/// ```
pub fn compare_images<P, Q>(left: P, right: Q) -> Result<Comparison>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (left, right) = (left.as_ref(), right.as_ref());
    debug!("Comparing {} with {}", left.display(), right.display());

    let left_img = image_io::load_rgb(left)?;
    let right_img = image_io::load_rgb(right)?;

    let outcome = compare_buffers(&left_img, &right_img);
    debug!(
        "{} vs {}: {}",
        left.display(),
        right.display(),
        outcome
    );

    Ok(outcome)
}
