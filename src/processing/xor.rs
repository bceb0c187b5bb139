//! # Per-Channel XOR Transform
//!
//! Applies an [`XorKey`] to every pixel of an RGB image in place.
//!
//! ## Algorithm
//!
//! For every pixel, in row-major order, and for each channel `c` in R, G, B:
//!
//! ```text
//! new[c] = clamp(old[c] XOR key[c])
//! ```
//!
//! Encryption and decryption are the same operation. With a key in `[0, 255]` the
//! XOR result always fits in a byte, the clamp is a no-op, and applying the
//! transform twice restores the original image exactly.
//!
//! ### Out-of-range keys
//! A component outside `[0, 255]` is accepted. Its XOR result can leave the byte
//! range and then gets clamped, which destroys information: e.g. key `(300, 45, 67)`
//! maps a red channel of 10 to 255, and 255 maps back to 255, not 10.
//! [`TransformStats::clamped_channels`] counts how often that happened.

use image::{Rgb, RgbImage};
use serde::Serialize;

use super::key::XorKey;

/// Constrain a value to the inclusive byte range `[0, 255]`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp(value: i64) -> u8 {
    // Safe: clamped to [0, 255] before casting
    value.clamp(0, 255) as u8
}

/// Outcome of a transform pass over an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Number of pixels visited.
    pub pixels: u64,
    /// Number of channel values whose XOR result had to be clamped.
    pub clamped_channels: u64,
}

impl TransformStats {
    /// `true` if any channel was clamped during the pass.
    pub fn clamped(&self) -> bool {
        self.clamped_channels > 0
    }
}

/// Transform a single pixel, returning the new pixel and how many of its channels
/// were clamped.
pub fn transform_pixel(pixel: Rgb<u8>, key: &XorKey) -> (Rgb<u8>, u8) {
    let mut out = pixel;
    let mut clamped = 0;

    for (channel, key_channel) in key.channels().into_iter().enumerate() {
        let mixed = i64::from(pixel[channel]) ^ key_channel;
        let value = clamp(mixed);
        if i64::from(value) != mixed {
            clamped += 1;
        }
        out[channel] = value;
    }

    (out, clamped)
}

/// Apply `key` to every pixel of `image` in place.
pub fn apply_key(image: &mut RgbImage, key: &XorKey) -> TransformStats {
    let mut stats = TransformStats::default();

    for pixel in image.pixels_mut() {
        let (new_pixel, clamped) = transform_pixel(*pixel, key);
        *pixel = new_pixel;

        stats.pixels += 1;
        stats.clamped_channels += u64::from(clamped);
    }

    stats
}
