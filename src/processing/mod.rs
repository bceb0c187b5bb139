//! # Pixel Processing
//!
//! The pure image logic: key validation, the per-channel XOR transform, and exact
//! image comparison. File handling lives in [`crate::common::image_io`].

pub mod compare;
pub mod key;
pub mod xor;

// Re-export main items for convenience
pub use compare::{compare_buffers, compare_images, Comparison};
pub use key::{validate_key, XorKey};
pub use xor::{apply_key, clamp, transform_pixel, TransformStats};
