//! # pixel-xor
//!
//! Reversible per-channel XOR "encryption" of RGB images, plus exact pixel-by-pixel
//! image comparison.
//!
//! This is an obfuscation toy, not a cipher: a repeating 3-byte key offers no
//! cryptographic security.
//!
//! ## Example
//!
//! ```no_run
//! use pixel_xor::{compare_images, ImageCipher, XorKey};
//!
//! # fn main() -> pixel_xor::Result<()> {
//! let cipher = ImageCipher::new(XorKey::new(123, 45, 67));
//!
//! let encrypted = cipher.encrypt("7.jpg")?;
//! let decrypted = cipher.decrypt(&encrypted.path)?;
//!
//! assert!(compare_images("7.jpg", &decrypted.path)?.is_identical());
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod common;
pub mod error;
pub mod processing;
pub mod report;

pub use cipher::{CipherOutput, Direction, ImageCipher};
pub use error::{Error, KeyError, Result};
pub use processing::{compare_images, validate_key, Comparison, XorKey};
pub use report::RoundTripReport;
