//! # Image Cipher Core
//!
//! [`ImageCipher`] binds a key to the file-level operations: load an image, apply
//! the XOR transform, and save the result next to the input as
//! `<input>.encrypted.png` or `<input>.decrypted.png`.
//!
//! Encrypt and decrypt run the exact same transform; they differ only in the name
//! of the output file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, warn};

use crate::common::image_io;
use crate::error::Result;
use crate::processing::{apply_key, compare_images, TransformStats, XorKey};
use crate::report::RoundTripReport;

/// Which way a file is being processed. Only affects the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Suffix appended to the full input path, extension included.
    pub fn suffix(&self) -> &'static str {
        match self {
            Direction::Encrypt => ".encrypted.png",
            Direction::Decrypt => ".decrypted.png",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypted",
            Direction::Decrypt => "decrypted",
        }
    }

    /// Output path for `input`, e.g. `7.jpg` → `7.jpg.encrypted.png`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = OsString::from(input.as_os_str());
        name.push(self.suffix());
        PathBuf::from(name)
    }
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOutput {
    /// Where the processed image was written
    pub path: PathBuf,
    pub stats: TransformStats,
}

/// Applies a fixed XOR key to image files.
pub struct ImageCipher {
    key: XorKey,
}

impl ImageCipher {
    /// Create a cipher for `key`.
    ///
    /// Out-of-range keys are accepted, but a warning is logged because the
    /// transform is then not guaranteed to be reversible.
    ///
    /// # Example
    /// ```ignore
    /// let cipher = ImageCipher::new(XorKey::new(123, 45, 67));
    /// ```
    pub fn new(key: XorKey) -> Self {
        if !key.is_in_range() {
            warn!(
                "⚠️  Key {} has components outside 0-255; clamping may make decryption lossy",
                key
            );
        }
        Self { key }
    }

    /// Apply the key to an in-memory image.
    pub fn transform_buffer(&self, image: &mut RgbImage) -> TransformStats {
        apply_key(image, &self.key)
    }

    /// Encrypt the image at `path`, writing `<path>.encrypted.png`.
    ///
    /// # Errors
    /// Fails if the input cannot be decoded or the output cannot be written.
    pub fn encrypt<P: AsRef<Path>>(&self, path: P) -> Result<CipherOutput> {
        self.process(path.as_ref(), Direction::Encrypt)
    }

    /// Decrypt the image at `path`, writing `<path>.decrypted.png`.
    ///
    /// # Errors
    /// Fails if the input cannot be decoded or the output cannot be written.
    pub fn decrypt<P: AsRef<Path>>(&self, path: P) -> Result<CipherOutput> {
        self.process(path.as_ref(), Direction::Decrypt)
    }

    /// Load, transform, and save one image.
    pub fn process(&self, path: &Path, direction: Direction) -> Result<CipherOutput> {
        let mut image = image_io::load_rgb(path)?;
        let stats = self.transform_buffer(&mut image);

        if stats.clamped() {
            warn!(
                "⚠️  {} channel values were clamped while processing {}; the result cannot be reversed exactly",
                stats.clamped_channels,
                path.display()
            );
        }

        let output = direction.output_path(path);
        image_io::save_png(&image, &output)?;

        debug!(
            "Image {} and saved as {}",
            direction.past_tense(),
            output.display()
        );

        Ok(CipherOutput {
            path: output,
            stats,
        })
    }

    /// Encrypt `path`, decrypt the encrypted file, and compare both results with
    /// the original.
    ///
    /// The decrypted file ends up at `<path>.encrypted.png.decrypted.png`.
    ///
    /// # Errors
    /// Fails on the first I/O or decode error; mismatching images are reported in
    /// the returned [`RoundTripReport`], not as errors.
    pub fn roundtrip<P: AsRef<Path>>(&self, path: P) -> Result<RoundTripReport> {
        let path = path.as_ref();

        let encrypted = self.encrypt(path)?;
        let decrypted = self.decrypt(&encrypted.path)?;

        let original_vs_encrypted = compare_images(path, &encrypted.path)?;
        let original_vs_decrypted = compare_images(path, &decrypted.path)?;

        Ok(RoundTripReport::new(
            path,
            self.key,
            encrypted,
            decrypted,
            original_vs_encrypted,
            original_vs_decrypted,
        ))
    }
}
