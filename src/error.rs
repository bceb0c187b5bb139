//! # Error Types
//!
//! Library-level errors. The binary wraps these in `anyhow` with extra context.

use std::path::PathBuf;
use thiserror::Error;

/// Why an untyped key could not be turned into an [`XorKey`](crate::processing::XorKey).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key did not have exactly one component per RGB channel.
    #[error("key must have exactly 3 components, got {found}")]
    Length { found: usize },

    /// A component was present but was not an integer.
    #[error("key component {index} is not an integer: {value}")]
    NotInteger { index: usize, value: String },
}

/// Main error type for the pixel-xor library.
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied key failed validation.
    #[error(transparent)]
    InvalidKey(#[from] KeyError),

    /// No key was given on the command line or in the configuration.
    #[error("no key supplied (use --key R,G,B or set cipher.key in the config file)")]
    MissingKey,

    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The configuration file is not valid TOML for the expected layout.
    #[error("failed to parse config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The round-trip report could not be serialized.
    #[error("failed to serialize report")]
    Report(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pixel-xor operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_error_message_is_not_repeated() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::ImageLoad {
            path: PathBuf::from("t/none.png"),
            source: image::ImageError::IoError(io),
        };

        assert_eq!(err.to_string(), "failed to load image from t/none.png");
        assert_eq!(err.source().unwrap().to_string(), "no such file");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("no such file").count(), 1);
    }

    #[test]
    fn test_key_error_is_transparent() {
        let err = Error::from(KeyError::Length { found: 2 });
        assert_eq!(err.to_string(), "key must have exactly 3 components, got 2");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("exactly 3 components").count(), 1);
    }
}
