//! # Configuration
//!
//! TOML configuration for the `pixel-xor` binary. Every section and field is
//! optional; command-line flags take precedence over the file.
//!
//! ```toml
//! [cipher]
//! key = [123, 45, 67]
//!
//! [input]
//! image = "samples/7.jpg"
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::processing::XorKey;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error (an invalid key surfaces here as a parse error)
///
/// # Example
/// ```ignore
/// let config: AppConfig = load_config("config/example.toml")?;
/// ```
pub fn load_config<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub cipher: CipherConfig,
    pub input: InputConfig,
}

/// Key settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherConfig {
    /// Per-channel key, e.g. `[123, 45, 67]`
    pub key: Option<XorKey>,
}

/// Input settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Image used by `roundtrip` when none is given on the command line
    pub image: Option<PathBuf>,
}

impl AppConfig {
    /// Pick the key to use: the command-line one if given, else the configured one.
    ///
    /// # Errors
    /// Returns [`Error::MissingKey`] if neither is set.
    pub fn resolve_key(&self, cli_key: Option<XorKey>) -> Result<XorKey> {
        cli_key.or(self.cipher.key).ok_or(Error::MissingKey)
    }

    /// Pick the input image: the command-line one if given, else the configured one.
    pub fn resolve_image(&self, cli_image: Option<PathBuf>) -> Option<PathBuf> {
        cli_image.or_else(|| self.input.image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[cipher]
key = [123, 45, 67]

[input]
image = "samples/7.jpg"
"#,
        );

        let config: AppConfig = load_config(file.path()).unwrap();
        assert_eq!(config.cipher.key, Some(XorKey::new(123, 45, 67)));
        assert_eq!(config.input.image, Some(PathBuf::from("samples/7.jpg")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config: AppConfig = load_config(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_key_is_config_error() {
        let file = write_config("[cipher]\nkey = [1, 2]\n");
        let err = load_config::<AppConfig, _>(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("exactly 3 components"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config::<AppConfig, _>("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_cli_key_overrides_config() {
        let config = AppConfig {
            cipher: CipherConfig {
                key: Some(XorKey::new(1, 2, 3)),
            },
            ..AppConfig::default()
        };

        assert_eq!(
            config.resolve_key(Some(XorKey::new(9, 9, 9))).unwrap(),
            XorKey::new(9, 9, 9)
        );
        assert_eq!(config.resolve_key(None).unwrap(), XorKey::new(1, 2, 3));
        assert!(matches!(
            AppConfig::default().resolve_key(None),
            Err(Error::MissingKey)
        ));
    }
}
