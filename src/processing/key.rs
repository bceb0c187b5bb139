//! # XOR Key
//!
//! A key is one integer per RGB channel. The type fixes the shape (exactly three
//! integers), so validation only happens at the edges where keys arrive untyped:
//!
//! - command-line strings such as `123,45,67` ([`validate_key`] / [`FromStr`])
//! - TOML arrays such as `key = [123, 45, 67]` (`TryFrom<Vec<toml::Value>>`)
//!
//! Components are deliberately NOT range-checked. Values outside `[0, 255]` are
//! accepted and only tamed by the clamp in the pixel transform, which can make the
//! transform irreversible. Use [`XorKey::is_in_range`] to detect that case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Number of components in a key, one per RGB channel.
pub const KEY_LEN: usize = 3;

/// Per-channel XOR key `(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<toml::Value>", into = "[i64; 3]")]
pub struct XorKey {
    channels: [i64; KEY_LEN],
}

impl XorKey {
    /// Build a key from its three channel components.
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self {
            channels: [r, g, b],
        }
    }

    pub const fn r(&self) -> i64 {
        self.channels[0]
    }

    pub const fn g(&self) -> i64 {
        self.channels[1]
    }

    pub const fn b(&self) -> i64 {
        self.channels[2]
    }

    /// Components in channel order (R, G, B).
    pub const fn channels(&self) -> [i64; KEY_LEN] {
        self.channels
    }

    /// `true` when every component lies in `[0, 255]`.
    ///
    /// Only in-range keys guarantee that applying the transform twice restores
    /// the original image.
    pub fn is_in_range(&self) -> bool {
        self.channels.iter().all(|c| (0..=255).contains(c))
    }

    fn from_components(components: Vec<Result<i64, String>>) -> Result<Self, KeyError> {
        if components.len() != KEY_LEN {
            return Err(KeyError::Length {
                found: components.len(),
            });
        }

        let mut channels = [0i64; KEY_LEN];
        for (index, component) in components.into_iter().enumerate() {
            channels[index] = component.map_err(|value| KeyError::NotInteger { index, value })?;
        }

        Ok(Self { channels })
    }
}

/// Validate a comma-separated key such as `123,45,67`.
///
/// Surrounding parentheses or brackets are tolerated, so `(1, 2, 3)` and
/// `[1, 2, 3]` are accepted too. An empty string counts as zero components.
///
/// # Errors
/// - [`KeyError::Length`] if there are not exactly three components
/// - [`KeyError::NotInteger`] if a component does not parse as an integer
///
/// # Example
/// ```
/// use pixel_xor::processing::validate_key;
///
/// let key = validate_key("123,45,67").unwrap();
/// assert_eq!(key.channels(), [123, 45, 67]);
/// assert!(validate_key("1,2").is_err());
/// ```
pub fn validate_key(raw: &str) -> Result<XorKey, KeyError> {
    let inner = raw
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .trim();

    if inner.is_empty() {
        return Err(KeyError::Length { found: 0 });
    }

    let components = inner
        .split(',')
        .map(str::trim)
        .map(|token| token.parse::<i64>().map_err(|_| token.to_string()))
        .collect();

    XorKey::from_components(components)
}

impl FromStr for XorKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_key(s)
    }
}

impl TryFrom<Vec<toml::Value>> for XorKey {
    type Error = KeyError;

    fn try_from(values: Vec<toml::Value>) -> Result<Self, Self::Error> {
        let components = values
            .into_iter()
            .map(|value| value.as_integer().ok_or_else(|| value.to_string()))
            .collect();

        Self::from_components(components)
    }
}

impl From<XorKey> for [i64; KEY_LEN] {
    fn from(key: XorKey) -> Self {
        key.channels
    }
}

impl fmt::Display for XorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r(), self.g(), self.b())
    }
}
