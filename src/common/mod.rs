//! # Common Components
//!
//! Shared plumbing used by the library and the binary.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration loading
//! - [`image_io`]: Loading images as RGB and saving them as PNG

pub mod config;
pub mod image_io;
