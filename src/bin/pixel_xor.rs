//! # pixel-xor Binary Entry Point
//!
//! ## Usage
//!
//! ```bash
//! pixel-xor encrypt photo.jpg --key 123,45,67
//! pixel-xor decrypt photo.jpg.encrypted.png --key 123,45,67
//! pixel-xor compare photo.jpg photo.jpg.encrypted.png.decrypted.png
//! pixel-xor roundtrip --config config/example.toml --report report.json
//! ```
//!
//! The key comes from `--key` or, failing that, from `cipher.key` in the config file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{error, LevelFilter};

use pixel_xor::common::config::{load_config, AppConfig};
use pixel_xor::{compare_images, ImageCipher, XorKey};

/// XOR every RGB pixel of an image with a 3-integer key, and compare images.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    ///
    /// Example: config/example.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Key as three comma-separated integers, one per RGB channel
    #[arg(short, long, global = true, value_name = "R,G,B", allow_hyphen_values = true)]
    key: Option<XorKey>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt an image, writing <IMAGE>.encrypted.png
    Encrypt { image: PathBuf },

    /// Decrypt an image, writing <IMAGE>.decrypted.png
    Decrypt { image: PathBuf },

    /// Compare two images pixel by pixel (exit code 1 if they differ)
    Compare { left: PathBuf, right: PathBuf },

    /// Encrypt, decrypt the result, and compare both outputs with the original
    Roundtrip {
        /// Input image (defaults to input.image from the config file)
        image: Option<PathBuf>,

        /// Write a JSON summary of the run to this path
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Format: `[HH:MM:SS] [LEVEL] message`. `RUST_LOG` overrides the default level.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.verbose);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Load the config file if one was given. Only commands that need a key or an
/// input image read it.
fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Execute the selected command. `Ok(false)` means the command ran but the images
/// did not match.
fn run(args: Args) -> Result<bool> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Encrypt { image } => {
            let config = load_app_config(config_path)?;
            let cipher = ImageCipher::new(config.resolve_key(args.key)?);
            let output = cipher
                .encrypt(&image)
                .with_context(|| format!("Failed to encrypt {}", image.display()))?;
            println!("Image encrypted and saved as {}", output.path.display());
            Ok(true)
        }
        Command::Decrypt { image } => {
            let config = load_app_config(config_path)?;
            let cipher = ImageCipher::new(config.resolve_key(args.key)?);
            let output = cipher
                .decrypt(&image)
                .with_context(|| format!("Failed to decrypt {}", image.display()))?;
            println!("Image decrypted and saved as {}", output.path.display());
            Ok(true)
        }
        Command::Compare { left, right } => {
            let outcome = compare_images(&left, &right).context("Failed to compare images")?;
            println!("{outcome}");
            Ok(outcome.is_identical())
        }
        Command::Roundtrip { image, report } => {
            let config = load_app_config(config_path)?;
            let cipher = ImageCipher::new(config.resolve_key(args.key)?);
            let image = config
                .resolve_image(image)
                .context("No input image (pass IMAGE or set input.image in the config file)")?;

            let summary = cipher
                .roundtrip(&image)
                .with_context(|| format!("Round trip failed for {}", image.display()))?;

            println!("Image encrypted and saved as {}", summary.encrypted.display());
            println!("Image decrypted and saved as {}", summary.decrypted.display());
            println!("Original vs encrypted: {}", summary.original_vs_encrypted);
            println!("Original vs decrypted: {}", summary.original_vs_decrypted);

            if let Some(path) = report {
                summary
                    .export_to_json(&path)
                    .with_context(|| format!("Failed to write report {}", path.display()))?;
                println!("Report exported to: {}", path.display());
            }

            Ok(summary.restored())
        }
    }
}
