use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cipher::CipherOutput;
use crate::error::Result;
use crate::processing::{Comparison, TransformStats, XorKey};

/// Summary of an encrypt → decrypt → compare run, exportable as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RoundTripReport {
    pub generated_at: String,
    pub input: PathBuf,
    pub encrypted: PathBuf,
    pub decrypted: PathBuf,
    pub key: XorKey,
    pub key_in_range: bool,
    pub encrypt_stats: TransformStats,
    pub decrypt_stats: TransformStats,
    pub original_vs_encrypted: Comparison,
    pub original_vs_decrypted: Comparison,
}

impl RoundTripReport {
    pub fn new(
        input: &Path,
        key: XorKey,
        encrypted: CipherOutput,
        decrypted: CipherOutput,
        original_vs_encrypted: Comparison,
        original_vs_decrypted: Comparison,
    ) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            input: input.to_path_buf(),
            encrypted: encrypted.path,
            decrypted: decrypted.path,
            key,
            key_in_range: key.is_in_range(),
            encrypt_stats: encrypted.stats,
            decrypt_stats: decrypted.stats,
            original_vs_encrypted,
            original_vs_decrypted,
        }
    }

    /// The round trip restored the original image exactly.
    pub fn restored(&self) -> bool {
        self.original_vs_decrypted.is_identical()
    }

    pub fn export_to_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json_string.as_bytes())?;

        Ok(())
    }
}
