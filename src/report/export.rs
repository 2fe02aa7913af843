//! Transfer configuration export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::transfer::TransferConfig;

/// Export envelope written to disk or stdout
#[derive(Debug, Serialize)]
pub struct TransferExport<'a> {
    /// Timestamp of the export (RFC 3339)
    pub generated_at: String,
    /// podferry version that produced the file
    pub podferry_version: String,
    pub transfer: &'a TransferConfig,
}

impl<'a> TransferExport<'a> {
    pub fn new(transfer: &'a TransferConfig) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            podferry_version: env!("CARGO_PKG_VERSION").to_string(),
            transfer,
        }
    }
}

/// Render the export envelope as pretty JSON
pub fn export_json(config: &TransferConfig) -> Result<String> {
    serde_json::to_string_pretty(&TransferExport::new(config))
        .context("Failed to serialize transfer configuration")
}

/// Write the export envelope to `path`
pub fn write_export(config: &TransferConfig, path: &Path) -> Result<()> {
    let json = export_json(config)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write transfer configuration: {}", path.display()))?;
    Ok(())
}
