//! Config gateway: file storage behind the extractors and writers.
//!
//! # Data Flow
//! ```text
//! GET  → read file → extract → record
//! POST (PLMN) → read file → patch in memory → single atomic write
//! POST (SIB8) → render from record → single write (no read)
//! ```
//!
//! # Design Decisions
//! - Patching happens on an in-memory string followed by one write, so a
//!   failed write never leaves a half-patched file
//! - The pattern-replace contract lives entirely behind this seam; callers
//!   only see records, so a structured parser could replace the internals
//!   without touching the HTTP layer
//! - No locking: concurrent writers race at the file level and the last
//!   writer wins, which is acceptable for a single operator console

use std::io;
use std::path::PathBuf;
use tokio::fs;

use crate::config::ConfigFilesConfig;
use crate::plmn::{self, PlmnRecord};
use crate::sib8::{self, Sib8Record};

/// Owns the two config file paths and mediates every read and write.
pub struct ConfigGateway {
    plmn_path: PathBuf,
    sib8_path: PathBuf,
}

impl ConfigGateway {
    /// Create a gateway over the configured file locations.
    pub fn new(files: &ConfigFilesConfig) -> Self {
        Self {
            plmn_path: PathBuf::from(&files.plmn_path),
            sib8_path: PathBuf::from(&files.sib8_path),
        }
    }

    /// Read and extract the PLMN configuration.
    pub async fn load_plmn(&self) -> io::Result<PlmnRecord> {
        let raw = fs::read_to_string(&self.plmn_path).await?;
        Ok(plmn::extract(&raw))
    }

    /// Patch the PLMN file with `record`, preserving all unrelated content.
    pub async fn store_plmn(&self, record: &PlmnRecord) -> io::Result<()> {
        let raw = fs::read_to_string(&self.plmn_path).await?;
        let patched = plmn::patch(&raw, record);
        fs::write(&self.plmn_path, patched).await
    }

    /// Read and extract the SIB8 configuration.
    pub async fn load_sib8(&self) -> io::Result<Sib8Record> {
        let raw = fs::read_to_string(&self.sib8_path).await?;
        Ok(sib8::extract(&raw))
    }

    /// Regenerate the SIB8 file from `record`.
    pub async fn store_sib8(&self, record: &Sib8Record) -> io::Result<()> {
        fs::write(&self.sib8_path, sib8::render(record)).await
    }
}
