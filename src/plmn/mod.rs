//! PLMN identity configuration handling.
//!
//! # Data Flow
//! ```text
//! gnb.conf (libconfig-style text)
//!     → extract.rs (regex field scan)
//!     → PlmnRecord (served as JSON)
//!
//! Edited PlmnRecord
//!     → patch.rs (in-place span replacement against the *current* file text)
//!     → new file body, all unmatched bytes preserved
//! ```
//!
//! # Design Decisions
//! - No general parser: each field is located by a fixed key pattern
//! - Extraction and patching share the same compiled patterns, so the two
//!   directions can never disagree about where a field lives
//! - A key absent from the file leaves its field empty on read and is
//!   skipped on write; edits never insert keys the file does not have

pub mod extract;
pub mod patch;

pub use extract::extract;
pub use patch::patch;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// The five PLMN fields exposed to the operator form.
///
/// Field values are kept as raw string tokens; the service does not
/// interpret them (`mcc = 001` keeps its leading zeros).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnRecord {
    /// gNB identity, hex-like token (e.g. `0xe00`).
    #[serde(rename = "gNB_ID", default)]
    pub gnb_id: String,

    /// Tracking area code, decimal token.
    #[serde(default)]
    pub tracking_area_code: String,

    /// Mobile country code, 3-digit decimal string.
    #[serde(default)]
    pub mcc: String,

    /// Mobile network code, 2-3 digit decimal string.
    #[serde(default)]
    pub mnc: String,

    /// Declared MNC digit count.
    #[serde(default)]
    pub mnc_length: String,
}

pub(crate) fn gnb_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"gNB_ID\s*=\s*([^;]+);").unwrap())
}

pub(crate) fn tracking_area_code_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"tracking_area_code\s*=\s*([^;]+);").unwrap())
}

pub(crate) fn mcc_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"mcc\s*=\s*(\d+)").unwrap())
}

pub(crate) fn mnc_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"mnc\s*=\s*(\d+)").unwrap())
}

pub(crate) fn mnc_length_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"mnc_length\s*=\s*(\d+)").unwrap())
}
