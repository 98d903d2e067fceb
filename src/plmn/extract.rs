//! Field extraction from raw gNB configuration text.
//!
//! # Responsibilities
//! - Scan the raw file for each of the five PLMN keys
//! - Capture `gNB_ID` and `tracking_area_code` up to the first `;`
//! - Capture `mcc`, `mnc` and `mnc_length` as the first digit run after `=`
//! - Leave absent fields as empty strings (a default, not a failure)
//!
//! # Design Decisions
//! - First match wins; duplicate keys after the first are ignored
//! - A stray `;` inside a value truncates the semicolon-terminated fields.
//!   This mirrors the file format's own convention and is accepted policy.

use crate::plmn::{
    gnb_id_pattern, mcc_pattern, mnc_length_pattern, mnc_pattern, tracking_area_code_pattern,
    PlmnRecord,
};

/// Extract a [`PlmnRecord`] from raw configuration text.
///
/// Never fails: keys missing from `raw` leave the corresponding field empty.
pub fn extract(raw: &str) -> PlmnRecord {
    let mut record = PlmnRecord::default();

    if let Some(caps) = gnb_id_pattern().captures(raw) {
        record.gnb_id = caps[1].trim().to_string();
    }

    if let Some(caps) = tracking_area_code_pattern().captures(raw) {
        record.tracking_area_code = caps[1].trim().to_string();
    }

    if let Some(caps) = mcc_pattern().captures(raw) {
        record.mcc = caps[1].to_string();
    }

    if let Some(caps) = mnc_pattern().captures(raw) {
        record.mnc = caps[1].to_string();
    }

    if let Some(caps) = mnc_length_pattern().captures(raw) {
        record.mnc_length = caps[1].to_string();
    }

    record
}
