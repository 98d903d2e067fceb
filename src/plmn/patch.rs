//! In-place field patching of gNB configuration text.
//!
//! # Responsibilities
//! - Replace each field's matched span (key through terminator) with a
//!   fixed-format re-serialization
//! - Preserve every byte outside the matched spans: comments, unrelated
//!   keys, ordering and whitespace survive edits untouched
//!
//! # Design Decisions
//! - The replacement spacing is a formatting convention reproduced
//!   byte-for-byte to match the reference output
//! - A field whose pattern is absent is silently skipped; patching never
//!   inserts keys, so a file can only gain a key by hand
//! - Only the first matched span per field is rewritten

use regex::NoExpand;

use crate::plmn::{
    gnb_id_pattern, mcc_pattern, mnc_length_pattern, mnc_pattern, tracking_area_code_pattern,
    PlmnRecord,
};

/// Re-write the five PLMN fields inside `original`, leaving all other
/// content byte-identical.
pub fn patch(original: &str, record: &PlmnRecord) -> String {
    let mut content = gnb_id_pattern()
        .replace(original, NoExpand(&format!("gNB_ID    =  {};", record.gnb_id)))
        .into_owned();

    content = tracking_area_code_pattern()
        .replace(
            &content,
            NoExpand(&format!("tracking_area_code  =  {};", record.tracking_area_code)),
        )
        .into_owned();

    content = mcc_pattern()
        .replace(&content, NoExpand(&format!("mcc = {}", record.mcc)))
        .into_owned();

    content = mnc_pattern()
        .replace(&content, NoExpand(&format!("mnc = {}", record.mnc)))
        .into_owned();

    content = mnc_length_pattern()
        .replace(&content, NoExpand(&format!("mnc_length = {}", record.mnc_length)))
        .into_owned();

    content
}
