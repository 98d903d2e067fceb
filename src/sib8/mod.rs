//! SIB8 warning-message configuration handling.
//!
//! # Data Flow
//! ```text
//! sib8.conf (key=value; lines)
//!     → codec.rs extract (line split, `|` → newline for `text`)
//!     → Sib8Record (served as JSON)
//!
//! Edited Sib8Record
//!     → codec.rs render (newline → `|`, fixed five-line template)
//!     → complete new file body (nothing preserved)
//! ```
//!
//! # Design Decisions
//! - Regenerate mode: the template has no stable surrounding content worth
//!   preserving, so every write emits the full file from the record
//! - The on-disk `text` field joins lines with `|`; text containing a
//!   literal `|` cannot round-trip. Known format limitation, kept for
//!   compatibility with existing files.

pub mod codec;

pub use codec::{extract, render};

use serde::{Deserialize, Serialize};

/// The SIB8 cell-broadcast warning message template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sib8Record {
    /// Warning message identifier.
    #[serde(default)]
    pub message_identifier: String,

    /// Serial number of the broadcast.
    #[serde(default)]
    pub serial_number: String,

    /// Data coding scheme byte.
    #[serde(default)]
    pub data_coding_scheme: String,

    /// Warning text. Multi-line in memory, `|`-joined on disk.
    #[serde(default)]
    pub text: String,

    /// Language field.
    #[serde(default)]
    pub lan: String,
}
