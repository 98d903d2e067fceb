//! Subscriber credential directory.
//!
//! # Responsibilities
//! - CRUD over the keyed subscriber table (SQLite)
//! - Substitute configured default credentials when a create omits them
//! - Partial updates: only supplied fields change, mirrors follow
//!
//! # Design Decisions
//! - The connection is an injected handle owned by [`SubscriberDirectory`],
//!   acquired once at startup. Never global state.
//! - Every operation is a single SQL statement; the store's own atomicity
//!   is all the transactional guarantee the service needs.
//! - `supi` mirrors `ueid` and `protection_parameter_id` mirrors
//!   `enc_permanent_key` at all times; updates write both sides together.
//! - Defaulted subscribers share one key/OPC pair. Deliberate tradeoff for
//!   lab use, surfaced through `[subscriber_defaults]` in the service
//!   config instead of being generated per subscriber.

pub mod directory;

pub use directory::SubscriberDirectory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication method assigned to every subscriber.
pub const AUTH_METHOD: &str = "5G_AKA";

/// Authentication management field assigned to every subscriber.
pub const AUTH_MANAGEMENT_FIELD: &str = "8000";

/// MILENAGE is the only algorithm the lab core runs.
pub const ALGORITHM_ID: &str = "milenage";

/// Initial sequence-number blob, stored verbatim as JSON text.
pub const SEQUENCE_NUMBER: &str =
    r#"{"sqn": "000000000020", "sqnScheme": "NON_TIME_BASED", "lastIndexes": {"ausf": 0}}"#;

/// Errors produced by directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Create was called without a subscriber identifier.
    #[error("ueid is required")]
    MissingUeid,

    /// Update was called with no fields to apply.
    #[error("no fields to update")]
    NothingToUpdate,

    /// No row matched the given key.
    #[error("subscriber not found: {0}")]
    NotFound(String),

    /// The underlying table operation failed.
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The subset of a subscriber row shown in listings and edited by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberSummary {
    pub ueid: String,
    pub enc_permanent_key: String,
    pub enc_opc_key: String,
}

/// A complete subscriber row, including server-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRecord {
    pub ueid: String,
    pub supi: String,
    pub enc_permanent_key: String,
    pub protection_parameter_id: String,
    pub enc_opc_key: String,
    pub authentication_method: String,
    pub authentication_management_field: String,
    pub algorithm_id: String,
    pub sequence_number: serde_json::Value,
}

/// Create request body. An empty or missing credential takes the
/// configured default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriber {
    #[serde(default)]
    pub ueid: String,

    #[serde(default)]
    pub enc_permanent_key: Option<String>,

    #[serde(default)]
    pub enc_opc_key: Option<String>,
}

/// Update request body. Absent (or empty) fields leave the stored value
/// untouched; a row is never partially blanked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberUpdate {
    #[serde(default)]
    pub ueid: Option<String>,

    #[serde(default)]
    pub enc_permanent_key: Option<String>,

    #[serde(default)]
    pub enc_opc_key: Option<String>,
}

impl SubscriberUpdate {
    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().map_or(true, |v| v.is_empty())
        }
        blank(&self.ueid) && blank(&self.enc_permanent_key) && blank(&self.enc_opc_key)
    }
}
