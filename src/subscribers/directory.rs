//! SQLite-backed implementation of the subscriber directory.

use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;

use crate::config::SubscriberDefaultsConfig;
use crate::subscribers::{
    DirectoryError, DirectoryResult, SubscriberRecord, SubscriberSummary, SubscriberUpdate,
    ALGORITHM_ID, AUTH_MANAGEMENT_FIELD, AUTH_METHOD, SEQUENCE_NUMBER,
};

/// Directory of subscriber credentials over a single SQLite connection.
pub struct SubscriberDirectory {
    conn: Connection,
    defaults: SubscriberDefaultsConfig,
}

impl SubscriberDirectory {
    /// Open (or create) the directory database at `path`.
    pub fn open(path: &Path, defaults: SubscriberDefaultsConfig) -> DirectoryResult<Self> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self { conn, defaults })
    }

    /// Open an in-memory directory. Test use.
    pub fn open_in_memory(defaults: SubscriberDefaultsConfig) -> DirectoryResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn, defaults })
    }

    fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS subscribers (
                ueid TEXT PRIMARY KEY,
                supi TEXT NOT NULL,
                enc_permanent_key TEXT NOT NULL,
                protection_parameter_id TEXT NOT NULL,
                enc_opc_key TEXT NOT NULL,
                authentication_method TEXT NOT NULL,
                authentication_management_field TEXT NOT NULL,
                algorithm_id TEXT NOT NULL,
                sequence_number TEXT NOT NULL
            );
            "#,
        )
    }

    /// List all subscribers, ordered by `ueid` ascending.
    pub fn list(&self) -> DirectoryResult<Vec<SubscriberSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT ueid, enc_permanent_key, enc_opc_key FROM subscribers ORDER BY ueid ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SubscriberSummary {
                ueid: row.get(0)?,
                enc_permanent_key: row.get(1)?,
                enc_opc_key: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Fetch a single subscriber row by key.
    pub fn get(&self, ueid: &str) -> DirectoryResult<SubscriberRecord> {
        let record = self
            .conn
            .query_row(
                "SELECT ueid, supi, enc_permanent_key, protection_parameter_id, enc_opc_key,
                        authentication_method, authentication_management_field, algorithm_id,
                        sequence_number
                 FROM subscribers WHERE ueid = ?1",
                [ueid],
                |row| {
                    let sequence_number: String = row.get(8)?;
                    Ok(SubscriberRecord {
                        ueid: row.get(0)?,
                        supi: row.get(1)?,
                        enc_permanent_key: row.get(2)?,
                        protection_parameter_id: row.get(3)?,
                        enc_opc_key: row.get(4)?,
                        authentication_method: row.get(5)?,
                        authentication_management_field: row.get(6)?,
                        algorithm_id: row.get(7)?,
                        sequence_number: serde_json::from_str(&sequence_number)
                            .unwrap_or(serde_json::Value::String(sequence_number)),
                    })
                },
            )
            .optional()?;

        record.ok_or_else(|| DirectoryError::NotFound(ueid.to_string()))
    }

    /// Insert a subscriber, substituting configured defaults for omitted
    /// credentials and assigning the fixed server-side fields.
    pub fn create(
        &self,
        ueid: &str,
        enc_permanent_key: Option<&str>,
        enc_opc_key: Option<&str>,
    ) -> DirectoryResult<()> {
        if ueid.is_empty() {
            return Err(DirectoryError::MissingUeid);
        }

        let key = match enc_permanent_key {
            Some(k) if !k.is_empty() => k,
            _ => self.defaults.permanent_key.as_str(),
        };
        let opc = match enc_opc_key {
            Some(o) if !o.is_empty() => o,
            _ => self.defaults.opc_key.as_str(),
        };

        self.conn.execute(
            "INSERT INTO subscribers (
                ueid, supi, enc_permanent_key, protection_parameter_id, enc_opc_key,
                authentication_method, authentication_management_field, algorithm_id,
                sequence_number
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                ueid,
                ueid,
                key,
                key,
                opc,
                AUTH_METHOD,
                AUTH_MANAGEMENT_FIELD,
                ALGORITHM_ID,
                SEQUENCE_NUMBER,
            ],
        )?;

        Ok(())
    }

    /// Apply a partial update to the row keyed by `old_ueid`.
    ///
    /// Builds one `UPDATE` covering exactly the supplied fields plus their
    /// mirrors (`supi` follows `ueid`, `protection_parameter_id` follows
    /// `enc_permanent_key`).
    pub fn update(&self, old_ueid: &str, changes: &SubscriberUpdate) -> DirectoryResult<()> {
        if changes.is_empty() {
            return Err(DirectoryError::NothingToUpdate);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<String> = Vec::new();

        if let Some(ueid) = non_empty(&changes.ueid) {
            assignments.push("ueid = ?");
            values.push(ueid.to_string());
            assignments.push("supi = ?");
            values.push(ueid.to_string());
        }
        if let Some(key) = non_empty(&changes.enc_permanent_key) {
            assignments.push("enc_permanent_key = ?");
            values.push(key.to_string());
            assignments.push("protection_parameter_id = ?");
            values.push(key.to_string());
        }
        if let Some(opc) = non_empty(&changes.enc_opc_key) {
            assignments.push("enc_opc_key = ?");
            values.push(opc.to_string());
        }

        values.push(old_ueid.to_string());
        let sql = format!(
            "UPDATE subscribers SET {} WHERE ueid = ?",
            assignments.join(", ")
        );

        let rows = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        if rows == 0 {
            return Err(DirectoryError::NotFound(old_ueid.to_string()));
        }

        Ok(())
    }

    /// Delete the row keyed by `ueid`.
    pub fn delete(&self, ueid: &str) -> DirectoryResult<()> {
        let rows = self
            .conn
            .execute("DELETE FROM subscribers WHERE ueid = ?1", [ueid])?;
        if rows == 0 {
            return Err(DirectoryError::NotFound(ueid.to_string()));
        }

        Ok(())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
