//! Line-oriented codec for the SIB8 template file.

use crate::sib8::Sib8Record;

/// Extract a [`Sib8Record`] from raw file text.
///
/// Each line is split on its first `=`; the key is trimmed, the value is
/// trimmed and loses a single trailing `;`. Lines without `=` and unknown
/// keys are ignored. The `text` value has every `|` turned back into a
/// newline.
pub fn extract(raw: &str) -> Sib8Record {
    let mut record = Sib8Record::default();

    for line in raw.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let value = value.trim();
        let value = value.strip_suffix(';').unwrap_or(value).trim();

        match key.trim() {
            "messageIdentifier" => record.message_identifier = value.to_string(),
            "serialNumber" => record.serial_number = value.to_string(),
            "dataCodingScheme" => record.data_coding_scheme = value.to_string(),
            "text" => record.text = value.replace('|', "\n"),
            "lan" => record.lan = value.to_string(),
            _ => {}
        }
    }

    record
}

/// Render the complete file body for `record`.
///
/// Regeneration is total: five `key=value;` lines in declared order with a
/// trailing newline, newlines in `text` joined with `|`.
pub fn render(record: &Sib8Record) -> String {
    let joined_text = record.text.replace('\n', "|");

    format!(
        "messageIdentifier={};\nserialNumber={};\ndataCodingScheme={};\ntext={};\nlan={};\n",
        record.message_identifier,
        record.serial_number,
        record.data_coding_scheme,
        joined_text,
        record.lan,
    )
}
