//! CSV format handling for credential rows and pipe-delimited output
//!
//! This module centralizes format concerns, providing:
//! - CsvCredentialRow structure for deserialization
//! - Conversion from CSV rows to the domain record
//! - Pipe-delimited output line rendering
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::CredentialRecord;
use serde::Deserialize;

/// CSV row structure for deserialization
///
/// Fields are bound to the export's header by exact column name, so the
/// column order in the file does not matter. The recovery field is
/// optional because a short row may end before that column.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvCredentialRow {
    #[serde(rename = "Email Address [Required]")]
    pub email: String,
    #[serde(rename = "Password [Required]")]
    pub password: String,
    #[serde(rename = "Recovery Email")]
    pub recovery_email: Option<String>,
}

/// Convert a CsvCredentialRow to a CredentialRecord
///
/// An empty recovery email cell is normalized to `None`; the rendered
/// output line then omits the field entirely.
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
///
/// # Returns
///
/// The domain record carried into the chunk writer
pub fn convert_csv_row(row: CsvCredentialRow) -> CredentialRecord {
    CredentialRecord::new(row.email, row.password, row.recovery_email)
}

/// Render one output line for a credential record
///
/// Produces `email|password|recovery` when a recovery email is present
/// and `email|password` when it is absent. The trailing newline is added
/// by the chunk writer.
///
/// # Arguments
///
/// * `record` - The record to render
///
/// # Returns
///
/// The pipe-delimited line, without a trailing newline
pub fn render_line(record: &CredentialRecord) -> String {
    match &record.recovery_email {
        Some(recovery) => format!("{}|{}|{}", record.email, record.password, recovery),
        None => format!("{}|{}", record.email, record.password),
    }
}
