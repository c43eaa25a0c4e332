//! Header resolution for credential exports
//!
//! Exports may carry a preamble of `//` comment lines ahead of the CSV
//! header. This module locates the header line (the first non-comment
//! line) and verifies that it contains every required column.
//!
//! Comment skipping applies only while searching for the header; once the
//! header is found the rest of the file is handed to the CSV reader as-is.

use crate::types::{SplitError, REQUIRED_COLUMNS};
use csv::StringRecord;
use std::io::BufRead;

/// Prefix marking a preamble comment line.
pub const COMMENT_PREFIX: &str = "//";

/// Read the header line from the start of an export
///
/// Consumes lines from `input` until the first one whose trimmed content
/// does not start with [`COMMENT_PREFIX`]. The returned line keeps its
/// trailing newline so it can be re-fed to a CSV reader. A blank line
/// counts as a header candidate; column verification then rejects it.
///
/// # Arguments
///
/// * `input` - Buffered reader positioned at the start of the file
///
/// # Returns
///
/// * `Ok(Some(line))` - The header line, newline included
/// * `Ok(None)` - The input was empty or contained only comment lines
/// * `Err(io::Error)` - Reading failed
pub fn read_header_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if !line.trim().starts_with(COMMENT_PREFIX) {
            return Ok(Some(line));
        }
    }
}

/// Verify that the parsed header contains every required column
///
/// Column names are matched by exact string and may appear in any order.
/// The first missing name (in email, password, recovery order) is
/// reported; the run must abort before any output is produced.
///
/// # Arguments
///
/// * `headers` - The parsed header record
///
/// # Returns
///
/// * `Ok(())` if all required columns are present
/// * `Err(SplitError::ColumnNotFound)` naming the first missing column
pub fn verify_required_columns(headers: &StringRecord) -> Result<(), SplitError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(SplitError::column_not_found(column));
        }
    }
    Ok(())
}
