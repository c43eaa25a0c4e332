//! Streaming credential reader with iterator interface
//!
//! Provides a streaming iterator over credential records from a CSV
//! export. Delegates header resolution to the header module and format
//! concerns to the csv_format module.
//!
//! # Design
//!
//! `CredentialReader::open` scans past any `//` comment preamble, locates
//! the header line, and verifies the required columns before a single
//! data row is touched — a missing header or column aborts the run with
//! no output written. The header line is then re-fed to a `csv::Reader`
//! so rows are bound to columns by name, order-independent.
//!
//! # Row policy
//!
//! Rows too short to supply both the email and the password column are
//! skipped silently; the reader only counts them. Rows with extra fields
//! are processed normally. Only genuine I/O failures are yielded as
//! errors.
//!
//! # Memory Efficiency
//!
//! The reader streams one record at a time and never loads the file into
//! memory.

use crate::io::csv_format::{convert_csv_row, CsvCredentialRow};
use crate::io::header::{read_header_line, verify_required_columns};
use crate::types::{CredentialRecord, SplitError};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Streaming reader over the credential rows of one export file
///
/// Implements `Iterator`, yielding `Result<CredentialRecord, SplitError>`
/// where `Err` is reserved for fatal I/O failures mid-file.
///
/// # Examples
///
/// ```no_run
/// use cred_splitter::io::reader::CredentialReader;
/// use std::path::Path;
///
/// let mut reader = CredentialReader::open(Path::new("export.csv")).unwrap();
/// for result in reader.by_ref() {
///     let record = result.unwrap();
///     println!("{}", record.email);
/// }
/// println!("skipped {} short rows", reader.skipped_rows());
/// ```
pub struct CredentialReader {
    reader: csv::Reader<Box<dyn Read>>,
    skipped_rows: u64,
}

impl CredentialReader {
    /// Open an export file and resolve its header
    ///
    /// Performs, in order: file open, comment-preamble skip, header
    /// location, and required-column verification. Any failure here
    /// means no output file should ever be created for this run.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV export
    ///
    /// # Returns
    ///
    /// * `Ok(CredentialReader)` positioned at the first data row
    /// * `Err(SplitError::InputNotFound)` if the file does not exist
    /// * `Err(SplitError::HeaderNotFound)` if the file is empty or all
    ///   comments
    /// * `Err(SplitError::ColumnNotFound)` if a required column is absent
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let file = File::open(path).map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => SplitError::input_not_found(path),
            _ => SplitError::from(error),
        })?;
        let mut input = BufReader::new(file);

        let header_line = read_header_line(&mut input)?.ok_or(SplitError::HeaderNotFound)?;

        // Re-chain the consumed header line ahead of the remaining bytes
        // so the CSV reader sees a normal headed file.
        let source: Box<dyn Read> = Box::new(Cursor::new(header_line).chain(input));
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        verify_required_columns(&headers)?;

        Ok(Self {
            reader,
            skipped_rows: 0,
        })
    }

    /// Number of rows skipped so far under the short-row policy
    pub fn skipped_rows(&self) -> u64 {
        self.skipped_rows
    }
}

impl Iterator for CredentialReader {
    type Item = Result<CredentialRecord, SplitError>;

    /// Get the next credential record from the export
    ///
    /// Rows that fail to deserialize (short of a required column, or
    /// CSV-malformed) are skipped without an item being yielded; only
    /// I/O failures surface as `Err`.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(CredentialRecord))` - Successfully extracted record
    /// * `Some(Err(SplitError))` - Fatal I/O failure
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut records = self.reader.deserialize::<CsvCredentialRow>();

            match records.next()? {
                Ok(row) => return Some(Ok(convert_csv_row(row))),
                Err(error) if error.is_io_error() => return Some(Err(error.into())),
                Err(_) => {
                    // Short or malformed row: skip silently, count only.
                    self.skipped_rows += 1;
                }
            }
        }
    }
}
