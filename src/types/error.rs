//! Error types for the credential export splitter
//!
//! This module defines all error conditions the splitter can report.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Pre-flight errors**: missing input file, invalid chunk size
//! - **Header errors**: no header line, required column absent
//! - **I/O errors**: failures reading the input or writing chunk files
//! - **Archive errors**: the post-run move of the input file failed
//!
//! Malformed data rows are not represented here: the short-row policy
//! skips them silently inside the reader and they never surface as errors.

use thiserror::Error;

/// Main error type for the export splitter
///
/// This enum represents all fatal conditions a run can end with. Each
/// variant carries enough context to produce a one-line report on stderr.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// Input file not found at the specified path
    ///
    /// This is a fatal pre-flight error; nothing has been written.
    #[error("Input file '{path}' not found")]
    InputNotFound {
        /// The path that was not found
        path: String,
    },

    /// No header line found in the input
    ///
    /// The file was empty or consisted only of comment lines. The run
    /// aborts before any output file is created.
    #[error("No header line found in CSV file")]
    HeaderNotFound,

    /// A required column is missing from the header
    ///
    /// The run aborts before any output file is created.
    #[error("Column not found in CSV header: '{column}'")]
    ColumnNotFound {
        /// The required column name that was absent
        column: String,
    },

    /// Rows-per-file setting is unusable
    ///
    /// Zero would make the rollover rule divide by zero, so the value is
    /// rejected during configuration validation before the input is read.
    #[error("Rows per file must be greater than zero, got {rows}")]
    InvalidChunkSize {
        /// The rejected setting
        rows: usize,
    },

    /// Fatal CSV failure outside the per-row skip policy
    ///
    /// Reached when the header itself cannot be parsed. Per-row malformed
    /// data is skipped silently and never produces this variant.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the failure occurred (if available)
        line: Option<u64>,
        /// Description of the parsing failure
        message: String,
    },

    /// I/O error while reading the input or writing chunk files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Moving the input file into the archive directory failed
    ///
    /// Reported after the write phase; chunk files already written stay
    /// on disk and the run exits non-zero.
    #[error("Failed to archive '{source_path}' to '{dest_path}': {message}")]
    ArchiveFailed {
        /// Path of the input file that was to be moved
        source_path: String,
        /// Destination path inside the archive directory
        dest_path: String,
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to SplitError
impl From<std::io::Error> for SplitError {
    fn from(error: std::io::Error) -> Self {
        SplitError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SplitError
impl From<csv::Error> for SplitError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return SplitError::Io {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        SplitError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SplitError {
    /// Create an InputNotFound error
    pub fn input_not_found(path: &std::path::Path) -> Self {
        SplitError::InputNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a ColumnNotFound error
    pub fn column_not_found(column: &str) -> Self {
        SplitError::ColumnNotFound {
            column: column.to_string(),
        }
    }

    /// Create an ArchiveFailed error
    pub fn archive_failed(
        source_path: &std::path::Path,
        dest_path: &std::path::Path,
        message: &str,
    ) -> Self {
        SplitError::ArchiveFailed {
            source_path: source_path.display().to_string(),
            dest_path: dest_path.display().to_string(),
            message: message.to_string(),
        }
    }
}
