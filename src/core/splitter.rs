//! Split orchestration
//!
//! This module provides the CsvSplitter that drives one run: it opens
//! the credential reader, streams records into the chunk writer, and
//! reports the run totals.
//!
//! The splitter focuses on orchestration, delegating:
//! - header resolution and row extraction to `CredentialReader`
//! - rollover and file naming to `ChunkWriter`
//!
//! Validation happens in dependency order: the chunk capacity is checked
//! (and the output directory created) before the input is opened, and
//! the header is resolved before any chunk file exists — so a run that
//! aborts on a header or column failure leaves the output directory
//! empty.

use crate::core::chunk_writer::ChunkWriter;
use crate::io::reader::CredentialReader;
use crate::types::{SplitError, SplitSummary};
use std::path::{Path, PathBuf};

/// One-shot splitter for a credential export
///
/// # Examples
///
/// ```no_run
/// use cred_splitter::core::splitter::CsvSplitter;
/// use std::path::{Path, PathBuf};
///
/// let splitter = CsvSplitter::new(PathBuf::from("processed"), 1000);
/// let summary = splitter.split(Path::new("export.csv")).unwrap();
/// println!("{} rows in {} files", summary.total_rows, summary.files_created);
/// ```
#[derive(Debug, Clone)]
pub struct CsvSplitter {
    output_dir: PathBuf,
    rows_per_file: usize,
}

impl CsvSplitter {
    /// Create a splitter with the run configuration
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Directory the chunk files are written into
    /// * `rows_per_file` - Maximum rows per chunk
    pub fn new(output_dir: PathBuf, rows_per_file: usize) -> Self {
        CsvSplitter {
            output_dir,
            rows_per_file,
        }
    }

    /// Split one export file into chunk files
    ///
    /// Streams every valid row of `input_path` into pipe-delimited chunk
    /// files, rolling over at the configured capacity, and prints the
    /// per-file and total progress lines.
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the CSV export
    ///
    /// # Returns
    ///
    /// * `Ok(SplitSummary)` with the run totals
    /// * `Err(SplitError)` on the first unrecoverable failure; chunk
    ///   files already closed stay on disk
    pub fn split(&self, input_path: &Path) -> Result<SplitSummary, SplitError> {
        let mut writer = ChunkWriter::new(&self.output_dir, self.rows_per_file)?;

        println!("Processing file: {}", input_path.display());
        println!("Output directory: {}", self.output_dir.display());
        println!("Rows per file: {}", self.rows_per_file);

        let mut reader = CredentialReader::open(input_path)?;

        for result in reader.by_ref() {
            let record = result?;
            writer.write(&record)?;
        }

        let mut summary = writer.finish()?;
        summary.skipped_rows = reader.skipped_rows();

        println!("Total rows processed: {}", summary.total_rows);
        println!("Total files created: {}", summary.files_created);

        Ok(summary)
    }
}
