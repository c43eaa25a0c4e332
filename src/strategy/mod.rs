//! Processing strategy module for the export splitter
//!
//! This module defines the Strategy pattern for complete split runs,
//! allowing the two run modes (split only, split then archive) to be
//! selected at runtime from the CLI.

use crate::cli::RunMode;
use crate::types::{SplitError, SplitSummary};
use std::path::{Path, PathBuf};

pub mod archive;
pub mod split;

pub use archive::SplitArchiveStrategy;
pub use split::SplitStrategy;

/// Processing strategy trait for complete split runs
///
/// Each strategy consumes one input export and produces the chunk files,
/// returning the run totals. What happens to the input file afterwards
/// is the strategy's concern.
pub trait ProcessingStrategy: Send + Sync {
    /// Process one input export
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV export
    ///
    /// # Returns
    ///
    /// * `Ok(SplitSummary)` if the run completed
    /// * `Err(SplitError)` on the first unrecoverable failure; chunk
    ///   files already written stay on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened, the header or a
    /// required column is missing, a fatal I/O error occurs, or (in
    /// archive mode) the post-run move fails. Malformed data rows are
    /// skipped inside the pipeline and never surface here.
    fn process(&self, input_path: &Path) -> Result<SplitSummary, SplitError>;
}

/// Create a processing strategy based on the selected run mode
///
/// This factory function instantiates the appropriate strategy at
/// runtime from the CLI mode and the resolved directories.
///
/// # Arguments
///
/// * `mode` - The run mode selected on the command line
/// * `output_dir` - Directory for chunk files
/// * `rows_per_file` - Maximum rows per chunk
/// * `archive_dir` - Archive directory (ignored in split mode)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    mode: RunMode,
    output_dir: PathBuf,
    rows_per_file: usize,
    archive_dir: PathBuf,
) -> Box<dyn ProcessingStrategy> {
    match mode {
        RunMode::Split => Box::new(SplitStrategy::new(output_dir, rows_per_file)),
        RunMode::Archive => Box::new(SplitArchiveStrategy::new(
            output_dir,
            rows_per_file,
            archive_dir,
        )),
    }
}
