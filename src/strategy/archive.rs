//! Split-and-archive processing strategy
//!
//! Runs the same split as the default mode, then moves the consumed
//! input file into the archive directory. An archive failure marks the
//! run failed, but the chunk files written by the split phase stay on
//! disk.

use crate::core::splitter::CsvSplitter;
use crate::io::archive::archive_input;
use crate::strategy::ProcessingStrategy;
use crate::types::{SplitError, SplitSummary};
use std::path::{Path, PathBuf};

/// Split-then-archive strategy
///
/// The archive move only runs after the write phase has completed
/// successfully, so a failed split never relocates the input.
#[derive(Debug, Clone)]
pub struct SplitArchiveStrategy {
    splitter: CsvSplitter,
    archive_dir: PathBuf,
}

impl SplitArchiveStrategy {
    /// Create the strategy with its run configuration
    pub fn new(output_dir: PathBuf, rows_per_file: usize, archive_dir: PathBuf) -> Self {
        SplitArchiveStrategy {
            splitter: CsvSplitter::new(output_dir, rows_per_file),
            archive_dir,
        }
    }
}

impl ProcessingStrategy for SplitArchiveStrategy {
    fn process(&self, input_path: &Path) -> Result<SplitSummary, SplitError> {
        let summary = self.splitter.split(input_path)?;

        let dest_path = archive_input(input_path, &self.archive_dir)?;
        println!("Archived input file to: {}", dest_path.display());

        Ok(summary)
    }
}
