//! Split-only processing strategy
//!
//! The default run mode: split the export into chunk files and leave the
//! input where it is.

use crate::core::splitter::CsvSplitter;
use crate::strategy::ProcessingStrategy;
use crate::types::{SplitError, SplitSummary};
use std::path::{Path, PathBuf};

/// Split-only strategy
///
/// Thin orchestration over [`CsvSplitter`]; the input file is left
/// untouched after the run.
#[derive(Debug, Clone)]
pub struct SplitStrategy {
    splitter: CsvSplitter,
}

impl SplitStrategy {
    /// Create the strategy with its run configuration
    pub fn new(output_dir: PathBuf, rows_per_file: usize) -> Self {
        SplitStrategy {
            splitter: CsvSplitter::new(output_dir, rows_per_file),
        }
    }
}

impl ProcessingStrategy for SplitStrategy {
    fn process(&self, input_path: &Path) -> Result<SplitSummary, SplitError> {
        self.splitter.split(input_path)
    }
}
