//! Run summary for a completed split
//!
//! The summary is returned by the splitter and the processing strategies
//! so callers (and tests) can check totals without re-reading the output
//! directory.

/// Totals for one completed split run
///
/// `total_rows` counts records written across all chunks; `skipped_rows`
/// counts input rows dropped by the short-row policy. The sum of the two
/// equals the number of data rows consumed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitSummary {
    /// Records written across all chunk files
    pub total_rows: u64,

    /// Input rows skipped because they were too short to supply both
    /// required fields
    pub skipped_rows: u64,

    /// Number of chunk files created
    pub files_created: u32,
}
