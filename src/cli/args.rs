use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Sample export used when no input file is given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "data/origin/5k-mht3sc.csv";

const DEFAULT_SPLIT_OUTPUT_DIR: &str = "processed";
const DEFAULT_ARCHIVE_OUTPUT_DIR: &str = "output";
const DEFAULT_ARCHIVE_DIR: &str = "processed";

/// Split a credential CSV export into pipe-delimited chunk files
#[derive(Parser, Debug)]
#[command(name = "cred-splitter")]
#[command(
    about = "Split a credential CSV export into pipe-delimited chunk files",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV export path
    #[arg(
        value_name = "INPUT",
        help = "Path to the input CSV file (defaults to the sample export)"
    )]
    pub input_file: Option<PathBuf>,

    /// Run mode: split only, or split and archive the input afterwards
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "split",
        help = "Run mode: 'split' to only write chunks, 'archive' to also move the input"
    )]
    pub mode: RunMode,

    /// Output directory for chunk files
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        help = "Output directory for processed files (default: 'processed', or 'output' in archive mode)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Rows per output file
    #[arg(
        long = "rows",
        value_name = "COUNT",
        default_value_t = 1000,
        help = "Number of rows per output file"
    )]
    pub rows: usize,

    /// Archive directory (archive mode only)
    #[arg(
        long = "archive-dir",
        value_name = "DIR",
        help = "Directory the input file is moved into after a successful run (default: 'processed')"
    )]
    pub archive_dir: Option<PathBuf>,
}

/// Available run modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Write chunk files and leave the input in place
    Split,
    /// Write chunk files, then move the input into the archive directory
    Archive,
}

impl CliArgs {
    /// Resolve the input path, falling back to the sample export
    pub fn input_path(&self) -> PathBuf {
        self.input_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
    }

    /// Resolve the output directory
    ///
    /// The default differs by mode: `processed` for a split-only run,
    /// `output` for an archive run (whose archive directory defaults to
    /// `processed` instead).
    pub fn output_dir(&self) -> PathBuf {
        match (&self.output_dir, self.mode) {
            (Some(dir), _) => dir.clone(),
            (None, RunMode::Split) => PathBuf::from(DEFAULT_SPLIT_OUTPUT_DIR),
            (None, RunMode::Archive) => PathBuf::from(DEFAULT_ARCHIVE_OUTPUT_DIR),
        }
    }

    /// Resolve the archive directory (meaningful in archive mode only)
    pub fn archive_dir(&self) -> PathBuf {
        self.archive_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Mode parsing tests
    #[rstest]
    #[case::default_mode(&["program"], RunMode::Split)]
    #[case::explicit_split(&["program", "--mode", "split"], RunMode::Split)]
    #[case::explicit_archive(&["program", "--mode", "archive"], RunMode::Archive)]
    fn test_mode_parsing(#[case] args: &[&str], #[case] expected: RunMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.mode, expected);
    }

    // Input path resolution tests
    #[rstest]
    #[case::default_input(&["program"], DEFAULT_INPUT_FILE)]
    #[case::explicit_input(&["program", "export.csv"], "export.csv")]
    fn test_input_path_resolution(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_path(), PathBuf::from(expected));
    }

    // Output directory defaults depend on the run mode
    #[rstest]
    #[case::split_default(&["program"], "processed")]
    #[case::archive_default(&["program", "--mode", "archive"], "output")]
    #[case::split_explicit(&["program", "--output-dir", "chunks"], "chunks")]
    #[case::archive_explicit(
        &["program", "--mode", "archive", "--output-dir", "chunks"],
        "chunks"
    )]
    fn test_output_dir_resolution(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.output_dir(), PathBuf::from(expected));
    }

    // Archive directory resolution tests
    #[rstest]
    #[case::default_archive(&["program", "--mode", "archive"], "processed")]
    #[case::explicit_archive(
        &["program", "--mode", "archive", "--archive-dir", "done"],
        "done"
    )]
    fn test_archive_dir_resolution(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.archive_dir(), PathBuf::from(expected));
    }

    // Rows option tests
    #[rstest]
    #[case::default_rows(&["program"], 1000)]
    #[case::custom_rows(&["program", "--rows", "250"], 250)]
    #[case::zero_parses(&["program", "--rows", "0"], 0)] // rejected later by validation
    fn test_rows_parsing(#[case] args: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.rows, expected);
    }

    // Error handling tests
    #[rstest]
    #[case::invalid_mode(&["program", "--mode", "both"])]
    #[case::non_numeric_rows(&["program", "--rows", "many"])]
    #[case::negative_rows(&["program", "--rows", "-5"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
