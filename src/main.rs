//! Credential Export Splitter CLI
//!
//! Command-line interface for splitting credential CSV exports into
//! pipe-delimited chunk files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export.csv
//! cargo run -- export.csv --output-dir processed --rows 1000
//! cargo run -- --mode archive export.csv --archive-dir processed
//! ```
//!
//! The program reads credential records from the input CSV export,
//! extracts the email, password, and recovery email columns, and writes
//! them as pipe-delimited lines split across numbered output files. In
//! archive mode the consumed input file is moved into the archive
//! directory after a successful run.
//!
//! # Run Modes
//!
//! - **split**: write chunk files and leave the input in place (default)
//! - **archive**: write chunk files, then move the input into the
//!   archive directory
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input file not found, missing header or column, I/O
//!   failure, archive move failure)

use cred_splitter::cli;
use cred_splitter::strategy;
use cred_splitter::types::SplitError;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Pre-flight: the input must exist before any directory is created
    let input_path = args.input_path();
    if !input_path.exists() {
        eprintln!("Error: {}", SplitError::input_not_found(&input_path));
        process::exit(1);
    }

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = strategy::create_strategy(
        args.mode,
        args.output_dir(),
        args.rows,
        args.archive_dir(),
    );

    // Process the export; progress lines go to stdout, failures to stderr
    if let Err(e) = strategy.process(&input_path) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
