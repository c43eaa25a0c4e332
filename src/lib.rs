//! Credential Export Splitter Library
//! # Overview
//!
//! This library splits a CSV export of account credential records into
//! capped, numbered, pipe-delimited text files, with an optional archive
//! step that relocates the consumed input afterwards.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (CredentialRecord, SplitSummary, SplitError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::splitter`] - Orchestration of one split run
//!   - [`core::chunk_writer`] - Chunk rollover and output writing
//! - [`io`] - Input handling and the archive move:
//!   - [`io::header`] - Comment-preamble skipping and column checks
//!   - [`io::reader`] - Streaming credential reader
//!   - [`io::archive`] - Post-run input relocation
//! - [`strategy`] - Run modes selected at runtime (split, split-and-archive)
//!
//! # Processing model
//!
//! A run is one sequential pass: resolve the header, stream data rows,
//! write each extracted record to the current chunk, roll over every
//! `rows_per_file` rows, close the final chunk, and (in archive mode)
//! move the input into the archive directory. Rows too short to supply
//! the email and password columns are skipped silently.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{ChunkWriter, CsvSplitter};
pub use io::{archive_input, CredentialReader};
pub use strategy::{create_strategy, ProcessingStrategy};
pub use types::{CredentialRecord, SplitError, SplitSummary};
