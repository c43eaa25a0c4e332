//! I/O module
//!
//! Handles input parsing and the archive move.
//!
//! # Components
//!
//! - `header` - comment-preamble skipping and required-column checks
//! - `csv_format` - CSV row deserialization and output line rendering
//! - `reader` - streaming credential reader with iterator interface
//! - `archive` - relocation of the consumed input file

pub mod archive;
pub mod csv_format;
pub mod header;
pub mod reader;

pub use archive::archive_input;
pub use csv_format::{convert_csv_row, render_line, CsvCredentialRow};
pub use header::{read_header_line, verify_required_columns, COMMENT_PREFIX};
pub use reader::CredentialReader;
