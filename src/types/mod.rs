//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: credential record and required column names
//! - `summary`: totals for a completed run
//! - `error`: error types for the export splitter

pub mod error;
pub mod record;
pub mod summary;

pub use error::SplitError;
pub use record::{
    CredentialRecord, EMAIL_COLUMN, PASSWORD_COLUMN, RECOVERY_COLUMN, REQUIRED_COLUMNS,
};
pub use summary::SplitSummary;
