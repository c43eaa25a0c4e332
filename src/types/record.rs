//! Credential record types for the export splitter
//!
//! This module defines the domain record extracted from each CSV row
//! and the constants naming the required export columns.

/// Exact header name of the email column in the export.
pub const EMAIL_COLUMN: &str = "Email Address [Required]";

/// Exact header name of the password column in the export.
pub const PASSWORD_COLUMN: &str = "Password [Required]";

/// Exact header name of the recovery email column in the export.
pub const RECOVERY_COLUMN: &str = "Recovery Email";

/// The three column names every input header must contain.
pub const REQUIRED_COLUMNS: [&str; 3] = [EMAIL_COLUMN, PASSWORD_COLUMN, RECOVERY_COLUMN];

/// Credential record extracted from one CSV row
///
/// Represents the subset of an account export row that is carried into
/// the pipe-delimited output. The recovery email is optional: a row
/// whose recovery column is missing or empty yields `None`, and the
/// rendered line omits the trailing field entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Primary account email address
    pub email: String,

    /// Account password, copied verbatim from the export
    pub password: String,

    /// Recovery email address, absent when the export cell is empty
    pub recovery_email: Option<String>,
}

impl CredentialRecord {
    /// Create a record, normalizing an empty recovery email to `None`
    ///
    /// # Arguments
    ///
    /// * `email` - Primary account email address
    /// * `password` - Account password
    /// * `recovery_email` - Recovery email cell, if the row had one
    pub fn new(email: String, password: String, recovery_email: Option<String>) -> Self {
        CredentialRecord {
            email,
            password,
            recovery_email: recovery_email.filter(|value| !value.is_empty()),
        }
    }
}
