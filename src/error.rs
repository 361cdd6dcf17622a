//! Error types for format calls.

use thiserror::Error;

/// Errors that can occur when validating the inputs of a format call.
///
/// The tokenization and resolution core never errors: unknown tokens pass
/// through as literal text and unregistered locale codes fall back to the
/// default locale table. Both variants here are raised before tokenization
/// runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("format pattern must be a non-empty string")]
    EmptyFormat,

    #[error("date must be a calendar time, Unix timestamp, or ISO-8601 string: {reason}")]
    InvalidDate { reason: String },
}

impl FormatError {
    pub(crate) fn invalid_date(reason: impl Into<String>) -> Self {
        FormatError::InvalidDate {
            reason: reason.into(),
        }
    }
}
