//! Timestamp error types
//!
//! Error codes:
//! - STAMP_INVALID_IDENTIFIER_FORMAT (ERROR severity)
//! - STAMP_TIMESTAMP_OUT_OF_RANGE (ERROR severity)
//! - STAMP_INVALID_DECIMAL_TIMESTAMP (ERROR severity)

use thiserror::Error;

use crate::observability::Severity;

/// Result type for timestamp operations
pub type TimestampResult<T> = Result<T, TimestampError>;

/// Errors raised while interpreting identifiers and timestamps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("Invalid identifier format '{input}': {reason}")]
    InvalidIdentifierFormat { input: String, reason: String },

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    #[error("Invalid decimal timestamp '{input}': {reason}")]
    InvalidDecimalTimestamp { input: String, reason: String },
}

impl TimestampError {
    pub(crate) fn invalid_identifier(input: &str, reason: impl Into<String>) -> Self {
        TimestampError::InvalidIdentifierFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_decimal(input: &str, reason: impl Into<String>) -> Self {
        TimestampError::InvalidDecimalTimestamp {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            TimestampError::InvalidIdentifierFormat { .. } => "STAMP_INVALID_IDENTIFIER_FORMAT",
            TimestampError::TimestampOutOfRange(_) => "STAMP_TIMESTAMP_OUT_OF_RANGE",
            TimestampError::InvalidDecimalTimestamp { .. } => "STAMP_INVALID_DECIMAL_TIMESTAMP",
        }
    }

    /// Every timestamp error fails the operation without affecting anything else
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}
