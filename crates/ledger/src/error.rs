//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when an amount string is not a valid, non-negative number.
//! - [`IndexOutOfRange`] thrown when a row index does not address a record.
//! - [`Io`] and [`Json`] thrown when a document cannot be written or read back.
//!
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`IndexOutOfRange`]: LedgerError::IndexOutOfRange
//!  [`Io`]: LedgerError::Io
//!  [`Json`]: LedgerError::Json
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Row {index} out of range (rows: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerError {
    /// Returns `true` for failures raised while reading or writing a document.
    #[must_use]
    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_))
    }
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (
                Self::IndexOutOfRange { index: a, len: la },
                Self::IndexOutOfRange { index: b, len: lb },
            ) => a == b && la == lb,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
