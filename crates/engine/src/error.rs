//! The module contains the errors the ledger can throw.
//!
//! The errors are:
//!
//! - [`Storage`] thrown when the ledger file is missing or malformed.
//! - [`IndexOutOfRange`] thrown when an entry position does not exist.
//! - [`Parse`] thrown when a stored value cannot be interpreted.
//!
//!  [`Storage`]: LedgerError::Storage
//!  [`IndexOutOfRange`]: LedgerError::IndexOutOfRange
//!  [`Parse`]: LedgerError::Parse
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl LedgerError {
    /// Returns `true` for failures of the backing file itself.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Csv(_))
    }
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Storage(a), Self::Storage(b)) => a == b,
            (
                Self::IndexOutOfRange { index: a, len: x },
                Self::IndexOutOfRange { index: b, len: y },
            ) => a == b && x == y,
            (Self::Parse(a), Self::Parse(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
