//! # List Errors
//!
//! Errors raised by [`OrderedRegistry`](super::OrderedRegistry) operations.

use shared_types::RegistryError;
use thiserror::Error;

/// Ordered list error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Null entry where the policy rejects it.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Entry is one of the policy's reserved values.
    #[error("Reserved entry: {0}")]
    Reserved(String),

    /// Entry already present in a unique list.
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    /// Index beyond the current length.
    #[error("Index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current length
        len: usize,
    },

    /// Entry not present.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ListError> for RegistryError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::InvalidEntry(entry) => RegistryError::InvalidAddress(entry),
            ListError::Reserved(entry) => {
                RegistryError::InvalidAddress(format!("{} is reserved", entry))
            }
            ListError::AlreadyRegistered(entry) => RegistryError::AlreadyRegistered(entry),
            ListError::IndexOutOfRange { index, len } => {
                RegistryError::IndexOutOfRange { index, len }
            }
            ListError::NotFound(entry) => RegistryError::NotFound(entry),
        }
    }
}
