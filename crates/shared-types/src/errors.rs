//! # Error Types
//!
//! The registry error taxonomy. Every variant aborts the entire enclosing
//! operation; nothing is retried or partially applied.

use crate::encoding::format_address;
use crate::entities::Address;
use thiserror::Error;

/// Errors returned by every registry, resolver and verifier operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Owner-gated call from an account that is not the owner.
    #[error("Unauthorized: {caller} is not the owner")]
    Unauthorized {
        /// The rejected caller.
        caller: String,
    },

    /// Zero or reserved address where one is not allowed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Duplicate adapter or adapter name.
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    /// Unknown adapter, adapter name or token reference.
    #[error("Not found: {0}")]
    NotFound(String),

    /// List index beyond the current length.
    #[error("Index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current length.
        len: usize,
    },

    /// Decomposition revisited an ancestor or went deeper than allowed.
    #[error("Decomposition cycle or depth limit reached at {token} (depth {depth})")]
    DecompositionCycleOrTooDeep {
        /// Token at which the guard tripped.
        token: String,
        /// Depth of that token below the queried one.
        depth: usize,
    },

    /// Malformed signature bytes.
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// A nested adapter call reverted or returned an invalid result.
    #[error("Adapter call failed on {adapter}: {reason}")]
    AdapterCallFailed {
        /// Adapter address.
        adapter: String,
        /// Failure description.
        reason: String,
    },

    /// Paired input arrays have different lengths.
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },

    /// A query would exceed its per-call resource budget.
    #[error("Query budget exceeded: requires {required}, limit {limit}")]
    BudgetExceeded {
        /// Configured limit.
        limit: usize,
        /// Amount the query would need.
        required: usize,
    },
}

impl RegistryError {
    /// `Unauthorized` for `caller`.
    pub fn unauthorized(caller: &Address) -> Self {
        Self::Unauthorized {
            caller: format_address(caller),
        }
    }

    /// `AdapterCallFailed` for `adapter`.
    pub fn adapter_call(adapter: &Address, reason: impl std::fmt::Display) -> Self {
        Self::AdapterCallFailed {
            adapter: format_address(adapter),
            reason: reason.to_string(),
        }
    }

    /// Fails with `LengthMismatch` unless both lengths are equal.
    pub fn ensure_same_length(left: usize, right: usize) -> Result<(), Self> {
        if left != right {
            return Err(Self::LengthMismatch { left, right });
        }
        Ok(())
    }
}

/// Errors raised by adapter implementations.
///
/// Registries never inspect these; they are wrapped into
/// [`RegistryError::AdapterCallFailed`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The call reverted.
    #[error("reverted: {0}")]
    Reverted(String),

    /// The adapter does not support the requested token or asset.
    #[error("unsupported: {0}")]
    Unsupported(String),
}
