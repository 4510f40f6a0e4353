//! # Signature Errors
//!
//! Reasons a signature is rejected. All of them surface to callers as
//! [`RegistryError::InvalidSignature`].

use shared_types::RegistryError;
use thiserror::Error;

/// Errors raised while decoding a signature or recovering its signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Not exactly 65 bytes.
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// R or S outside `[1, n-1]`.
    #[error("Signature component {0} out of range")]
    ScalarOutOfRange(&'static str),

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Enum discriminant outside the declared range.
    #[error("Unknown {kind} value: {value}")]
    UnknownDiscriminant {
        /// Enum name
        kind: &'static str,
        /// Rejected value
        value: u8,
    },
}

impl From<SignatureError> for RegistryError {
    fn from(err: SignatureError) -> Self {
        RegistryError::InvalidSignature(err.to_string())
    }
}
