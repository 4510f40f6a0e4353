//! # AR-04 Signature Verifier
//!
//! Computes EIP-712 typed-data digests for approvals and transaction batches
//! and recovers the account that signed them.
//!
//! **Architecture:** Hexagonal (ports and adapters)
//!
//! ## Digest
//!
//! ```text
//! keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ hashStruct(message))
//! ```
//!
//! The domain carries only the verifying contract address, so signatures for
//! one deployment never verify against another.
//!
//! ## Recovery
//!
//! | Check | Error |
//! |-------|-------|
//! | length != 65 | `InvalidLength` |
//! | v not in {0, 1, 27, 28} | `InvalidRecoveryId` |
//! | r or s outside [1, n-1] | `ScalarOutOfRange` |
//! | s > n/2 | `MalleableSignature` |
//!
//! Every failure surfaces as `RegistryError::InvalidSignature`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    Action, ActionType, AmountType, Approval, Input, Output, SignatureError, TransactionData,
    SIGNATURE_LENGTH,
};
pub use ports::SignatureVerifierApi;
pub use service::SignatureVerifierService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
