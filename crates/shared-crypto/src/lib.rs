//! # Shared Crypto - Hashing and Signing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Typed-data digests, address derivation |
//! | `ecdsa` | secp256k1 | Recoverable `r‖s‖v` signatures over digests |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization (EIP-2)
//! - **Keccak-256**: The pre-standard SHA-3 variant used for Ethereum hashing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{address_from_verifying_key, RecoverableSignature, Secp256k1KeyPair};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_concat, Keccak256Hasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
