//! # Ports Layer
//!
//! The verifier has no outbound dependencies; only the driving API is
//! declared.

pub mod inbound;

pub use inbound::SignatureVerifierApi;
