//! # Ports Layer
//!
//! Hexagonal architecture ports for the token adapter registry.

pub mod inbound;
pub mod outbound;

pub use inbound::TokenAdapterRegistryApi;
pub use outbound::TokenAdapter;
