//! # Ports Layer
//!
//! Hexagonal architecture ports for the adapter registry.

pub mod inbound;
pub mod outbound;

pub use inbound::AdapterRegistryApi;
pub use outbound::ProtocolAdapter;
