//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod static_adapter;

pub use static_adapter::StaticProtocolAdapter;
