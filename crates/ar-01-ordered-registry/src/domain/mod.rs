//! # Domain Module
//!
//! Ordered list and ownership primitives.

pub mod errors;
pub mod ordered_registry;
pub mod ownership;

pub use errors::ListError;
pub use ordered_registry::{EntryPolicy, OrderedRegistry, RegistryEntry};
pub use ownership::OwnershipGuard;
