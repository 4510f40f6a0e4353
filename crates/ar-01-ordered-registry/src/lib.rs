//! # AR-01 Ordered Registry
//!
//! Registry primitives shared by the adapter and token registries.
//!
//! **Architecture:** Domain-only (no ports; pure in-memory state)
//!
//! ## Purpose
//!
//! - [`OrderedRegistry`]: append-on-insert, swap-pop-on-delete list with
//!   O(1) membership tests and O(1) removal
//! - [`OwnershipGuard`]: single-owner access control with transfer
//!
//! ## Ordering Law
//!
//! Removal overwrites the target slot with the last element and truncates
//! by one. Untouched elements keep their relative order; the moved element
//! does not.
//!
//! ```text
//! [A, B, C, D]  remove_at(1)  →  [A, D, C]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::{EntryPolicy, ListError, OrderedRegistry, OwnershipGuard, RegistryEntry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
