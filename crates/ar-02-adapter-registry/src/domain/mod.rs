//! # Domain Layer
//!
//! Adapter catalog state and aggregation planning types.

pub mod catalog;
pub mod entities;

pub use catalog::AdapterCatalog;
pub use entities::{planned_calls, AdapterEntry, AggregationKind};
