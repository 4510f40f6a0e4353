//! # Domain Layer
//!
//! Token adapter catalog and the resolver snapshot used by queries.

pub mod catalog;

pub use catalog::{TokenCatalog, TokenResolver};
