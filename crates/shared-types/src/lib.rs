//! # Shared Types Crate
//!
//! This crate contains the primitives, data model and error taxonomy used by
//! every registry crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Address Identity**: Adapters and tokens are identified by 20-byte
//!   addresses; live handles are obtained through an [`AdapterDirectory`].
//! - **One Error Taxonomy**: Every operation fails with a [`RegistryError`]
//!   and aborts as a whole.

pub mod budget;
pub mod directory;
pub mod encoding;
pub mod entities;
pub mod errors;

pub use budget::QueryBudget;
pub use directory::{AdapterDirectory, InMemoryAdapterDirectory};
pub use encoding::{format_address, format_bytes32, parse_address, parse_bytes32, PrefixedHex};
pub use entities::*;
pub use errors::*;
