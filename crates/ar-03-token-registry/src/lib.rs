//! # AR-03 Token Adapter Registry
//!
//! Maps logical adapter names to token adapters and tokens to names, and
//! flattens composite tokens into their leaf constituents.
//!
//! **Architecture:** Hexagonal (ports and adapters)
//!
//! ## Resolution
//!
//! ```text
//! token ──name_by_token──→ name (default: empty hash)
//!                            │
//!                            └──adapter_by_name──→ adapter address
//!                                                     │
//!                                  AdapterDirectory::resolve
//!                                                     ▼
//!                                      TokenAdapter::{get_metadata,
//!                                         get_underlying_components}
//! ```
//!
//! The empty name hash is the ERC20 leaf adapter. Tokens resolving to it are
//! never asked for components.
//!
//! ## Guards
//!
//! | Guard | Error |
//! |-------|-------|
//! | token on its own ancestor path | `DecompositionCycleOrTooDeep` |
//! | depth > `max_decomposition_depth` | `DecompositionCycleOrTooDeep` |
//! | leaves per query > `max_leaves` | `BudgetExceeded` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::StaticTokenAdapter;
pub use algorithms::Decomposer;
pub use domain::{TokenCatalog, TokenResolver};
pub use ports::{TokenAdapter, TokenAdapterRegistryApi};
pub use service::TokenAdapterRegistryService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
