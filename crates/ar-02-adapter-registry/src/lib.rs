//! # AR-02 Adapter Registry
//!
//! Owner-gated catalog of protocol adapters, each with an ordered asset list,
//! plus read queries that fan out across every registered adapter.
//!
//! **Architecture:** Hexagonal (ports and adapters)
//!
//! ```text
//! caller ──AdapterRegistryApi──→ AdapterRegistryService
//!                                    │  snapshot (read lock)
//!                                    ▼
//!                           AdapterDirectory::resolve(id)
//!                                    │
//!                                    ▼
//!                  ProtocolAdapter::{name, get_balance, get_rate}
//! ```
//!
//! ## Aggregation Shape
//!
//! One [`AdapterView`](shared_types::AdapterView) per adapter in adapter-list
//! order; within a view, one entry per asset in asset-list order. Zero
//! holdings still appear with amount 0. Any failing adapter call aborts the
//! whole query.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ar_02_adapter_registry::{AdapterRegistryApi, AdapterRegistryService};
//!
//! let registry = AdapterRegistryService::new(owner, directory, QueryBudget::default())?;
//! registry.add_adapter(&owner, compound_adapter, &[c_dai, c_usdc])?;
//! let views = registry.get_balances_and_rates(&account)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::StaticProtocolAdapter;
pub use domain::{AdapterCatalog, AdapterEntry, AggregationKind};
pub use ports::{AdapterRegistryApi, ProtocolAdapter};
pub use service::AdapterRegistryService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
