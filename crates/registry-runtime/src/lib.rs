//! # Adapter Registry Runtime
//!
//! Wires the registries into one process: configuration, tracing, the
//! component container and the seed bootstrap.
//!
//! ## Modular Structure
//!
//! - `config` - TOML file plus environment overrides
//! - `telemetry` - `tracing-subscriber` setup (pretty or JSON)
//! - `seed` - static adapters and registrations replayed at startup
//! - `container` - registry instances sharing in-memory adapter directories
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (file named by `AR_CONFIG`, then environment)
//! 2. Validate owner and budgets
//! 3. Initialize tracing
//! 4. Build the container and apply the seed
//! 5. Serve the optional `AR_QUERY_ACCOUNT` query

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod container;
pub mod seed;
pub mod telemetry;

pub use config::{ConfigError, RegistryConfig, SignatureConfig, TelemetryConfig};
pub use container::{ContainerSummary, RegistryContainer, RuntimeError};
pub use seed::{Seed, SeedError};
pub use telemetry::{init_tracing, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
