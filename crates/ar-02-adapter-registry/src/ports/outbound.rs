//! # Outbound Ports (Driven Ports / SPI)
//!
//! The capability interface every protocol adapter implements. The registry
//! resolves adapter addresses to `Arc<dyn ProtocolAdapter>` through an
//! [`AdapterDirectory`](shared_types::AdapterDirectory) and never knows the
//! concrete protocol behind one.

use shared_types::{AdapterError, Address, Balance, Rate};

/// A protocol adapter.
///
/// Implementations must be thread-safe; they are invoked without any registry
/// lock held and may call back into the registry for reads.
pub trait ProtocolAdapter: Send + Sync {
    /// Display name reported in every [`AdapterView`](shared_types::AdapterView).
    fn name(&self) -> Result<String, AdapterError>;

    /// Amount of `asset` held by `account`. Zero holdings are reported as a
    /// zero amount, not an error.
    fn get_balance(&self, asset: &Address, account: &Address) -> Result<Balance, AdapterError>;

    /// Exchange rate of `asset` against its constituents, scaled by `1e18`.
    fn get_rate(&self, asset: &Address) -> Result<Rate, AdapterError>;
}
