//! # Outbound Ports (Driven Ports / SPI)
//!
//! Capability interface of token adapters. One adapter serves every token
//! bound to its name; the ERC20 leaf adapter (empty name hash) only ever sees
//! `get_metadata`.

use shared_types::{AdapterError, Address, Component, Erc20Metadata};

/// A token adapter.
pub trait TokenAdapter: Send + Sync {
    /// ERC20 metadata of `token`.
    fn get_metadata(&self, token: &Address) -> Result<Erc20Metadata, AdapterError>;

    /// Direct constituents of `token` in the order the adapter reports them,
    /// each with a share scaled by `1e18`. An empty list marks a leaf.
    fn get_underlying_components(&self, token: &Address) -> Result<Vec<Component>, AdapterError>;
}
