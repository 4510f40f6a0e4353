//! # Inbound Ports (Driving Ports / API)
//!
//! Public API of the adapter registry. Mutations take the caller explicitly
//! and are owner-gated; reads need no authorization.

use shared_types::{AdapterView, Address, RegistryError};

/// Adapter registry API.
pub trait AdapterRegistryApi: Send + Sync {
    // =========================================================================
    // Ownership
    // =========================================================================

    /// Current owner.
    fn owner(&self) -> Address;

    /// Hand ownership to `new_owner`.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidAddress` if `new_owner` is zero
    fn transfer_ownership(&self, caller: &Address, new_owner: Address)
        -> Result<(), RegistryError>;

    // =========================================================================
    // Catalog mutations (owner only)
    // =========================================================================

    /// Register `adapter` with an initial asset list.
    ///
    /// # Errors
    /// - `InvalidAddress` if `adapter` is zero or the initial-adapter sentinel,
    ///   or if any asset is zero
    /// - `AlreadyRegistered` if `adapter` is present
    fn add_adapter(
        &self,
        caller: &Address,
        adapter: Address,
        initial_assets: &[Address],
    ) -> Result<(), RegistryError>;

    /// Swap-pop `adapter` out of the list.
    fn remove_adapter(&self, caller: &Address, adapter: &Address) -> Result<(), RegistryError>;

    /// Append `asset` to `adapter`'s list. Duplicates are allowed.
    fn add_adapter_asset(
        &self,
        caller: &Address,
        adapter: &Address,
        asset: Address,
    ) -> Result<(), RegistryError>;

    /// Swap-pop the asset at `index` out of `adapter`'s list.
    fn remove_adapter_asset(
        &self,
        caller: &Address,
        adapter: &Address,
        index: usize,
    ) -> Result<(), RegistryError>;

    // =========================================================================
    // Reads
    // =========================================================================

    /// Registered adapters in list order.
    fn get_adapters(&self) -> Vec<Address>;

    /// Assets of `adapter` in list order.
    fn get_adapter_assets(&self, adapter: &Address) -> Result<Vec<Address>, RegistryError>;

    /// One view per adapter with one balance per asset.
    fn get_balances(&self, account: &Address) -> Result<Vec<AdapterView>, RegistryError>;

    /// One view per adapter with one rate per asset.
    fn get_rates(&self) -> Result<Vec<AdapterView>, RegistryError>;

    /// Balances and rates in a single pass.
    fn get_balances_and_rates(&self, account: &Address)
        -> Result<Vec<AdapterView>, RegistryError>;
}
