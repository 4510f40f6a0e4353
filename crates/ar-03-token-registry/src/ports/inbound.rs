//! # Inbound Ports (Driving Ports / API)
//!
//! Public API of the token adapter registry.

use shared_types::{Address, Bytes32, FullTokenBalance, RegistryError};

/// Token adapter registry API.
///
/// Batch mutations are atomic: either every pair is applied or none is.
pub trait TokenAdapterRegistryApi: Send + Sync {
    /// Current owner.
    fn owner(&self) -> Address;

    /// Hand ownership to `new_owner`.
    fn transfer_ownership(&self, caller: &Address, new_owner: Address)
        -> Result<(), RegistryError>;

    /// Register `adapters[i]` as the adapter for `names[i]`.
    ///
    /// # Errors
    /// - `LengthMismatch` if the slices differ in length
    /// - `InvalidAddress` for a zero adapter
    /// - `AlreadyRegistered` for a registered or repeated name
    fn add_token_adapters(
        &self,
        caller: &Address,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError>;

    /// Replace the adapters of registered names.
    fn update_token_adapters(
        &self,
        caller: &Address,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError>;

    /// Remove names. Tokens bound to a removed name fail later queries with
    /// `NotFound` until rebound.
    fn remove_token_adapters(&self, caller: &Address, names: &[Bytes32])
        -> Result<(), RegistryError>;

    /// Bind `tokens[i]` to the registered name `names[i]`.
    ///
    /// # Errors
    /// - `LengthMismatch` if the slices differ in length
    /// - `InvalidAddress` for a zero token
    /// - `NotFound` for an unregistered name
    fn add_token_adapter_names_by_hashes(
        &self,
        caller: &Address,
        tokens: &[Address],
        names: &[Bytes32],
    ) -> Result<(), RegistryError>;

    /// Registered names in list order.
    fn get_token_adapter_names(&self) -> Vec<Bytes32>;

    /// Adapter registered under `name`.
    fn get_token_adapter(&self, name: &Bytes32) -> Result<Address, RegistryError>;

    /// Name bound to `token` (the empty name hash if unbound).
    fn get_token_adapter_name(&self, token: &Address) -> Bytes32;

    /// Flatten each token into its leaf constituents, depth first.
    fn get_full_token_balances(
        &self,
        tokens: &[Address],
    ) -> Result<Vec<FullTokenBalance>, RegistryError>;
}
