//! # Adapter Catalog
//!
//! The owner-gated state of one adapter registry: the ordered adapter list and
//! one ordered asset list per adapter.
//!
//! Every mutation validates completely before it touches state, so a failed
//! call leaves the catalog unchanged.

use super::entities::AdapterEntry;
use ar_01_ordered_registry::{EntryPolicy, OrderedRegistry, OwnershipGuard};
use shared_types::{format_address, Address, RegistryError, INITIAL_ADAPTER};
use std::collections::HashMap;

/// Adapter list plus per-adapter asset lists.
#[derive(Debug, Clone)]
pub struct AdapterCatalog {
    ownership: OwnershipGuard,
    adapters: OrderedRegistry<Address>,
    assets: HashMap<Address, OrderedRegistry<Address>>,
}

impl AdapterCatalog {
    /// Empty catalog owned by `owner`.
    pub fn new(owner: Address) -> Result<Self, RegistryError> {
        Ok(Self {
            ownership: OwnershipGuard::new(owner)?,
            adapters: OrderedRegistry::new(
                EntryPolicy::unique_non_null().with_reserved(INITIAL_ADAPTER),
            ),
            assets: HashMap::new(),
        })
    }

    /// Current owner.
    pub fn owner(&self) -> Address {
        self.ownership.owner()
    }

    /// Fails with `Unauthorized` unless `caller` is the owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), RegistryError> {
        self.ownership.ensure_owner(caller)
    }

    /// Hand ownership to `new_owner`.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<Address, RegistryError> {
        self.ownership.transfer_ownership(caller, new_owner)
    }

    /// Register `adapter` seeded with `initial_assets` (duplicates kept).
    pub fn add_adapter(
        &mut self,
        adapter: Address,
        initial_assets: &[Address],
    ) -> Result<(), RegistryError> {
        self.adapters.validate(&adapter)?;

        let mut assets = OrderedRegistry::new(EntryPolicy::non_null());
        assets.extend(initial_assets.iter().copied())?;

        self.adapters.add(adapter)?;
        self.assets.insert(adapter, assets);
        Ok(())
    }

    /// Swap-pop `adapter` out of the list, discarding its assets.
    pub fn remove_adapter(&mut self, adapter: &Address) -> Result<(), RegistryError> {
        let index = self
            .adapters
            .index_of(adapter)
            .ok_or_else(|| not_registered(adapter))?;
        self.adapters.remove_at(index)?;
        self.assets.remove(adapter);
        Ok(())
    }

    /// Append `asset` to `adapter`'s list.
    pub fn add_asset(&mut self, adapter: &Address, asset: Address) -> Result<usize, RegistryError> {
        let assets = self
            .assets
            .get_mut(adapter)
            .ok_or_else(|| not_registered(adapter))?;
        Ok(assets.add(asset)?)
    }

    /// Swap-pop the asset at `index` out of `adapter`'s list.
    pub fn remove_asset(&mut self, adapter: &Address, index: usize) -> Result<Address, RegistryError> {
        let assets = self
            .assets
            .get_mut(adapter)
            .ok_or_else(|| not_registered(adapter))?;
        Ok(assets.remove_at(index)?)
    }

    /// Adapters in list order.
    pub fn adapters(&self) -> Vec<Address> {
        self.adapters.to_list()
    }

    /// True if `adapter` is registered.
    pub fn contains(&self, adapter: &Address) -> bool {
        self.adapters.contains(adapter)
    }

    /// Assets of `adapter` in list order.
    pub fn assets_of(&self, adapter: &Address) -> Result<Vec<Address>, RegistryError> {
        self.assets
            .get(adapter)
            .map(OrderedRegistry::to_list)
            .ok_or_else(|| not_registered(adapter))
    }

    /// Consistent snapshot of every adapter and its assets, in list order.
    pub fn snapshot(&self) -> Vec<AdapterEntry> {
        self.adapters
            .iter()
            .map(|id| AdapterEntry {
                id: *id,
                assets: self
                    .assets
                    .get(id)
                    .map(OrderedRegistry::to_list)
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// True if no adapter is registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

fn not_registered(adapter: &Address) -> RegistryError {
    RegistryError::NotFound(format!("adapter {}", format_address(adapter)))
}
