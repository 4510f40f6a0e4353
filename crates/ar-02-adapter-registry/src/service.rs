//! # Adapter Registry Service
//!
//! Application service implementing [`AdapterRegistryApi`].
//!
//! ## Locking
//!
//! The catalog sits behind a `parking_lot::RwLock`. Mutations hold the write
//! lock for the whole operation. Aggregation queries take the read lock only
//! long enough to snapshot the catalog, then fan out to adapters with no lock
//! held, so an adapter may call back into the registry for reads.

use crate::domain::{planned_calls, AdapterCatalog, AdapterEntry, AggregationKind};
use crate::ports::inbound::AdapterRegistryApi;
use crate::ports::outbound::ProtocolAdapter;
use parking_lot::RwLock;
use shared_types::{
    format_address, AdapterDirectory, AdapterView, Address, QueryBudget, RegistryError,
};
use tracing::{debug, info, warn};

/// Adapter registry backed by an adapter directory `D`.
pub struct AdapterRegistryService<D>
where
    D: AdapterDirectory<dyn ProtocolAdapter>,
{
    catalog: RwLock<AdapterCatalog>,
    directory: D,
    budget: QueryBudget,
}

impl<D> AdapterRegistryService<D>
where
    D: AdapterDirectory<dyn ProtocolAdapter>,
{
    /// Empty registry owned by `owner`.
    pub fn new(owner: Address, directory: D, budget: QueryBudget) -> Result<Self, RegistryError> {
        Ok(Self {
            catalog: RwLock::new(AdapterCatalog::new(owner)?),
            directory,
            budget,
        })
    }

    /// Registry owned by `owner` with `adapters[i]` registered with
    /// `assets[i]`. Any invalid pair fails the whole construction.
    pub fn with_adapters(
        owner: Address,
        directory: D,
        budget: QueryBudget,
        adapters: &[Address],
        assets: &[Vec<Address>],
    ) -> Result<Self, RegistryError> {
        RegistryError::ensure_same_length(adapters.len(), assets.len())?;

        let mut catalog = AdapterCatalog::new(owner)?;
        for (adapter, initial_assets) in adapters.iter().zip(assets) {
            catalog.add_adapter(*adapter, initial_assets)?;
        }

        info!(
            "[ar-02] Registry created with {} adapter(s), owner {}",
            catalog.len(),
            format_address(&owner)
        );

        Ok(Self {
            catalog: RwLock::new(catalog),
            directory,
            budget,
        })
    }

    /// Per-query resource limits.
    pub fn budget(&self) -> QueryBudget {
        self.budget
    }

    /// The directory adapters are resolved through.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Runs an owner-gated mutation under the write lock.
    fn mutate<T>(
        &self,
        caller: &Address,
        operation: &str,
        apply: impl FnOnce(&mut AdapterCatalog) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        let mut catalog = self.catalog.write();
        catalog
            .ensure_owner(caller)
            .and_then(|_| apply(&mut *catalog))
            .map_err(|e| {
                warn!("[ar-02] {} rejected: {}", operation, e);
                e
            })
    }

    fn aggregate(&self, kind: AggregationKind) -> Result<Vec<AdapterView>, RegistryError> {
        let entries = self.catalog.read().snapshot();

        let required = planned_calls(&entries, kind);
        self.budget.check_adapter_calls(required).map_err(|e| {
            warn!("[ar-02] Aggregation refused: {}", e);
            e
        })?;

        debug!(
            "[ar-02] Aggregating {:?} over {} adapter(s), {} call(s)",
            kind,
            entries.len(),
            required
        );

        entries
            .iter()
            .map(|entry| self.collect_view(entry, kind))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!("[ar-02] Aggregation aborted: {}", e);
                e
            })
    }

    fn collect_view(
        &self,
        entry: &AdapterEntry,
        kind: AggregationKind,
    ) -> Result<AdapterView, RegistryError> {
        let id = &entry.id;
        let adapter = self
            .directory
            .resolve(id)
            .ok_or_else(|| RegistryError::adapter_call(id, "no adapter deployed at address"))?;

        let mut view = AdapterView {
            name: adapter
                .name()
                .map_err(|e| RegistryError::adapter_call(id, e))?,
            ..AdapterView::default()
        };

        for asset in &entry.assets {
            if let Some(account) = kind.account() {
                let balance = adapter
                    .get_balance(asset, &account)
                    .map_err(|e| RegistryError::adapter_call(id, e))?;
                if balance.asset != *asset {
                    return Err(RegistryError::adapter_call(
                        id,
                        format!(
                            "balance reported for {} instead of {}",
                            format_address(&balance.asset),
                            format_address(asset)
                        ),
                    ));
                }
                view.balances.push(balance);
            }

            if kind.wants_rates() {
                let rate = adapter
                    .get_rate(asset)
                    .map_err(|e| RegistryError::adapter_call(id, e))?;
                if rate.asset != *asset {
                    return Err(RegistryError::adapter_call(
                        id,
                        format!(
                            "rate reported for {} instead of {}",
                            format_address(&rate.asset),
                            format_address(asset)
                        ),
                    ));
                }
                view.rates.push(rate);
            }
        }

        Ok(view)
    }
}

impl<D> AdapterRegistryApi for AdapterRegistryService<D>
where
    D: AdapterDirectory<dyn ProtocolAdapter>,
{
    fn owner(&self) -> Address {
        self.catalog.read().owner()
    }

    fn transfer_ownership(
        &self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        let mut catalog = self.catalog.write();
        catalog.transfer_ownership(caller, new_owner).map_err(|e| {
            warn!("[ar-02] Ownership transfer rejected: {}", e);
            e
        })?;
        Ok(())
    }

    fn add_adapter(
        &self,
        caller: &Address,
        adapter: Address,
        initial_assets: &[Address],
    ) -> Result<(), RegistryError> {
        self.mutate(caller, "addAdapter", |catalog| {
            catalog.add_adapter(adapter, initial_assets)
        })?;
        info!(
            "[ar-02] Adapter added: {} ({} asset(s))",
            format_address(&adapter),
            initial_assets.len()
        );
        Ok(())
    }

    fn remove_adapter(&self, caller: &Address, adapter: &Address) -> Result<(), RegistryError> {
        self.mutate(caller, "removeAdapter", |catalog| {
            catalog.remove_adapter(adapter)
        })?;
        info!("[ar-02] Adapter removed: {}", format_address(adapter));
        Ok(())
    }

    fn add_adapter_asset(
        &self,
        caller: &Address,
        adapter: &Address,
        asset: Address,
    ) -> Result<(), RegistryError> {
        let index = self.mutate(caller, "addAdapterAsset", |catalog| {
            catalog.add_asset(adapter, asset)
        })?;
        info!(
            "[ar-02] Asset {} added to {} at index {}",
            format_address(&asset),
            format_address(adapter),
            index
        );
        Ok(())
    }

    fn remove_adapter_asset(
        &self,
        caller: &Address,
        adapter: &Address,
        index: usize,
    ) -> Result<(), RegistryError> {
        let asset = self.mutate(caller, "removeAdapterAsset", |catalog| {
            catalog.remove_asset(adapter, index)
        })?;
        info!(
            "[ar-02] Asset {} removed from {} (index {})",
            format_address(&asset),
            format_address(adapter),
            index
        );
        Ok(())
    }

    fn get_adapters(&self) -> Vec<Address> {
        self.catalog.read().adapters()
    }

    fn get_adapter_assets(&self, adapter: &Address) -> Result<Vec<Address>, RegistryError> {
        self.catalog.read().assets_of(adapter)
    }

    fn get_balances(&self, account: &Address) -> Result<Vec<AdapterView>, RegistryError> {
        self.aggregate(AggregationKind::Balances(*account))
    }

    fn get_rates(&self) -> Result<Vec<AdapterView>, RegistryError> {
        self.aggregate(AggregationKind::Rates)
    }

    fn get_balances_and_rates(
        &self,
        account: &Address,
    ) -> Result<Vec<AdapterView>, RegistryError> {
        self.aggregate(AggregationKind::BalancesAndRates(*account))
    }
}
