//! # Token Adapter Registry Service
//!
//! Application service implementing [`TokenAdapterRegistryApi`].
//!
//! Batch mutations run against a clone of the catalog under the write lock;
//! the clone replaces the live catalog only if every pair applied. Queries
//! snapshot the resolver under the read lock and decompose with no lock held.

use crate::algorithms::Decomposer;
use crate::domain::TokenCatalog;
use crate::ports::inbound::TokenAdapterRegistryApi;
use crate::ports::outbound::TokenAdapter;
use parking_lot::RwLock;
use shared_types::{
    format_address, AdapterDirectory, Address, Bytes32, FullTokenBalance, QueryBudget,
    RegistryError,
};
use tracing::{debug, info, warn};

/// Token adapter registry backed by an adapter directory `D`.
pub struct TokenAdapterRegistryService<D>
where
    D: AdapterDirectory<dyn TokenAdapter>,
{
    catalog: RwLock<TokenCatalog>,
    directory: D,
    budget: QueryBudget,
}

impl<D> TokenAdapterRegistryService<D>
where
    D: AdapterDirectory<dyn TokenAdapter>,
{
    /// Empty registry owned by `owner`.
    pub fn new(owner: Address, directory: D, budget: QueryBudget) -> Result<Self, RegistryError> {
        Ok(Self {
            catalog: RwLock::new(TokenCatalog::new(owner)?),
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

    /// Applies an owner-gated batch to a copy of the catalog and commits it
    /// on success.
    fn commit(
        &self,
        caller: &Address,
        operation: &str,
        apply: impl FnOnce(&mut TokenCatalog) -> Result<(), RegistryError>,
    ) -> Result<(), RegistryError> {
        let mut catalog = self.catalog.write();

        let staged = catalog.ensure_owner(caller).and_then(|_| {
            let mut staged = catalog.clone();
            apply(&mut staged)?;
            Ok(staged)
        });

        match staged {
            Ok(staged) => {
                *catalog = staged;
                Ok(())
            }
            Err(e) => {
                warn!("[ar-03] {} rejected: {}", operation, e);
                Err(e)
            }
        }
    }
}

impl<D> TokenAdapterRegistryApi for TokenAdapterRegistryService<D>
where
    D: AdapterDirectory<dyn TokenAdapter>,
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
            warn!("[ar-03] Ownership transfer rejected: {}", e);
            e
        })?;
        Ok(())
    }

    fn add_token_adapters(
        &self,
        caller: &Address,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError> {
        self.commit(caller, "addTokenAdapters", |catalog| {
            catalog.add_token_adapters(names, adapters)
        })?;
        info!("[ar-03] Registered {} token adapter(s)", names.len());
        Ok(())
    }

    fn update_token_adapters(
        &self,
        caller: &Address,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError> {
        self.commit(caller, "updateTokenAdapters", |catalog| {
            catalog.update_token_adapters(names, adapters)
        })?;
        info!("[ar-03] Updated {} token adapter(s)", names.len());
        Ok(())
    }

    fn remove_token_adapters(
        &self,
        caller: &Address,
        names: &[Bytes32],
    ) -> Result<(), RegistryError> {
        self.commit(caller, "removeTokenAdapters", |catalog| {
            catalog.remove_token_adapters(names)
        })?;
        info!("[ar-03] Removed {} token adapter(s)", names.len());
        Ok(())
    }

    fn add_token_adapter_names_by_hashes(
        &self,
        caller: &Address,
        tokens: &[Address],
        names: &[Bytes32],
    ) -> Result<(), RegistryError> {
        self.commit(caller, "addTokenAdapterNamesByHashes", |catalog| {
            catalog.bind_tokens(tokens, names)
        })?;
        info!("[ar-03] Bound {} token(s) to adapter names", tokens.len());
        Ok(())
    }

    fn get_token_adapter_names(&self) -> Vec<Bytes32> {
        self.catalog.read().names()
    }

    fn get_token_adapter(&self, name: &Bytes32) -> Result<Address, RegistryError> {
        self.catalog.read().adapter_of(name)
    }

    fn get_token_adapter_name(&self, token: &Address) -> Bytes32 {
        self.catalog.read().name_of(token)
    }

    fn get_full_token_balances(
        &self,
        tokens: &[Address],
    ) -> Result<Vec<FullTokenBalance>, RegistryError> {
        let resolver = self.catalog.read().resolver();
        let mut decomposer = Decomposer::new(&resolver, &self.directory, self.budget);

        let results = tokens
            .iter()
            .map(|token| {
                decomposer.decompose(token).map_err(|e| {
                    warn!(
                        "[ar-03] Decomposition of {} failed: {}",
                        format_address(token),
                        e
                    );
                    e
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "[ar-03] Full token balances for {} token(s), {} leaf token(s)",
            tokens.len(),
            decomposer.leaves_emitted()
        );
        Ok(results)
    }
}
