//! # Token Catalog
//!
//! Two independent mappings:
//!
//! - adapter name → adapter address (`AdapterByName`), with the names kept in
//!   an ordered swap-pop list
//! - token → adapter name (`TokenEntry`)
//!
//! Many tokens can share one name. A token without a binding resolves to
//! [`EMPTY_NAME_HASH`], the ERC20 leaf adapter.
//!
//! Batch methods may fail half-way; callers apply them to a clone and commit
//! only on success.

use ar_01_ordered_registry::{EntryPolicy, OrderedRegistry, OwnershipGuard};
use shared_types::{
    format_address, format_bytes32, is_zero_address, Address, Bytes32, RegistryError,
    EMPTY_NAME_HASH,
};
use std::collections::HashMap;

/// Read-only copy of the mappings needed to resolve tokens to adapters.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    adapter_by_name: HashMap<Bytes32, Address>,
    name_by_token: HashMap<Address, Bytes32>,
}

impl TokenResolver {
    /// Name bound to `token`, or the empty name hash.
    pub fn name_of(&self, token: &Address) -> Bytes32 {
        self.name_by_token
            .get(token)
            .copied()
            .unwrap_or(EMPTY_NAME_HASH)
    }

    /// Adapter registered under `name`.
    pub fn adapter_of(&self, name: &Bytes32) -> Result<Address, RegistryError> {
        self.adapter_by_name.get(name).copied().ok_or_else(|| {
            RegistryError::NotFound(format!("token adapter name {}", format_bytes32(name)))
        })
    }

    /// Name and adapter responsible for `token`.
    pub fn resolve(&self, token: &Address) -> Result<(Bytes32, Address), RegistryError> {
        let name = self.name_of(token);
        let adapter = self.adapter_of(&name)?;
        Ok((name, adapter))
    }
}

/// Owner-gated token adapter state.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    ownership: OwnershipGuard,
    names: OrderedRegistry<Bytes32>,
    resolver: TokenResolver,
}

impl TokenCatalog {
    /// Empty catalog owned by `owner`.
    pub fn new(owner: Address) -> Result<Self, RegistryError> {
        Ok(Self {
            ownership: OwnershipGuard::new(owner)?,
            names: OrderedRegistry::new(EntryPolicy::unique()),
            resolver: TokenResolver::default(),
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

    /// Register `adapters[i]` under `names[i]`.
    pub fn add_token_adapters(
        &mut self,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError> {
        RegistryError::ensure_same_length(names.len(), adapters.len())?;

        for (name, adapter) in names.iter().zip(adapters) {
            ensure_adapter_address(adapter)?;
            self.names.add(*name)?;
            self.resolver.adapter_by_name.insert(*name, *adapter);
        }
        Ok(())
    }

    /// Replace the adapter of each registered name.
    pub fn update_token_adapters(
        &mut self,
        names: &[Bytes32],
        adapters: &[Address],
    ) -> Result<(), RegistryError> {
        RegistryError::ensure_same_length(names.len(), adapters.len())?;

        for (name, adapter) in names.iter().zip(adapters) {
            ensure_adapter_address(adapter)?;
            let slot = self
                .resolver
                .adapter_by_name
                .get_mut(name)
                .ok_or_else(|| name_not_registered(name))?;
            *slot = *adapter;
        }
        Ok(())
    }

    /// Swap-pop each name out of the list. Token bindings are left alone.
    pub fn remove_token_adapters(&mut self, names: &[Bytes32]) -> Result<(), RegistryError> {
        for name in names {
            self.names
                .remove_by_value(name)
                .map_err(|_| name_not_registered(name))?;
            self.resolver.adapter_by_name.remove(name);
        }
        Ok(())
    }

    /// Bind `tokens[i]` to the registered name `names[i]`, overwriting any
    /// previous binding.
    pub fn bind_tokens(&mut self, tokens: &[Address], names: &[Bytes32]) -> Result<(), RegistryError> {
        RegistryError::ensure_same_length(tokens.len(), names.len())?;

        for (token, name) in tokens.iter().zip(names) {
            if is_zero_address(token) {
                return Err(RegistryError::InvalidAddress(format!(
                    "token {}",
                    format_address(token)
                )));
            }
            if !self.names.contains(name) {
                return Err(name_not_registered(name));
            }
            self.resolver.name_by_token.insert(*token, *name);
        }
        Ok(())
    }

    /// Registered names in list order.
    pub fn names(&self) -> Vec<Bytes32> {
        self.names.to_list()
    }

    /// Adapter registered under `name`.
    pub fn adapter_of(&self, name: &Bytes32) -> Result<Address, RegistryError> {
        self.resolver.adapter_of(name)
    }

    /// Name bound to `token`, or the empty name hash.
    pub fn name_of(&self, token: &Address) -> Bytes32 {
        self.resolver.name_of(token)
    }

    /// Snapshot used by decomposition queries.
    pub fn resolver(&self) -> TokenResolver {
        self.resolver.clone()
    }
}

fn ensure_adapter_address(adapter: &Address) -> Result<(), RegistryError> {
    if is_zero_address(adapter) {
        return Err(RegistryError::InvalidAddress(format!(
            "token adapter {}",
            format_address(adapter)
        )));
    }
    Ok(())
}

fn name_not_registered(name: &Bytes32) -> RegistryError {
    RegistryError::NotFound(format!("token adapter name {}", format_bytes32(name)))
}
