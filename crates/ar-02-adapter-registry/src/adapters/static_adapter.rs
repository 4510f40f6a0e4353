//! # Static Protocol Adapter
//!
//! A table-driven [`ProtocolAdapter`]: fixed decimals and rate components per
//! asset, and a balance table that can be updated while the adapter is
//! deployed. Used for seeded deployments and tests.

use crate::ports::outbound::ProtocolAdapter;
use parking_lot::RwLock;
use shared_types::{
    format_address, rate_unit, AdapterError, Address, Balance, Rate, RateComponent, U256,
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct StaticAsset {
    decimals: u8,
    components: Vec<RateComponent>,
}

/// Table-driven protocol adapter.
#[derive(Debug)]
pub struct StaticProtocolAdapter {
    name: String,
    assets: HashMap<Address, StaticAsset>,
    balances: RwLock<HashMap<(Address, Address), U256>>,
}

impl StaticProtocolAdapter {
    /// Adapter named `name` supporting no assets yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: HashMap::new(),
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Support `asset` with the given decimals and rate components.
    pub fn with_asset(
        mut self,
        asset: Address,
        decimals: u8,
        components: Vec<RateComponent>,
    ) -> Self {
        self.assets.insert(
            asset,
            StaticAsset {
                decimals,
                components,
            },
        );
        self
    }

    /// Support `asset` as a plain token worth exactly one unit of itself.
    pub fn with_plain_asset(self, asset: Address, decimals: u8) -> Self {
        self.with_asset(
            asset,
            decimals,
            vec![RateComponent {
                underlying: asset,
                rate: rate_unit(),
            }],
        )
    }

    /// Set the amount of `asset` held by `account`.
    pub fn set_balance(&self, asset: Address, account: Address, amount: U256) {
        self.balances.write().insert((asset, account), amount);
    }

    /// Builder form of [`set_balance`](Self::set_balance).
    pub fn with_balance(self, asset: Address, account: Address, amount: U256) -> Self {
        self.set_balance(asset, account, amount);
        self
    }

    fn asset(&self, asset: &Address) -> Result<&StaticAsset, AdapterError> {
        self.assets
            .get(asset)
            .ok_or_else(|| AdapterError::Unsupported(format_address(asset)))
    }
}

impl ProtocolAdapter for StaticProtocolAdapter {
    fn name(&self) -> Result<String, AdapterError> {
        Ok(self.name.clone())
    }

    fn get_balance(&self, asset: &Address, account: &Address) -> Result<Balance, AdapterError> {
        let decimals = self.asset(asset)?.decimals;
        let amount = self
            .balances
            .read()
            .get(&(*asset, *account))
            .copied()
            .unwrap_or_else(U256::zero);

        Ok(Balance {
            asset: *asset,
            amount,
            decimals,
        })
    }

    fn get_rate(&self, asset: &Address) -> Result<Rate, AdapterError> {
        Ok(Rate {
            asset: *asset,
            components: self.asset(asset)?.components.clone(),
        })
    }
}
