//! # Seed Bootstrap
//!
//! JSON description of the static adapters to deploy and the registrations
//! to replay at startup. Addresses are `0x`-prefixed hex; amounts, rates and
//! shares are `0x`-prefixed hex `uint256`; names are plain strings packed into
//! `bytes32` by `name_hash`. The empty name is the ERC20 leaf adapter.
//!
//! ```json
//! {
//!   "protocolAdapters": [{
//!     "address": "0x…", "name": "Compound",
//!     "assets": [{
//!       "asset": "0x…", "decimals": 8,
//!       "components": [{ "underlying": "0x…", "rate": "0xde0b6b3a7640000" }],
//!       "balances": [{ "account": "0x…", "amount": "0x3e8" }]
//!     }]
//!   }],
//!   "tokenAdapters": [{
//!     "address": "0x…",
//!     "tokens": [{
//!       "token": "0x…",
//!       "metadata": { "name": "Curve.fi yDAI/yUSDC", "symbol": "yCRV", "decimals": 18 },
//!       "components": [{ "token": "0x…", "share": "0x6f05b59d3b20000" }]
//!     }]
//!   }],
//!   "adapters": [{ "adapter": "0x…", "assets": ["0x…"] }],
//!   "tokenAdapterNames": [{ "name": "Curve", "adapter": "0x…" }],
//!   "tokenBindings": [{ "token": "0x…", "name": "Curve" }]
//! }
//! ```

use ar_02_adapter_registry::StaticProtocolAdapter;
use ar_03_token_registry::StaticTokenAdapter;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::{Address, Component, Erc20Metadata, PrefixedHex, RateComponent, U256};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Seed loading errors.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("Failed to read seed file {path}: {reason}")]
    Io {
        /// Path of the seed file.
        path: String,
        /// Error message from the I/O operation.
        reason: String,
    },

    /// Seed file is not valid JSON for this schema.
    #[error("Failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static adapters and the registrations to perform with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Seed {
    /// Protocol adapters to deploy.
    #[serde(default)]
    pub protocol_adapters: Vec<ProtocolAdapterSeed>,
    /// Token adapters to deploy.
    #[serde(default)]
    pub token_adapters: Vec<TokenAdapterSeed>,
    /// Adapter registrations, in order.
    #[serde(default)]
    pub adapters: Vec<AdapterRegistration>,
    /// Token adapter names to register, in order.
    #[serde(default)]
    pub token_adapter_names: Vec<TokenAdapterNameSeed>,
    /// Token-to-name bindings.
    #[serde(default)]
    pub token_bindings: Vec<TokenBindingSeed>,
}

/// A protocol adapter with fixed balances and rates.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProtocolAdapterSeed {
    /// Deployment address.
    #[serde_as(as = "PrefixedHex")]
    pub address: Address,
    /// Display name.
    pub name: String,
    /// Supported assets.
    #[serde(default)]
    pub assets: Vec<AssetSeed>,
}

/// One asset of a seeded protocol adapter.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetSeed {
    /// Asset address.
    #[serde_as(as = "PrefixedHex")]
    pub asset: Address,
    /// Asset decimals.
    pub decimals: u8,
    /// Rate components; empty means the asset is worth one unit of itself.
    #[serde(default)]
    pub components: Vec<RateComponent>,
    /// Known account balances.
    #[serde(default)]
    pub balances: Vec<BalanceSeed>,
}

/// A fixed balance held by one account.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BalanceSeed {
    /// Holder.
    #[serde_as(as = "PrefixedHex")]
    pub account: Address,
    /// Amount held.
    pub amount: U256,
}

/// A token adapter with fixed metadata and components.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenAdapterSeed {
    /// Deployment address.
    #[serde_as(as = "PrefixedHex")]
    pub address: Address,
    /// Tokens the adapter describes.
    #[serde(default)]
    pub tokens: Vec<TokenSeed>,
}

/// One token of a seeded token adapter.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenSeed {
    /// Token address.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// ERC20 metadata.
    pub metadata: Erc20Metadata,
    /// Constituents; empty for a leaf.
    #[serde(default)]
    pub components: Vec<Component>,
}

/// `add_adapter(adapter, assets)`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterRegistration {
    /// Adapter address.
    #[serde_as(as = "PrefixedHex")]
    pub adapter: Address,
    /// Initial asset list.
    #[serde_as(as = "Vec<PrefixedHex>")]
    #[serde(default)]
    pub assets: Vec<Address>,
}

/// Name registered for a token adapter.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenAdapterNameSeed {
    /// Human-readable name, packed with `name_hash`.
    pub name: String,
    /// Token adapter address.
    #[serde_as(as = "PrefixedHex")]
    pub adapter: Address,
}

/// Token bound to a token adapter name.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenBindingSeed {
    /// Token address.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Human-readable name, packed with `name_hash`.
    pub name: String,
}

impl Seed {
    /// Load a seed from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| SeedError::Io {
            path: path.as_ref().display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse a seed from JSON.
    pub fn from_json(content: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl ProtocolAdapterSeed {
    /// Build the static adapter this entry describes.
    pub fn build(&self) -> StaticProtocolAdapter {
        let mut adapter = StaticProtocolAdapter::new(self.name.clone());
        for asset in &self.assets {
            adapter = if asset.components.is_empty() {
                adapter.with_plain_asset(asset.asset, asset.decimals)
            } else {
                adapter.with_asset(asset.asset, asset.decimals, asset.components.clone())
            };
        }
        for asset in &self.assets {
            for balance in &asset.balances {
                adapter.set_balance(asset.asset, balance.account, balance.amount);
            }
        }
        adapter
    }
}

impl TokenAdapterSeed {
    /// Build the static adapter this entry describes.
    pub fn build(&self) -> StaticTokenAdapter {
        self.tokens
            .iter()
            .fold(StaticTokenAdapter::new(), |adapter, seed| {
                adapter.with_components(seed.token, seed.metadata.clone(), seed.components.clone())
            })
    }
}
