//! # Core Domain Entities
//!
//! Defines the primitives and the data model shared by the registries.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Bytes32`, name hashes
//! - **Aggregation**: `Balance`, `RateComponent`, `Rate`, `AdapterView`
//! - **Decomposition**: `Erc20Metadata`, `TokenMetadata`, `Component`,
//!   `UnderlyingToken`, `FullTokenBalance`

use crate::encoding::PrefixedHex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// A 32-byte word (name hashes, digests).
pub type Bytes32 = [u8; 32];

/// A 32-byte keccak-256 digest.
pub type Hash = [u8; 32];

/// The zero address. Never a valid adapter, asset, token or owner.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Reserved "initial adapter" sentinel (`0x00..01`). Never a valid adapter id.
pub const INITIAL_ADAPTER: Address = {
    let mut addr = [0u8; 20];
    addr[19] = 1;
    addr
};

/// Name hash of the ERC20 leaf adapter. Tokens without an explicit name
/// binding resolve to it.
pub const EMPTY_NAME_HASH: Bytes32 = [0u8; 32];

/// Decimal exponent of every fixed-point rate and share.
pub const RATE_DECIMALS: usize = 18;

/// `1e18`, the fixed-point unit of rates and shares (a 1:1 ratio).
pub fn rate_unit() -> U256 {
    U256::exp10(RATE_DECIMALS)
}

/// Returns true for the all-zero address.
pub fn is_zero_address(address: &Address) -> bool {
    address.iter().all(|b| *b == 0)
}

/// Encodes a human-readable adapter name as a right-padded `bytes32`.
///
/// Names longer than 32 bytes are truncated. The empty string maps to
/// [`EMPTY_NAME_HASH`].
pub fn name_hash(name: &str) -> Bytes32 {
    let mut out = [0u8; 32];
    let bytes = name.as_bytes();
    let len = bytes.len().min(32);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

// =============================================================================
// CLUSTER B: AGGREGATION
// =============================================================================

/// Amount of one asset held by an account, as reported by an adapter.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Asset the amount is denominated in.
    #[serde_as(as = "PrefixedHex")]
    pub asset: Address,
    /// Raw amount in the asset's smallest unit.
    pub amount: U256,
    /// Decimals of the asset.
    pub decimals: u8,
}

/// One underlying constituent of an asset and its exchange rate.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateComponent {
    /// Underlying token.
    #[serde_as(as = "PrefixedHex")]
    pub underlying: Address,
    /// Units of `underlying` per unit of the asset, scaled by `1e18`.
    pub rate: U256,
}

/// Exchange rate of one asset, possibly against several constituents.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Asset the rate describes.
    #[serde_as(as = "PrefixedHex")]
    pub asset: Address,
    /// One entry per constituent, in the order the adapter reports them.
    pub components: Vec<RateComponent>,
}

/// Aggregation result for a single registered adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterView {
    /// Adapter display name.
    pub name: String,
    /// One balance per asset, in asset-list order (empty for rate queries).
    pub balances: Vec<Balance>,
    /// One rate per asset, in asset-list order (empty for balance queries).
    pub rates: Vec<Rate>,
}

// =============================================================================
// CLUSTER C: DECOMPOSITION
// =============================================================================

/// ERC20 metadata of a token, read from its adapter and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Metadata {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
}

impl Erc20Metadata {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// ERC20 metadata bound to the token it describes.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token address.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Metadata read from the token's adapter.
    pub erc20metadata: Erc20Metadata,
}

/// A constituent reported by a decomposition adapter.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Constituent token.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Units of the constituent per unit of the parent, scaled by `1e18`.
    pub share: U256,
}

/// A leaf reached while flattening a composite token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlyingToken {
    /// Leaf token and its metadata.
    pub metadata: TokenMetadata,
    /// Product of the component shares along the path from the queried
    /// token, scaled by `1e18`.
    pub share: U256,
}

/// Result of flattening one queried token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTokenBalance {
    /// The queried token. Its metadata comes from its own adapter.
    pub base: TokenMetadata,
    /// Leaves in depth-first order.
    pub underlying: Vec<UnderlyingToken>,
}
