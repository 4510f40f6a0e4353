//! # Shared Fixtures
//!
//! Registries wired to in-memory directories, a call-counting protocol
//! adapter, and a nested pool token modelled on a PieDAO pie holding two
//! Curve-style BTC pools.
//!
//! ```text
//! BTC++ ──┬── 30% sbtcCRV ──┬── 60% WBTC
//!         │                 └── 40% renBTC
//!         └── 70% pBTC-LP ──┬── 50% pBTC
//!                           └── 50% sBTC
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ar_02_adapter_registry::{AdapterRegistryService, ProtocolAdapter, StaticProtocolAdapter};
use ar_03_token_registry::{
    StaticTokenAdapter, TokenAdapter, TokenAdapterRegistryApi, TokenAdapterRegistryService,
};
use shared_types::{
    name_hash, rate_unit, AdapterError, Address, Balance, Bytes32, Component, Erc20Metadata,
    InMemoryAdapterDirectory, QueryBudget, Rate, EMPTY_NAME_HASH, U256,
};

/// Protocol adapter directory shared with a registry.
pub type ProtocolDirectory = Arc<InMemoryAdapterDirectory<dyn ProtocolAdapter>>;

/// Token adapter directory shared with a registry.
pub type TokenDirectory = Arc<InMemoryAdapterDirectory<dyn TokenAdapter>>;

/// Registry owner in every fixture.
pub const OWNER: Address = [0x0A; 20];
/// A caller that is never the owner.
pub const STRANGER: Address = [0x0B; 20];
/// Account holding balances.
pub const HOLDER: Address = [0xC0; 20];

/// Deterministic address from one byte.
pub fn addr(n: u8) -> Address {
    [n; 20]
}

/// `percent`% of `1e18`.
pub fn percent(percent: u64) -> U256 {
    rate_unit() * U256::from(percent) / U256::from(100)
}

/// Empty protocol directory.
pub fn protocol_directory() -> ProtocolDirectory {
    Arc::new(InMemoryAdapterDirectory::new())
}

/// Empty token directory.
pub fn token_directory() -> TokenDirectory {
    Arc::new(InMemoryAdapterDirectory::new())
}

/// Adapter registry owned by [`OWNER`].
pub fn adapter_registry(
    directory: &ProtocolDirectory,
    budget: QueryBudget,
) -> AdapterRegistryService<ProtocolDirectory> {
    AdapterRegistryService::new(OWNER, Arc::clone(directory), budget)
        .expect("owner is non-zero")
}

/// Token adapter registry owned by [`OWNER`].
pub fn token_registry(
    directory: &TokenDirectory,
    budget: QueryBudget,
) -> TokenAdapterRegistryService<TokenDirectory> {
    TokenAdapterRegistryService::new(OWNER, Arc::clone(directory), budget)
        .expect("owner is non-zero")
}

// =============================================================================
// COUNTING ADAPTER
// =============================================================================

/// Wraps a static adapter and counts every call made to it.
pub struct CountingAdapter {
    inner: StaticProtocolAdapter,
    calls: AtomicUsize,
}

impl CountingAdapter {
    /// Wrap `inner`.
    pub fn new(inner: StaticProtocolAdapter) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl ProtocolAdapter for CountingAdapter {
    fn name(&self) -> Result<String, AdapterError> {
        self.tick();
        self.inner.name()
    }

    fn get_balance(&self, asset: &Address, account: &Address) -> Result<Balance, AdapterError> {
        self.tick();
        self.inner.get_balance(asset, account)
    }

    fn get_rate(&self, asset: &Address) -> Result<Rate, AdapterError> {
        self.tick();
        self.inner.get_rate(asset)
    }
}

// =============================================================================
// NESTED POOL FIXTURE
// =============================================================================

/// Token adapter serving plain ERC20 metadata.
pub const ERC20_ADAPTER: Address = [0xE2; 20];
/// Token adapter serving PieDAO pies.
pub const PIE_ADAPTER: Address = [0x9E; 20];
/// Token adapter serving Curve pool tokens.
pub const CURVE_ADAPTER: Address = [0xC5; 20];

/// The pie.
pub const BTC_PLUS_PLUS: Address = [0x10; 20];
/// First Curve pool token.
pub const SBTC_CRV: Address = [0x20; 20];
/// Second Curve pool token.
pub const PBTC_LP: Address = [0x21; 20];
/// Leaf tokens.
pub const WBTC: Address = [0x31; 20];
/// Leaf token.
pub const RENBTC: Address = [0x32; 20];
/// Leaf token.
pub const PBTC: Address = [0x33; 20];
/// Leaf token.
pub const SBTC: Address = [0x34; 20];

/// Name of the PieDAO token adapter.
pub fn pie_name() -> Bytes32 {
    name_hash("PieDAO Pie Token")
}

/// Name of the Curve token adapter.
pub fn curve_name() -> Bytes32 {
    name_hash("Curve Pool Token")
}

/// Leaf adapter knowing the four BTC tokens.
pub fn erc20_adapter() -> StaticTokenAdapter {
    StaticTokenAdapter::new()
        .with_token(WBTC, Erc20Metadata::new("Wrapped BTC", "WBTC", 8))
        .with_token(RENBTC, Erc20Metadata::new("renBTC", "renBTC", 8))
        .with_token(PBTC, Erc20Metadata::new("pTokens BTC", "pBTC", 18))
        .with_token(SBTC, Erc20Metadata::new("Synth sBTC", "sBTC", 18))
}

/// Pie adapter: BTC++ split 30/70 across the two pools.
pub fn pie_adapter() -> StaticTokenAdapter {
    StaticTokenAdapter::new().with_components(
        BTC_PLUS_PLUS,
        Erc20Metadata::new("PieDAO BTC++", "BTC++", 18),
        vec![
            Component {
                token: SBTC_CRV,
                share: percent(30),
            },
            Component {
                token: PBTC_LP,
                share: percent(70),
            },
        ],
    )
}

/// Curve adapter: each pool split across two leaves.
pub fn curve_adapter() -> StaticTokenAdapter {
    StaticTokenAdapter::new()
        .with_components(
            SBTC_CRV,
            Erc20Metadata::new("Curve.fi renBTC/wBTC", "sbtcCRV", 18),
            vec![
                Component {
                    token: WBTC,
                    share: percent(60),
                },
                Component {
                    token: RENBTC,
                    share: percent(40),
                },
            ],
        )
        .with_components(
            PBTC_LP,
            Erc20Metadata::new("Curve.fi pBTC/sBTC", "pBTC-LP", 18),
            vec![
                Component {
                    token: PBTC,
                    share: percent(50),
                },
                Component {
                    token: SBTC,
                    share: percent(50),
                },
            ],
        )
}

/// Token registry and directory holding the nested pool fixture, with every
/// registration made through the public API.
pub fn nested_pool_registry(
    budget: QueryBudget,
) -> (TokenAdapterRegistryService<TokenDirectory>, TokenDirectory) {
    let directory = token_directory();
    directory.deploy(ERC20_ADAPTER, Arc::new(erc20_adapter()));
    directory.deploy(PIE_ADAPTER, Arc::new(pie_adapter()));
    directory.deploy(CURVE_ADAPTER, Arc::new(curve_adapter()));

    let registry = token_registry(&directory, budget);
    registry
        .add_token_adapters(
            &OWNER,
            &[EMPTY_NAME_HASH, pie_name(), curve_name()],
            &[ERC20_ADAPTER, PIE_ADAPTER, CURVE_ADAPTER],
        )
        .expect("fixture names are distinct");
    registry
        .add_token_adapter_names_by_hashes(
            &OWNER,
            &[BTC_PLUS_PLUS, SBTC_CRV, PBTC_LP],
            &[pie_name(), curve_name(), curve_name()],
        )
        .expect("fixture names are registered");

    (registry, directory)
}
