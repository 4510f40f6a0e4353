//! # Domain Entities
//!
//! Snapshot and planning types used by the aggregation queries.

use shared_types::Address;

/// A registered adapter and its asset list, as seen by one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterEntry {
    /// Adapter address.
    pub id: Address,
    /// Assets in current list order.
    pub assets: Vec<Address>,
}

/// What an aggregation query collects per asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationKind {
    /// `get_balance(asset, account)` only.
    Balances(Address),
    /// `get_rate(asset)` only.
    Rates,
    /// Both, in a single pass.
    BalancesAndRates(Address),
}

impl AggregationKind {
    /// Account whose balances are read, if any.
    pub fn account(&self) -> Option<Address> {
        match self {
            Self::Balances(account) | Self::BalancesAndRates(account) => Some(*account),
            Self::Rates => None,
        }
    }

    /// True if rates are collected.
    pub fn wants_rates(&self) -> bool {
        matches!(self, Self::Rates | Self::BalancesAndRates(_))
    }

    /// Adapter calls issued per asset.
    pub fn calls_per_asset(&self) -> usize {
        match self {
            Self::Balances(_) | Self::Rates => 1,
            Self::BalancesAndRates(_) => 2,
        }
    }
}

/// Number of adapter calls a query over `entries` will issue: one `name()`
/// per adapter plus the per-asset calls.
pub fn planned_calls(entries: &[AdapterEntry], kind: AggregationKind) -> usize {
    entries.iter().fold(0usize, |total, entry| {
        total
            .saturating_add(1)
            .saturating_add(entry.assets.len().saturating_mul(kind.calls_per_asset()))
    })
}
