//! # Query Budget
//!
//! Per-call resource bound for aggregation and decomposition queries. A query
//! that would exceed it fails before or during fan-out instead of running
//! unbounded.

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};

/// Default maximum adapter calls per aggregation query.
pub const DEFAULT_MAX_ADAPTER_CALLS: usize = 10_000;

/// Default maximum decomposition depth below a queried token.
pub const DEFAULT_MAX_DECOMPOSITION_DEPTH: usize = 16;

/// Default maximum leaves emitted by one decomposition query.
pub const DEFAULT_MAX_LEAVES: usize = 1_024;

/// Resource limits applied to every read query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBudget {
    /// Upper bound on adapter calls (names + balances + rates) per query.
    pub max_adapter_calls: usize,
    /// Upper bound on decomposition depth (the queried token is depth 0).
    pub max_decomposition_depth: usize,
    /// Upper bound on leaves emitted by one `get_full_token_balances` call.
    pub max_leaves: usize,
}

impl Default for QueryBudget {
    fn default() -> Self {
        Self {
            max_adapter_calls: DEFAULT_MAX_ADAPTER_CALLS,
            max_decomposition_depth: DEFAULT_MAX_DECOMPOSITION_DEPTH,
            max_leaves: DEFAULT_MAX_LEAVES,
        }
    }
}

impl QueryBudget {
    /// Fails with `BudgetExceeded` if `required` adapter calls exceed the limit.
    pub fn check_adapter_calls(&self, required: usize) -> Result<(), RegistryError> {
        if required > self.max_adapter_calls {
            return Err(RegistryError::BudgetExceeded {
                limit: self.max_adapter_calls,
                required,
            });
        }
        Ok(())
    }

    /// Fails with `BudgetExceeded` if `required` leaves exceed the limit.
    pub fn check_leaves(&self, required: usize) -> Result<(), RegistryError> {
        if required > self.max_leaves {
            return Err(RegistryError::BudgetExceeded {
                limit: self.max_leaves,
                required,
            });
        }
        Ok(())
    }
}
