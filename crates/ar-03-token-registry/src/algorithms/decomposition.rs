//! # Token Decomposition
//!
//! Flattens a composite token into its leaf constituents.
//!
//! The walk is depth first with an explicit stack, so adapter-controlled
//! nesting cannot exhaust the thread stack. Two guards bound it:
//!
//! - a depth counter (the queried token is depth 0) checked against
//!   `QueryBudget::max_decomposition_depth`
//! - the set of tokens on the current ancestor path; a token that reappears
//!   below itself is a cycle
//!
//! A token reached through two different branches (a diamond) is not a cycle
//! and is emitted once per path.
//!
//! ```text
//! BTC++ ──┬── pool A ──┬── WBTC
//!         │            └── pBTC
//!         └── pool B ──┬── imBTC
//!                      └── sBTC        leaves: [WBTC, pBTC, imBTC, sBTC]
//! ```

use crate::domain::TokenResolver;
use crate::ports::outbound::TokenAdapter;
use shared_types::{
    format_address, rate_unit, AdapterDirectory, Address, Bytes32, FullTokenBalance,
    QueryBudget, RegistryError, TokenMetadata, UnderlyingToken, EMPTY_NAME_HASH, U256,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

enum Visit {
    Enter {
        token: Address,
        share: U256,
        depth: usize,
    },
    Exit,
}

/// Runs decompositions for one query, tracking the leaves emitted across
/// every token of that query.
pub struct Decomposer<'a, D>
where
    D: AdapterDirectory<dyn TokenAdapter> + ?Sized,
{
    resolver: &'a TokenResolver,
    directory: &'a D,
    budget: QueryBudget,
    leaves: usize,
}

impl<'a, D> Decomposer<'a, D>
where
    D: AdapterDirectory<dyn TokenAdapter> + ?Sized,
{
    /// Decomposer over a resolver snapshot.
    pub fn new(resolver: &'a TokenResolver, directory: &'a D, budget: QueryBudget) -> Self {
        Self {
            resolver,
            directory,
            budget,
            leaves: 0,
        }
    }

    /// Leaves emitted so far by this decomposer.
    pub fn leaves_emitted(&self) -> usize {
        self.leaves
    }

    /// Flatten `token`.
    pub fn decompose(&mut self, token: &Address) -> Result<FullTokenBalance, RegistryError> {
        let (_, base_adapter_id, base_adapter) = self.adapter_for(token)?;
        let base = TokenMetadata {
            token: *token,
            erc20metadata: base_adapter
                .get_metadata(token)
                .map_err(|e| RegistryError::adapter_call(&base_adapter_id, e))?,
        };

        let mut underlying = Vec::new();
        let mut path: Vec<Address> = Vec::new();
        let mut on_path: HashSet<Address> = HashSet::new();
        let mut stack = vec![Visit::Enter {
            token: *token,
            share: rate_unit(),
            depth: 0,
        }];

        while let Some(visit) = stack.pop() {
            let (current, share, depth) = match visit {
                Visit::Exit => {
                    if let Some(done) = path.pop() {
                        on_path.remove(&done);
                    }
                    continue;
                }
                Visit::Enter {
                    token,
                    share,
                    depth,
                } => (token, share, depth),
            };

            if depth > self.budget.max_decomposition_depth || on_path.contains(&current) {
                return Err(RegistryError::DecompositionCycleOrTooDeep {
                    token: format_address(&current),
                    depth,
                });
            }

            let (name, adapter_id, adapter) = self.adapter_for(&current)?;
            let components = if name == EMPTY_NAME_HASH {
                Vec::new()
            } else {
                adapter
                    .get_underlying_components(&current)
                    .map_err(|e| RegistryError::adapter_call(&adapter_id, e))?
            };

            if components.is_empty() {
                underlying.push(self.leaf(&current, share, &adapter_id, adapter.as_ref())?);
                continue;
            }

            path.push(current);
            on_path.insert(current);
            stack.push(Visit::Exit);

            // Reverse so the first reported component is visited first
            for component in components.iter().rev() {
                let child_share = scale_share(share, component.share).ok_or_else(|| {
                    RegistryError::adapter_call(
                        &adapter_id,
                        format!("share overflow at {}", format_address(&component.token)),
                    )
                })?;
                stack.push(Visit::Enter {
                    token: component.token,
                    share: child_share,
                    depth: depth + 1,
                });
            }
        }

        debug!(
            "[ar-03] Decomposed {} into {} leaf token(s)",
            format_address(token),
            underlying.len()
        );

        Ok(FullTokenBalance { base, underlying })
    }

    fn leaf(
        &mut self,
        token: &Address,
        share: U256,
        adapter_id: &Address,
        adapter: &dyn TokenAdapter,
    ) -> Result<UnderlyingToken, RegistryError> {
        self.leaves += 1;
        self.budget.check_leaves(self.leaves)?;

        let erc20metadata = adapter
            .get_metadata(token)
            .map_err(|e| RegistryError::adapter_call(adapter_id, e))?;

        Ok(UnderlyingToken {
            metadata: TokenMetadata {
                token: *token,
                erc20metadata,
            },
            share,
        })
    }

    fn adapter_for(
        &self,
        token: &Address,
    ) -> Result<(Bytes32, Address, Arc<dyn TokenAdapter>), RegistryError> {
        let (name, adapter_id) = self.resolver.resolve(token)?;
        let adapter = self.directory.resolve(&adapter_id).ok_or_else(|| {
            RegistryError::adapter_call(&adapter_id, "no adapter deployed at address")
        })?;
        Ok((name, adapter_id, adapter))
    }
}

/// `parent * component / 1e18`, or `None` on overflow.
pub fn scale_share(parent: U256, component: U256) -> Option<U256> {
    parent
        .checked_mul(component)
        .map(|product| product / rate_unit())
}
