//! # Token Registry Flows
//!
//! Decomposition of the nested pool fixture and registry maintenance through
//! the public `TokenAdapterRegistryApi`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ar_03_token_registry::{StaticTokenAdapter, TokenAdapterRegistryApi};
    use shared_types::{
        name_hash, rate_unit, Component, Erc20Metadata, QueryBudget, RegistryError,
        EMPTY_NAME_HASH, U256,
    };

    use crate::fixtures::*;

    fn symbols(balance: &shared_types::FullTokenBalance) -> Vec<String> {
        balance
            .underlying
            .iter()
            .map(|u| u.metadata.erc20metadata.symbol.clone())
            .collect()
    }

    #[test]
    fn test_pie_flattens_to_weighted_leaves() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());

        let result = registry.get_full_token_balances(&[BTC_PLUS_PLUS]).unwrap();
        assert_eq!(result.len(), 1);

        let pie = &result[0];
        assert_eq!(pie.base.token, BTC_PLUS_PLUS);
        assert_eq!(pie.base.erc20metadata.symbol, "BTC++");
        assert_eq!(symbols(pie), vec!["WBTC", "renBTC", "pBTC", "sBTC"]);

        let shares: Vec<U256> = pie.underlying.iter().map(|u| u.share).collect();
        assert_eq!(
            shares,
            vec![percent(18), percent(12), percent(35), percent(35)]
        );

        let total = shares.iter().fold(U256::zero(), |acc, s| acc + *s);
        assert_eq!(total, rate_unit());
    }

    #[test]
    fn test_mixed_query_preserves_input_order() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());

        let result = registry
            .get_full_token_balances(&[WBTC, PBTC_LP, BTC_PLUS_PLUS])
            .unwrap();
        assert_eq!(result.len(), 3);

        // A leaf yields itself at full share
        assert_eq!(result[0].base.token, WBTC);
        assert_eq!(result[0].underlying.len(), 1);
        assert_eq!(result[0].underlying[0].metadata.token, WBTC);
        assert_eq!(result[0].underlying[0].share, rate_unit());

        assert_eq!(symbols(&result[1]), vec!["pBTC", "sBTC"]);
        assert_eq!(result[2].underlying.len(), 4);
    }

    #[test]
    fn test_empty_query() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());
        assert!(registry.get_full_token_balances(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_leaf_budget_counts_whole_query() {
        let budget = QueryBudget {
            max_leaves: 5,
            ..QueryBudget::default()
        };
        let (registry, _directory) = nested_pool_registry(budget);

        registry.get_full_token_balances(&[BTC_PLUS_PLUS]).unwrap();
        assert_eq!(
            registry.get_full_token_balances(&[BTC_PLUS_PLUS, SBTC_CRV]),
            Err(RegistryError::BudgetExceeded {
                limit: 5,
                required: 6,
            })
        );
    }

    #[test]
    fn test_depth_budget() {
        let budget = QueryBudget {
            max_decomposition_depth: 1,
            ..QueryBudget::default()
        };
        let (registry, _directory) = nested_pool_registry(budget);

        registry.get_full_token_balances(&[SBTC_CRV]).unwrap();
        assert!(matches!(
            registry.get_full_token_balances(&[BTC_PLUS_PLUS]),
            Err(RegistryError::DecompositionCycleOrTooDeep { depth: 2, .. })
        ));
    }

    #[test]
    fn test_rebinding_into_a_cycle_is_detected() {
        let (registry, directory) = nested_pool_registry(QueryBudget::default());

        // A Curve pool that holds the pie which holds the pool
        let cyclic_curve = StaticTokenAdapter::new().with_components(
            SBTC_CRV,
            Erc20Metadata::new("Curve.fi loop", "loopCRV", 18),
            vec![Component {
                token: BTC_PLUS_PLUS,
                share: rate_unit(),
            }],
        );
        directory.deploy(CURVE_ADAPTER, Arc::new(cyclic_curve));

        assert!(matches!(
            registry.get_full_token_balances(&[BTC_PLUS_PLUS]),
            Err(RegistryError::DecompositionCycleOrTooDeep { .. })
        ));
    }

    #[test]
    fn test_removed_name_fails_until_rebound() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());

        registry.remove_token_adapters(&OWNER, &[curve_name()]).unwrap();
        assert_eq!(registry.get_token_adapter_name(&SBTC_CRV), curve_name());
        assert!(matches!(
            registry.get_full_token_balances(&[SBTC_CRV]),
            Err(RegistryError::NotFound(_))
        ));

        // Binding the pool to the leaf adapter turns it into a leaf
        registry
            .add_token_adapter_names_by_hashes(&OWNER, &[SBTC_CRV], &[EMPTY_NAME_HASH])
            .unwrap();
        let result = registry.get_full_token_balances(&[SBTC_CRV]);
        // The leaf adapter has no metadata for the pool token
        assert!(matches!(result, Err(RegistryError::AdapterCallFailed { .. })));
    }

    #[test]
    fn test_update_points_name_at_new_adapter() {
        let (registry, directory) = nested_pool_registry(QueryBudget::default());
        let replacement = [0xC6; 20];
        directory.deploy(
            replacement,
            Arc::new(StaticTokenAdapter::new().with_token(
                SBTC_CRV,
                Erc20Metadata::new("Curve.fi renBTC/wBTC v2", "sbtcCRV2", 18),
            )),
        );

        registry
            .update_token_adapters(&OWNER, &[curve_name()], &[replacement])
            .unwrap();
        assert_eq!(registry.get_token_adapter(&curve_name()).unwrap(), replacement);

        let result = registry.get_full_token_balances(&[SBTC_CRV]).unwrap();
        assert_eq!(symbols(&result[0]), vec!["sbtcCRV2"]);
    }

    #[test]
    fn test_batch_mutations_are_atomic() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());
        let before = registry.get_token_adapter_names();

        assert!(matches!(
            registry.add_token_adapters(
                &OWNER,
                &[name_hash("Balancer"), pie_name()],
                &[addr(0x50), addr(0x51)],
            ),
            Err(RegistryError::AlreadyRegistered(_))
        ));
        assert_eq!(registry.get_token_adapter_names(), before);

        assert!(matches!(
            registry.add_token_adapter_names_by_hashes(
                &OWNER,
                &[WBTC, RENBTC],
                &[pie_name(), name_hash("Unknown")],
            ),
            Err(RegistryError::NotFound(_))
        ));
        assert_eq!(registry.get_token_adapter_name(&WBTC), EMPTY_NAME_HASH);
    }

    #[test]
    fn test_mutations_are_owner_gated() {
        let (registry, _directory) = nested_pool_registry(QueryBudget::default());
        assert!(matches!(
            registry.remove_token_adapters(&STRANGER, &[pie_name()]),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert!(matches!(
            registry.add_token_adapter_names_by_hashes(&STRANGER, &[WBTC], &[pie_name()]),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert_eq!(registry.get_token_adapter_names().len(), 3);
    }
}
