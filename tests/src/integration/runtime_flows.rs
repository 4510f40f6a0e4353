//! # Runtime Flows
//!
//! Config file plus seed file through `RegistryContainer::bootstrap`, then
//! queries against every registry the container wires.

#[cfg(test)]
mod tests {
    use std::fs;

    use ar_02_adapter_registry::AdapterRegistryApi;
    use ar_03_token_registry::TokenAdapterRegistryApi;
    use ar_04_signature_verifier::SignatureVerifierApi;
    use registry_runtime::{ConfigError, RegistryConfig, RegistryContainer, RuntimeError};
    use shared_types::{format_address, name_hash, parse_address, RegistryError};

    const OWNER_HEX: &str = "0x0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a";
    const HOLDER_HEX: &str = "0xc0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0";

    const SEED: &str = r#"{
        "protocolAdapters": [
            {
                "address": "0x0101010101010101010101010101010101010101",
                "name": "Compound",
                "assets": [{
                    "asset": "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd",
                    "decimals": 8,
                    "components": [{
                        "underlying": "0xdadadadadadadadadadadadadadadadadadadada",
                        "rate": "0x470de4df820000"
                    }],
                    "balances": [{
                        "account": "0xc0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0",
                        "amount": "0x1388"
                    }]
                }]
            },
            {
                "address": "0x0202020202020202020202020202020202020202",
                "name": "ERC20",
                "assets": [{ "asset": "0xdadadadadadadadadadadadadadadadadadadada", "decimals": 18 }]
            }
        ],
        "tokenAdapters": [
            {
                "address": "0xe2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2",
                "tokens": [{
                    "token": "0xdadadadadadadadadadadadadadadadadadadada",
                    "metadata": { "name": "Dai Stablecoin", "symbol": "DAI", "decimals": 18 }
                }]
            },
            {
                "address": "0x9191919191919191919191919191919191919191",
                "tokens": [{
                    "token": "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd",
                    "metadata": { "name": "Compound Dai", "symbol": "cDAI", "decimals": 8 },
                    "components": [{
                        "token": "0xdadadadadadadadadadadadadadadadadadadada",
                        "share": "0x470de4df820000"
                    }]
                }]
            }
        ],
        "adapters": [
            {
                "adapter": "0x0101010101010101010101010101010101010101",
                "assets": ["0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd"]
            },
            {
                "adapter": "0x0202020202020202020202020202020202020202",
                "assets": ["0xdadadadadadadadadadadadadadadadadadadada"]
            }
        ],
        "tokenAdapterNames": [
            { "name": "", "adapter": "0xe2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2e2" },
            { "name": "CToken", "adapter": "0x9191919191919191919191919191919191919191" }
        ],
        "tokenBindings": [
            { "token": "0xcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcdcd", "name": "CToken" }
        ]
    }"#;

    fn write_files(dir: &tempfile::TempDir, config_extra: &str) -> std::path::PathBuf {
        let seed_path = dir.path().join("seed.json");
        fs::write(&seed_path, SEED).unwrap();

        let config_path = dir.path().join("registry.toml");
        fs::write(
            &config_path,
            format!(
                "owner = \"{}\"\nseed = \"{}\"\n{}",
                OWNER_HEX,
                seed_path.display(),
                config_extra
            ),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_bootstrap_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_files(
            &dir,
            "[signature]\nverifying_contract = \"0x5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e5e\"\n",
        );

        let config = RegistryConfig::load(&config_path).unwrap();
        let container = RegistryContainer::bootstrap(config).unwrap();
        let summary = container.summary();
        assert_eq!(summary.deployed_protocol_adapters, 2);
        assert_eq!(summary.deployed_token_adapters, 2);
        assert_eq!(summary.registered_adapters, 2);
        assert_eq!(summary.token_adapter_names, 2);

        let owner = parse_address(OWNER_HEX).unwrap();
        assert_eq!(container.adapter_registry.owner(), owner);
        assert_eq!(container.token_registry.owner(), owner);
        assert_eq!(
            container.signature_verifier.verifying_contract(),
            [0x5E; 20]
        );

        // Portfolio view as the binary prints it
        let holder = parse_address(HOLDER_HEX).unwrap();
        let views = container
            .adapter_registry
            .get_balances_and_rates(&holder)
            .unwrap();
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["name"], "Compound");
        assert_eq!(json[0]["balances"][0]["amount"], "0x1388");
        assert_eq!(
            json[0]["rates"][0]["components"][0]["underlying"],
            format_address(&[0xDA; 20])
        );
        assert_eq!(json[1]["balances"][0]["amount"], "0x0");

        // cDAI decomposes into DAI through the seeded names
        let full = container
            .token_registry
            .get_full_token_balances(&[[0xCD; 20]])
            .unwrap();
        assert_eq!(full[0].base.erc20metadata.symbol, "cDAI");
        assert_eq!(full[0].underlying[0].metadata.erc20metadata.symbol, "DAI");
        assert_eq!(
            container.token_registry.get_token_adapter_name(&[0xCD; 20]),
            name_hash("CToken")
        );
    }

    #[test]
    fn test_tight_budget_from_config_applies() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_files(&dir, "[budget]\nmax_adapter_calls = 3\n");

        let container =
            RegistryContainer::bootstrap(RegistryConfig::load(&config_path).unwrap()).unwrap();
        let holder = parse_address(HOLDER_HEX).unwrap();

        // Two adapters with one asset each: 2 x (1 + 1) = 4 balance calls
        assert_eq!(
            container.adapter_registry.get_balances(&holder),
            Err(RegistryError::BudgetExceeded {
                limit: 3,
                required: 4,
            })
        );
    }

    #[test]
    fn test_env_overrides_owner() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_files(&dir, "");

        let mut config = RegistryConfig::load(&config_path).unwrap();
        config
            .apply_overrides(|key| match key {
                "AR_OWNER" => Some(format_address(&[0x0F; 20])),
                _ => None,
            })
            .unwrap();

        let container = RegistryContainer::bootstrap(config).unwrap();
        assert_eq!(container.adapter_registry.owner(), [0x0F; 20]);
        assert_eq!(container.summary().registered_adapters, 2);
    }

    #[test]
    fn test_zero_owner_refused() {
        let config = RegistryConfig::parse("").unwrap();
        assert!(matches!(
            RegistryContainer::bootstrap(config),
            Err(RuntimeError::Config(ConfigError::MissingOwner))
        ));
    }
}
