//! # registry-node
//!
//! Loads configuration, initializes tracing, builds the registry container
//! and logs a summary. When `AR_QUERY_ACCOUNT` is set, prints
//! `get_balances_and_rates` for that account as JSON on stdout.

use anyhow::{Context, Result};
use tracing::info;

use ar_02_adapter_registry::AdapterRegistryApi;
use registry_runtime::{init_tracing, RegistryConfig, RegistryContainer, VERSION};
use shared_types::{format_address, parse_address};

/// Account queried on startup.
const QUERY_ACCOUNT_ENV: &str = "AR_QUERY_ACCOUNT";

fn main() -> Result<()> {
    let config = RegistryConfig::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.telemetry).context("Failed to initialize tracing")?;
    info!("[runtime] registry-node v{} starting", VERSION);

    let container = RegistryContainer::bootstrap(config).context("Failed to build registries")?;
    let summary = container.summary();
    info!(
        deployed_protocol_adapters = summary.deployed_protocol_adapters,
        deployed_token_adapters = summary.deployed_token_adapters,
        registered_adapters = summary.registered_adapters,
        token_adapter_names = summary.token_adapter_names,
        "[runtime] Registries ready"
    );

    if let Ok(raw) = std::env::var(QUERY_ACCOUNT_ENV) {
        let account = parse_address(&raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid {}", QUERY_ACCOUNT_ENV))?;
        info!("[runtime] Querying balances and rates for {}", format_address(&account));

        let views = container
            .adapter_registry
            .get_balances_and_rates(&account)
            .context("Balance and rate query failed")?;
        println!("{}", serde_json::to_string_pretty(&views)?);
    }

    Ok(())
}
