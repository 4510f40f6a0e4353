//! # Registry Container
//!
//! Holds every registry instance together with the in-memory adapter
//! directories they resolve against.
//!
//! ## Initialization Order
//!
//! 1. Validate configuration
//! 2. Create the protocol and token directories
//! 3. Create the adapter registry, token registry and signature verifier
//! 4. Deploy seeded adapters, then replay registrations through the public
//!    owner-gated API

use std::sync::Arc;

use ar_02_adapter_registry::{AdapterRegistryApi, AdapterRegistryService, ProtocolAdapter};
use ar_03_token_registry::{TokenAdapter, TokenAdapterRegistryApi, TokenAdapterRegistryService};
use ar_04_signature_verifier::{SignatureVerifierApi, SignatureVerifierService};
use serde::Serialize;
use shared_types::{
    format_address, format_bytes32, name_hash, Address, Bytes32, InMemoryAdapterDirectory,
    RegistryError,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, RegistryConfig};
use crate::seed::{Seed, SeedError};

/// Directory of deployed protocol adapters.
pub type ProtocolDirectory = Arc<InMemoryAdapterDirectory<dyn ProtocolAdapter>>;

/// Directory of deployed token adapters.
pub type TokenDirectory = Arc<InMemoryAdapterDirectory<dyn TokenAdapter>>;

/// Container construction errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Seed file unusable.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// A seeded registration was rejected by a registry.
    #[error("Seed registration failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Counts reported after bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    /// Protocol adapters deployed in the directory.
    pub deployed_protocol_adapters: usize,
    /// Token adapters deployed in the directory.
    pub deployed_token_adapters: usize,
    /// Adapters registered in the adapter registry.
    pub registered_adapters: usize,
    /// Names registered in the token adapter registry.
    pub token_adapter_names: usize,
}

/// All registry instances with shared directories.
pub struct RegistryContainer {
    /// Validated configuration.
    pub config: RegistryConfig,
    /// Protocol adapter directory.
    pub protocol_directory: ProtocolDirectory,
    /// Token adapter directory.
    pub token_directory: TokenDirectory,
    /// Adapter registry.
    pub adapter_registry: Arc<AdapterRegistryService<ProtocolDirectory>>,
    /// Token adapter registry.
    pub token_registry: Arc<TokenAdapterRegistryService<TokenDirectory>>,
    /// Typed-data signature verifier.
    pub signature_verifier: Arc<SignatureVerifierService>,
}

impl RegistryContainer {
    /// Create empty registries from a validated configuration.
    pub fn new(config: RegistryConfig) -> Result<Self, RuntimeError> {
        config.validate()?;

        info!(
            "[runtime] Initializing registries (owner {})",
            format_address(&config.owner)
        );

        let protocol_directory: ProtocolDirectory = Arc::new(InMemoryAdapterDirectory::new());
        let token_directory: TokenDirectory = Arc::new(InMemoryAdapterDirectory::new());

        let adapter_registry = Arc::new(AdapterRegistryService::new(
            config.owner,
            Arc::clone(&protocol_directory),
            config.budget,
        )?);
        let token_registry = Arc::new(TokenAdapterRegistryService::new(
            config.owner,
            Arc::clone(&token_directory),
            config.budget,
        )?);
        let signature_verifier = Arc::new(SignatureVerifierService::new(
            config.signature.verifying_contract,
        ));

        debug!(
            "[runtime] Verifier domain separator {}",
            format_bytes32(&signature_verifier.domain_separator())
        );

        Ok(Self {
            config,
            protocol_directory,
            token_directory,
            adapter_registry,
            token_registry,
            signature_verifier,
        })
    }

    /// Create registries and apply the configured seed file, if any.
    pub fn bootstrap(config: RegistryConfig) -> Result<Self, RuntimeError> {
        let seed = match &config.seed {
            Some(path) => {
                info!("[runtime] Loading seed {}", path.display());
                Some(Seed::load(path)?)
            }
            None => None,
        };

        let container = Self::new(config)?;
        if let Some(seed) = seed {
            container.apply_seed(&seed)?;
        }
        Ok(container)
    }

    /// Deploy the seed's adapters and replay its registrations as the owner.
    ///
    /// Registrations go through the same API as any other caller, so a seed
    /// violating a registry rule fails with that rule's error.
    pub fn apply_seed(&self, seed: &Seed) -> Result<(), RuntimeError> {
        for entry in &seed.protocol_adapters {
            let adapter: Arc<dyn ProtocolAdapter> = Arc::new(entry.build());
            self.protocol_directory.deploy(entry.address, adapter);
        }
        for entry in &seed.token_adapters {
            let adapter: Arc<dyn TokenAdapter> = Arc::new(entry.build());
            self.token_directory.deploy(entry.address, adapter);
        }

        let owner = self.adapter_registry.owner();
        for registration in &seed.adapters {
            self.adapter_registry
                .add_adapter(&owner, registration.adapter, &registration.assets)?;
        }

        let owner = self.token_registry.owner();
        if !seed.token_adapter_names.is_empty() {
            let (names, adapters): (Vec<Bytes32>, Vec<Address>) = seed
                .token_adapter_names
                .iter()
                .map(|entry| (name_hash(&entry.name), entry.adapter))
                .unzip();
            self.token_registry
                .add_token_adapters(&owner, &names, &adapters)?;
        }
        if !seed.token_bindings.is_empty() {
            let (tokens, names): (Vec<Address>, Vec<Bytes32>) = seed
                .token_bindings
                .iter()
                .map(|entry| (entry.token, name_hash(&entry.name)))
                .unzip();
            self.token_registry
                .add_token_adapter_names_by_hashes(&owner, &tokens, &names)?;
        }

        info!(
            "[runtime] Seed applied: {} protocol adapters, {} token adapters, {} registrations",
            seed.protocol_adapters.len(),
            seed.token_adapters.len(),
            seed.adapters.len()
        );
        Ok(())
    }

    /// Current counts.
    pub fn summary(&self) -> ContainerSummary {
        ContainerSummary {
            deployed_protocol_adapters: self.protocol_directory.len(),
            deployed_token_adapters: self.token_directory.len(),
            registered_adapters: self.adapter_registry.get_adapters().len(),
            token_adapter_names: self.token_registry.get_token_adapter_names().len(),
        }
    }
}
