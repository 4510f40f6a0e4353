//! # Static Token Adapter
//!
//! Table-driven [`TokenAdapter`]: fixed metadata and constituents per token.
//! Serves both as an ERC20 leaf adapter (tokens without components) and as a
//! decomposition adapter for composite tokens.

use crate::ports::outbound::TokenAdapter;
use shared_types::{format_address, AdapterError, Address, Component, Erc20Metadata};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct StaticToken {
    metadata: Erc20Metadata,
    components: Vec<Component>,
}

/// Table-driven token adapter.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAdapter {
    tokens: HashMap<Address, StaticToken>,
}

impl StaticTokenAdapter {
    /// Adapter knowing no tokens yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Know `token` as a leaf.
    pub fn with_token(self, token: Address, metadata: Erc20Metadata) -> Self {
        self.with_components(token, metadata, Vec::new())
    }

    /// Know `token` as a composite of `components`.
    pub fn with_components(
        mut self,
        token: Address,
        metadata: Erc20Metadata,
        components: Vec<Component>,
    ) -> Self {
        self.tokens.insert(
            token,
            StaticToken {
                metadata,
                components,
            },
        );
        self
    }

    fn token(&self, token: &Address) -> Result<&StaticToken, AdapterError> {
        self.tokens
            .get(token)
            .ok_or_else(|| AdapterError::Unsupported(format_address(token)))
    }
}

impl TokenAdapter for StaticTokenAdapter {
    fn get_metadata(&self, token: &Address) -> Result<Erc20Metadata, AdapterError> {
        Ok(self.token(token)?.metadata.clone())
    }

    fn get_underlying_components(&self, token: &Address) -> Result<Vec<Component>, AdapterError> {
        Ok(self.token(token)?.components.clone())
    }
}
