//! # Signature Verifier Service
//!
//! Application service implementing [`SignatureVerifierApi`]. Stateless apart
//! from the verifying contract address and its precomputed domain separator.

use crate::domain::entities::{Action, Approval, Input, Output, TransactionData};
use crate::domain::{
    domain_separator, hash_approval_struct, hash_transaction_data_struct,
    hash_transaction_parts, recover_signer, typed_data_digest,
};
use crate::ports::inbound::SignatureVerifierApi;
use shared_types::{format_address, Address, Hash, RegistryError, U256};
use tracing::{debug, warn};

/// Typed-data signature verifier bound to one verifying contract.
#[derive(Debug, Clone)]
pub struct SignatureVerifierService {
    verifying_contract: Address,
    domain_separator: Hash,
}

impl SignatureVerifierService {
    /// Verifier whose domain is bound to `verifying_contract`.
    pub fn new(verifying_contract: Address) -> Self {
        Self {
            verifying_contract,
            domain_separator: domain_separator(&verifying_contract),
        }
    }

    fn recover(&self, digest: &Hash, signature: &[u8]) -> Result<Address, RegistryError> {
        match recover_signer(digest, signature) {
            Ok(signer) => {
                debug!("[ar-04] Recovered signer {}", format_address(&signer));
                Ok(signer)
            }
            Err(e) => {
                warn!("[ar-04] Signature rejected: {}", e);
                Err(e.into())
            }
        }
    }
}

impl SignatureVerifierApi for SignatureVerifierService {
    fn verifying_contract(&self) -> Address {
        self.verifying_contract
    }

    fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    fn hash_approval(&self, approval: &Approval) -> Hash {
        typed_data_digest(&self.domain_separator, &hash_approval_struct(approval))
    }

    fn hash_transaction_data(
        &self,
        actions: &[Action],
        inputs: &[Input],
        outputs: &[Output],
        nonce: U256,
    ) -> Hash {
        typed_data_digest(
            &self.domain_separator,
            &hash_transaction_parts(actions, inputs, outputs, &nonce),
        )
    }

    fn get_account_from_signature(
        &self,
        data: &TransactionData,
        signature: &[u8],
    ) -> Result<Address, RegistryError> {
        let digest = typed_data_digest(&self.domain_separator, &hash_transaction_data_struct(data));
        self.recover(&digest, signature)
    }

    fn get_account_from_approval_signature(
        &self,
        approval: &Approval,
        signature: &[u8],
    ) -> Result<Address, RegistryError> {
        let digest = self.hash_approval(approval);
        self.recover(&digest, signature)
    }
}
