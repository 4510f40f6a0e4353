//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::{Action, Approval, Input, Output, TransactionData};
use shared_types::{Address, Hash, RegistryError, U256};

/// Typed-data signature verifier API.
///
/// Recovery performs no authorization: it reports who signed, and callers
/// decide what that signer may do.
pub trait SignatureVerifierApi: Send + Sync {
    /// Contract address bound into the domain separator.
    fn verifying_contract(&self) -> Address;

    /// `hashStruct(EIP712Domain)` for this verifier.
    fn domain_separator(&self) -> Hash;

    /// Digest to sign for `approval`.
    fn hash_approval(&self, approval: &Approval) -> Hash;

    /// Digest to sign for a batch.
    fn hash_transaction_data(
        &self,
        actions: &[Action],
        inputs: &[Input],
        outputs: &[Output],
        nonce: U256,
    ) -> Hash;

    /// Signer of `data`.
    ///
    /// # Errors
    /// - `InvalidSignature` for a malformed or unrecoverable signature
    fn get_account_from_signature(
        &self,
        data: &TransactionData,
        signature: &[u8],
    ) -> Result<Address, RegistryError>;

    /// Signer of `approval`.
    fn get_account_from_approval_signature(
        &self,
        approval: &Approval,
        signature: &[u8],
    ) -> Result<Address, RegistryError>;
}
