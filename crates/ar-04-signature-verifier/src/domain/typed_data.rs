//! # EIP-712 Structured Data Hashing
//!
//! ```text
//! digest     = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ hashStruct(message))
//! hashStruct = keccak256(typeHash ‖ encodeData(fields...))
//! ```
//!
//! Atomic fields encode as one 32-byte word (addresses left-padded, `uint8`
//! widened). `bytes` encode as `keccak256(payload)`. Arrays encode as
//! `keccak256` of their elements' encodings concatenated; struct elements
//! encode as their `hashStruct`. Referenced struct types are appended to the
//! primary type string in alphabetical order.

use super::entities::{Action, Approval, Input, Output, TransactionData};
use shared_crypto::{keccak256, Keccak256Hasher};
use shared_types::{Address, Hash, U256};

/// Domain type: the verifying contract is the only domain field.
pub const EIP712_DOMAIN_TYPE: &str = "EIP712Domain(address verifyingContract)";

/// Approval type string.
pub const APPROVAL_TYPE: &str =
    "Approval(address token,uint256 amount,uint8 amountType,uint256 nonce)";

/// Action type string.
pub const ACTION_TYPE: &str = "Action(uint8 actionType,bytes32 protocolName,uint256 adapterIndex,address[] tokens,uint256[] amounts,uint8[] amountTypes,bytes data)";

/// Input type string.
pub const INPUT_TYPE: &str =
    "Input(address token,uint256 amount,uint8 amountType,uint256 fee,address beneficiary)";

/// Output type string.
pub const OUTPUT_TYPE: &str = "Output(address token,uint256 amount)";

/// Transaction data type string, referenced types appended.
pub const TRANSACTION_DATA_TYPE: &str = concat!(
    "TransactionData(Action[] actions,Input[] inputs,Output[] outputs,uint256 nonce)",
    "Action(uint8 actionType,bytes32 protocolName,uint256 adapterIndex,address[] tokens,uint256[] amounts,uint8[] amountTypes,bytes data)",
    "Input(address token,uint256 amount,uint8 amountType,uint256 fee,address beneficiary)",
    "Output(address token,uint256 amount)",
);

// =============================================================================
// WORD ENCODING
// =============================================================================

/// Address left-padded to 32 bytes.
pub fn encode_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}

/// Big-endian 256-bit word.
pub fn encode_u256(value: &U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// `uint8` widened to 32 bytes.
pub fn encode_u8(value: u8) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[31] = value;
    word
}

/// `keccak256` of the concatenated words.
fn hash_words<I>(words: I) -> Hash
where
    I: IntoIterator<Item = [u8; 32]>,
{
    let mut hasher = Keccak256Hasher::new();
    for word in words {
        hasher.update(&word);
    }
    hasher.finalize()
}

// =============================================================================
// STRUCT HASHES
// =============================================================================

/// Domain separator for `verifying_contract`.
pub fn domain_separator(verifying_contract: &Address) -> Hash {
    hash_words([
        keccak256(EIP712_DOMAIN_TYPE.as_bytes()),
        encode_address(verifying_contract),
    ])
}

/// `hashStruct(Approval)`.
pub fn hash_approval_struct(approval: &Approval) -> Hash {
    hash_words([
        keccak256(APPROVAL_TYPE.as_bytes()),
        encode_address(&approval.token),
        encode_u256(&approval.amount),
        encode_u8(approval.amount_type as u8),
        encode_u256(&approval.nonce),
    ])
}

/// `hashStruct(Action)`.
pub fn hash_action(action: &Action) -> Hash {
    hash_words([
        keccak256(ACTION_TYPE.as_bytes()),
        encode_u8(action.action_type as u8),
        action.protocol_name,
        encode_u256(&action.adapter_index),
        hash_words(action.tokens.iter().map(encode_address)),
        hash_words(action.amounts.iter().map(encode_u256)),
        hash_words(action.amount_types.iter().map(|t| encode_u8(*t as u8))),
        keccak256(&action.data),
    ])
}

/// `hashStruct(Input)`.
pub fn hash_input(input: &Input) -> Hash {
    hash_words([
        keccak256(INPUT_TYPE.as_bytes()),
        encode_address(&input.token),
        encode_u256(&input.amount),
        encode_u8(input.amount_type as u8),
        encode_u256(&input.fee),
        encode_address(&input.beneficiary),
    ])
}

/// `hashStruct(Output)`.
pub fn hash_output(output: &Output) -> Hash {
    hash_words([
        keccak256(OUTPUT_TYPE.as_bytes()),
        encode_address(&output.token),
        encode_u256(&output.amount),
    ])
}

/// `hashStruct(TransactionData)`.
pub fn hash_transaction_data_struct(data: &TransactionData) -> Hash {
    hash_transaction_parts(&data.actions, &data.inputs, &data.outputs, &data.nonce)
}

/// `hashStruct(TransactionData)` from its fields.
pub fn hash_transaction_parts(
    actions: &[Action],
    inputs: &[Input],
    outputs: &[Output],
    nonce: &U256,
) -> Hash {
    hash_words([
        keccak256(TRANSACTION_DATA_TYPE.as_bytes()),
        hash_words(actions.iter().map(hash_action)),
        hash_words(inputs.iter().map(hash_input)),
        hash_words(outputs.iter().map(hash_output)),
        encode_u256(nonce),
    ])
}

/// Final digest `keccak256(0x19 ‖ 0x01 ‖ domain_separator ‖ struct_hash)`.
pub fn typed_data_digest(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut hasher = Keccak256Hasher::new();
    hasher
        .update(&[0x19, 0x01])
        .update(domain_separator)
        .update(struct_hash);
    hasher.finalize()
}
