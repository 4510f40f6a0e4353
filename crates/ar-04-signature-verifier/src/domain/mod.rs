//! # Domain Layer
//!
//! Typed-data message types, EIP-712 hashing and signer recovery.

pub mod entities;
pub mod errors;
pub mod recovery;
pub mod typed_data;

pub use entities::{Action, ActionType, AmountType, Approval, Input, Output, TransactionData};
pub use errors::SignatureError;
pub use recovery::{recover_signer, SIGNATURE_LENGTH};
pub use typed_data::{
    domain_separator, hash_action, hash_approval_struct, hash_input, hash_output,
    hash_transaction_data_struct, hash_transaction_parts, typed_data_digest,
};
