//! # Typed-Data Entities
//!
//! The signed message types. Every field takes part in the digest.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use shared_types::{Address, Bytes32, PrefixedHex, U256};

/// Kind of action in a batch. Encoded as `uint8`, on the wire too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ActionType {
    /// Unset.
    #[default]
    None = 0,
    /// Deposit into a protocol.
    Deposit = 1,
    /// Withdraw from a protocol.
    Withdraw = 2,
}

/// How an amount is interpreted. Encoded as `uint8`, on the wire too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AmountType {
    /// Unset.
    #[default]
    None = 0,
    /// Fraction of the holder's balance, scaled by `1e18`.
    Relative = 1,
    /// Raw amount.
    Absolute = 2,
}

impl TryFrom<u8> for ActionType {
    type Error = SignatureError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Deposit),
            2 => Ok(Self::Withdraw),
            _ => Err(SignatureError::UnknownDiscriminant {
                kind: "ActionType",
                value,
            }),
        }
    }
}

impl From<ActionType> for u8 {
    fn from(value: ActionType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for AmountType {
    type Error = SignatureError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Relative),
            2 => Ok(Self::Absolute),
            _ => Err(SignatureError::UnknownDiscriminant {
                kind: "AmountType",
                value,
            }),
        }
    }
}

impl From<AmountType> for u8 {
    fn from(value: AmountType) -> Self {
        value as u8
    }
}

/// Permission to pull `amount` of `token`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    /// Token to pull.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Amount, interpreted per `amount_type`.
    pub amount: U256,
    /// Amount interpretation.
    pub amount_type: AmountType,
    /// Replay-protection nonce.
    pub nonce: U256,
}

/// One protocol interaction in a batch.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Deposit or withdraw.
    pub action_type: ActionType,
    /// Name hash of the target protocol.
    #[serde_as(as = "PrefixedHex")]
    pub protocol_name: Bytes32,
    /// Index of the adapter within the protocol.
    pub adapter_index: U256,
    /// Tokens involved.
    #[serde_as(as = "Vec<PrefixedHex>")]
    pub tokens: Vec<Address>,
    /// One amount per token.
    pub amounts: Vec<U256>,
    /// One amount type per token.
    pub amount_types: Vec<AmountType>,
    /// Opaque adapter payload.
    pub data: Vec<u8>,
}

/// Token pulled from the signer before the actions run.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// Token pulled.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Amount, interpreted per `amount_type`.
    pub amount: U256,
    /// Amount interpretation.
    pub amount_type: AmountType,
    /// Fee taken from the input, scaled by `1e18`.
    pub fee: U256,
    /// Fee recipient.
    #[serde_as(as = "PrefixedHex")]
    pub beneficiary: Address,
}

/// Minimum amount of a token the batch must return.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Token returned.
    #[serde_as(as = "PrefixedHex")]
    pub token: Address,
    /// Minimum amount.
    pub amount: U256,
}

/// A signed batch of actions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionData {
    /// Actions, executed in order.
    pub actions: Vec<Action>,
    /// Tokens pulled up front.
    pub inputs: Vec<Input>,
    /// Minimum returns.
    pub outputs: Vec<Output>,
    /// Replay-protection nonce.
    pub nonce: U256,
}
