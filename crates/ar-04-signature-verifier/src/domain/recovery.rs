//! # Signer Recovery (secp256k1)
//!
//! Recovers the Ethereum address that produced a 65-byte `r ‖ s ‖ v`
//! signature over a 32-byte digest.
//!
//! ## Acceptance Rules
//!
//! - exactly 65 bytes
//! - `v ∈ {0, 1, 27, 28}`
//! - `r, s ∈ [1, n-1]`
//! - `s ≤ n/2` (EIP-2)
//!
//! Range checks run in constant time.

use super::errors::SignatureError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_crypto::address_from_verifying_key;
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};

/// Length of an `r ‖ s ‖ v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// floor(n / 2)
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recover the signer of `digest`.
pub fn recover_signer(digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        });
    }

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..64]);
    let recovery_id = parse_recovery_id(signature[64])?;

    if !is_valid_scalar(&r) {
        return Err(SignatureError::ScalarOutOfRange("r"));
    }
    if !is_valid_scalar(&s) {
        return Err(SignatureError::ScalarOutOfRange("s"));
    }
    if !is_low_s(&s) {
        return Err(SignatureError::MalleableSignature);
    }

    let sig =
        Signature::from_slice(&signature[..64]).map_err(|_| SignatureError::RecoveryFailed)?;
    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_verifying_key(&recovered_key))
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

/// Constant-time big-endian comparison: (a < b, a > b).
fn ct_compare(a: &[u8; 32], b: &[u8; 32]) -> (Choice, Choice) {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        less |= not_decided & Choice::from((a[i] < b[i]) as u8);
        greater |= not_decided & Choice::from((a[i] > b[i]) as u8);
    }

    (less, greater)
}

/// `s ≤ floor(n/2)`.
fn is_low_s(s: &[u8; 32]) -> bool {
    let (_, greater) = ct_compare(s, &SECP256K1_HALF_ORDER);
    (!greater).into()
}

/// `scalar ∈ [1, n-1]`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let (less, _) = ct_compare(scalar, &SECP256K1_ORDER);
    (!is_zero & less).into()
}
