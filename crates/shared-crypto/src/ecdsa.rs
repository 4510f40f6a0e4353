//! # ECDSA Signatures (secp256k1)
//!
//! Recoverable ECDSA signatures over 32-byte digests, in the Ethereum
//! `r ‖ s ‖ v` layout with `v ∈ {27, 28}`.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization (EIP-2)
//! - Secret scalars are wiped on drop by `k256`'s `SigningKey`

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, SigningKey, VerifyingKey};

/// Length of an `r ‖ s ‖ v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Recoverable signature (65 bytes, `r ‖ s ‖ v`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature([u8; SIGNATURE_LENGTH]);

impl RecoverableSignature {
    /// Create from bytes (65 bytes).
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; SIGNATURE_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSignatureLength {
                    expected: SIGNATURE_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// R component.
    pub fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// S component.
    pub fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..64]);
        s
    }

    /// Recovery byte.
    pub fn v(&self) -> u8 {
        self.0[64]
    }
}

/// secp256k1 ECDSA keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Verifying (public) key.
    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// Ethereum address of this key.
    pub fn address(&self) -> [u8; 20] {
        address_from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest, producing a low-S `r ‖ s ‖ v` signature.
    pub fn sign_prehash(&self, digest: &[u8; 32]) -> Result<RecoverableSignature, CryptoError> {
        let (mut signature, mut recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        // Flipping S mirrors the recovered point, so the y-parity flips too
        if let Some(normalized) = signature.normalize_s() {
            signature = normalized;
            recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
        }

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        Ok(RecoverableSignature(bytes))
    }
}

/// Derive the Ethereum address of a public key
/// (last 20 bytes of keccak256 of the uncompressed point without prefix).
pub fn address_from_verifying_key(key: &VerifyingKey) -> [u8; 20] {
    let encoded = key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}
