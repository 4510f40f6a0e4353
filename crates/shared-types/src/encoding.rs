//! # Hex Encoding
//!
//! `0x`-prefixed hex helpers for addresses and 32-byte words, used in error
//! messages, log fields, configuration files and JSON output.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_with` adapter encoding fixed-size byte arrays as `0x`-prefixed hex.
///
/// Deserialization accepts the prefix as optional.
pub struct PrefixedHex;

impl<const N: usize> SerializeAs<[u8; N]> for PrefixedHex {
    fn serialize_as<S>(source: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(source)))
    }
}

impl<'de, const N: usize> DeserializeAs<'de, [u8; N]> for PrefixedHex {
    fn deserialize_as<D>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_fixed::<N>(&s).map_err(D::Error::custom)
    }
}

/// Formats an address as `0x`-prefixed lowercase hex.
pub fn format_address(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Formats a 32-byte word as `0x`-prefixed lowercase hex.
pub fn format_bytes32(word: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(word))
}

/// Parses a 20-byte address from hex, with or without the `0x` prefix.
pub fn parse_address(s: &str) -> Result<[u8; 20], String> {
    parse_fixed::<20>(s)
}

/// Parses a 32-byte word from hex, with or without the `0x` prefix.
pub fn parse_bytes32(s: &str) -> Result<[u8; 32], String> {
    parse_fixed::<32>(s)
}

fn parse_fixed<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| format!("invalid hex '{}': {}", s, e))?;
    if bytes.len() != N {
        return Err(format!(
            "invalid length for '{}': expected {} bytes, got {}",
            s,
            N,
            bytes.len()
        ));
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}
