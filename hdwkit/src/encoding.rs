//! Encoding utilities for addresses and keys.

use bech32::{Bech32, Fe32, Hrp};

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// Encode bytes to Base58Check (used in Bitcoin)
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning version and payload together.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| Error::encoding(encoded, e))?;

    if data.len() < 5 {
        return Err(Error::encoding(encoded, "shorter than a checksum"));
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    if checksum != &double_sha256(payload)[..4] {
        return Err(Error::encoding(encoded, "checksum mismatch"));
    }

    Ok(payload.to_vec())
}

/// Encode using Bech32/Bech32m for SegWit addresses.
///
/// Uses Bech32 for witness version 0, Bech32m for version 1+ (Taproot).
pub fn segwit_encode(hrp: &str, version: u8, program: &[u8]) -> Result<String> {
    let parsed = Hrp::parse(hrp).map_err(|e| Error::encoding(hrp, e))?;
    let witness_version = Fe32::try_from(version).map_err(|e| Error::encoding(hrp, e))?;

    bech32::segwit::encode(parsed, witness_version, program)
        .map_err(|e| Error::encoding(hrp, e))
}

/// Encode arbitrary data as plain Bech32 (Cosmos and Cardano addresses).
pub fn bech32_encode(hrp: &str, data: &[u8]) -> Result<String> {
    let parsed = Hrp::parse(hrp).map_err(|e| Error::encoding(hrp, e))?;
    bech32::encode::<Bech32>(parsed, data).map_err(|e| Error::encoding(hrp, e))
}

/// Decode a hex string, naming the input on failure.
pub fn hex_decode(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(stripped).map_err(|e| Error::encoding(input, e))
}

/// Computes EIP-55 checksum encoding for an Ethereum address.
///
/// Returns a checksummed address string with mixed-case hex characters.
pub fn eip55_checksum(address: &[u8; 20]) -> String {
    let hex_addr = hex::encode(address);
    let hash = crate::hash::keccak256(hex_addr.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");

    for (i, c) in hex_addr.chars().enumerate() {
        if c.is_ascii_alphabetic() {
            let hash_nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };

            if hash_nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        } else {
            result.push(c);
        }
    }

    result
}
