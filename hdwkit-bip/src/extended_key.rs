//! BIP-32 extended key serialization with arbitrary version bytes.
//!
//! The `bitcoin` crate only knows `xprv`/`tprv`, so the 78-byte layout is
//! handled here and the key material is handed to the curve-specific node.

use hdwkit::encoding::{base58check_decode, base58check_encode};
use hdwkit::{Error, Result};
use zeroize::Zeroizing;

const ENCODED_LEN: usize = 78;

/// Fields of a serialized extended key.
#[derive(Clone)]
pub(crate) struct ExtendedKeyData {
    pub version: [u8; 4],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32,
    pub chain_code: [u8; 32],
    /// `0x00 ‖ secret` for private keys, the compressed point for public keys.
    pub key: Zeroizing<[u8; 33]>,
}

impl ExtendedKeyData {
    /// Whether the key data holds a private key.
    pub fn is_private(&self) -> bool {
        self.key[0] == 0x00
    }

    /// Base58Check encoding.
    pub fn encode(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(ENCODED_LEN - 4));
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_number.to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        payload.extend_from_slice(&self.key[..]);
        base58check_encode(&self.version, &payload)
    }

    /// Parse a Base58Check string into its fields.
    pub fn decode(encoded: &str) -> Result<Self> {
        let data = Zeroizing::new(
            base58check_decode(encoded).map_err(|e| Error::extended_key(encoded, e))?,
        );
        if data.len() != ENCODED_LEN {
            return Err(Error::extended_key(
                encoded,
                format!("expected {ENCODED_LEN} bytes, got {}", data.len()),
            ));
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&data[..4]);
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let mut child_number = [0u8; 4];
        child_number.copy_from_slice(&data[9..13]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&data[13..45]);
        let mut key = Zeroizing::new([0u8; 33]);
        key.copy_from_slice(&data[45..]);

        Ok(Self {
            version,
            depth: data[4],
            parent_fingerprint,
            child_number: u32::from_be_bytes(child_number),
            chain_code,
            key,
        })
    }
}
