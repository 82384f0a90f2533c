//! The single Algorand key and its address.

use data_encoding::BASE32_NOPAD;
use ed25519_dalek::{SigningKey, VerifyingKey};
use hdwkit::hash::sha512_256;
use hdwkit::{Error, KeyRecord, Result};

use crate::kind::AlgorandKeyKind;

/// An ed25519 key, private or watch-only.
#[derive(Clone)]
pub(crate) enum AlgorandKey {
    Private(SigningKey),
    Public(VerifyingKey),
}

impl AlgorandKey {
    pub fn from_private(key: &[u8]) -> Result<Self> {
        let bytes: &[u8; 32] = key
            .try_into()
            .map_err(|_| Error::private_key(key, format!("expected 32 bytes, got {}", key.len())))?;
        Ok(Self::Private(SigningKey::from_bytes(bytes)))
    }

    pub fn from_public(key: &[u8]) -> Result<Self> {
        let bytes: &[u8; 32] = key
            .try_into()
            .map_err(|_| Error::public_key(key, format!("expected 32 bytes, got {}", key.len())))?;
        VerifyingKey::from_bytes(bytes)
            .map(Self::Public)
            .map_err(|e| Error::public_key(key, e))
    }

    pub fn is_public_only(&self) -> bool {
        matches!(self, Self::Public(_))
    }

    pub fn public(&self) -> VerifyingKey {
        match self {
            Self::Private(signing) => signing.verifying_key(),
            Self::Public(verifying) => *verifying,
        }
    }

    pub fn key_record(&self) -> KeyRecord<AlgorandKeyKind> {
        let public = self.public();
        let mut record = KeyRecord::new();
        if let Self::Private(signing) = self {
            record.insert(AlgorandKeyKind::Priv, hex::encode(signing.as_bytes()));
        }
        record.insert(AlgorandKeyKind::Pub, hex::encode(public.as_bytes()));
        record.insert(AlgorandKeyKind::Address, address(public.as_bytes()));
        record
    }
}

/// Base32 of the public key followed by the last 4 bytes of its hash.
pub(crate) fn address(public_key: &[u8; 32]) -> String {
    let hash = sha512_256(public_key);
    let mut payload = [0u8; 36];
    payload[..32].copy_from_slice(public_key);
    payload[32..].copy_from_slice(&hash[28..]);
    BASE32_NOPAD.encode(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdwkit::KeyKind;
    use hex_literal::hex;

    #[test]
    fn address_of_rfc8032_key() {
        let key = AlgorandKey::from_private(&hex!(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"
        ))
        .unwrap();
        let record = key.key_record();
        assert_eq!(
            record.get(AlgorandKeyKind::Pub),
            Some("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
        );
        assert_eq!(
            record.get(AlgorandKeyKind::Address),
            Some("25NJQAMCWEFLPVKL73J4SZAHHIHOC4XT3KTCGJNPAINGR5YHKENMEF5QTE")
        );
    }

    #[test]
    fn public_key_has_no_private_kinds() {
        let key = AlgorandKey::from_public(&hex!(
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        ))
        .unwrap();
        let record = key.key_record();
        assert!(key.is_public_only());
        assert!(AlgorandKeyKind::ALL
            .iter()
            .filter(|k| k.is_private())
            .all(|k| !record.has(*k)));
    }

    #[test]
    fn rejects_short_keys() {
        assert!(matches!(
            AlgorandKey::from_private(&[1u8; 31]),
            Err(Error::InvalidPrivateKey { .. })
        ));
        assert!(matches!(
            AlgorandKey::from_public(&[1u8; 33]),
            Err(Error::InvalidPublicKey { .. })
        ));
    }
}
