//! SLIP-0010 Ed25519 key derivation.
//!
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use ed25519_dalek::{SigningKey, VerifyingKey};
use hdwkit::hash::{hash160, hmac_sha512};
use hdwkit::{ChildIndex, Error, Result};
use zeroize::Zeroizing;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// An Ed25519 node: always carries the public key, the secret only when known.
#[derive(Clone)]
pub(crate) struct Ed25519Node {
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_number: u32,
    pub chain_code: [u8; 32],
    pub secret: Option<Zeroizing<[u8; 32]>>,
    pub public: [u8; 32],
}

impl Ed25519Node {
    /// Derive the master node from a seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let digest = Zeroizing::new(hmac_sha512(ED25519_CURVE, &[seed])?);
        Ok(Self::from_digest(&digest, 0, [0; 4], 0))
    }

    /// Wrap a raw 32-byte secret at the given position.
    pub fn from_secret(
        secret: [u8; 32],
        chain_code: [u8; 32],
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: u32,
    ) -> Self {
        let public = SigningKey::from_bytes(&secret).verifying_key().to_bytes();
        Self {
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            secret: Some(Zeroizing::new(secret)),
            public,
        }
    }

    /// Wrap a public key; the node cannot derive children.
    pub fn from_public(
        public: &[u8],
        chain_code: [u8; 32],
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: u32,
    ) -> Result<Self> {
        // 33-byte form carries a leading zero.
        let raw = match public {
            [0x00, rest @ ..] if rest.len() == 32 => rest,
            _ => public,
        };
        let bytes: [u8; 32] = raw
            .try_into()
            .map_err(|_| Error::public_key(public, "expected 32 bytes"))?;
        VerifyingKey::from_bytes(&bytes).map_err(|e| Error::public_key(public, e))?;
        Ok(Self {
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            secret: None,
            public: bytes,
        })
    }

    fn from_digest(digest: &[u8; 64], depth: u8, parent_fingerprint: [u8; 4], child: u32) -> Self {
        let mut secret = [0u8; 32];
        let mut chain_code = [0u8; 32];
        secret.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
        let node = Self::from_secret(secret, chain_code, depth, parent_fingerprint, child);
        secret.fill(0);
        node
    }

    /// Public key with the SLIP-10 `0x00` prefix.
    pub fn public_33(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[1..].copy_from_slice(&self.public);
        out
    }

    /// First four bytes of the Hash160 of the prefixed public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        let id = hash160(&self.public_33());
        [id[0], id[1], id[2], id[3]]
    }

    /// Derive a child; every index is promoted to hardened.
    pub fn derive(&self, index: ChildIndex) -> Result<Self> {
        let Some(secret) = &self.secret else {
            return Err(Error::Derivation(
                "ed25519 public keys cannot derive children".into(),
            ));
        };
        let depth = self
            .depth
            .checked_add(1)
            .ok_or_else(|| Error::Derivation("maximum depth reached".into()))?;
        let hardened = index.index() | ChildIndex::HARDENED_OFFSET;

        // Hardened derivation: 0x00 || private_key || index
        let digest = Zeroizing::new(hmac_sha512(
            &self.chain_code,
            &[&[0x00], secret.as_slice(), &hardened.to_be_bytes()],
        )?);
        Ok(Self::from_digest(&digest, depth, self.fingerprint(), hardened))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // SLIP-0010 test vector 1 for ed25519.
    const SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn master_from_vector_1() {
        let master = Ed25519Node::from_seed(&SEED).unwrap();
        assert_eq!(
            master.secret.as_deref().unwrap(),
            &hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            master.chain_code,
            hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
        assert_eq!(
            master.public_33(),
            hex!("00a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed")
        );
    }

    #[test]
    fn normal_index_is_hardened() {
        let master = Ed25519Node::from_seed(&SEED).unwrap();
        let child = master.derive(ChildIndex::Normal(0)).unwrap();
        assert_eq!(child.child_number, 0x8000_0000);
        assert_eq!(
            child.secret.as_deref().unwrap(),
            &hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
        assert_eq!(
            child.public,
            hex!("8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c")
        );
        assert_eq!(child.public, master.derive(ChildIndex::Hardened(0)).unwrap().public);
    }

    #[test]
    fn public_node_cannot_derive() {
        let master = Ed25519Node::from_seed(&SEED).unwrap();
        let public = Ed25519Node::from_public(&master.public, [0; 32], 0, [0; 4], 0).unwrap();
        assert!(public.derive(ChildIndex::Hardened(0)).is_err());
    }
}
