//! sr25519 keys and junction derivation.

use hdwkit::hash::blake2b_256;
use hdwkit::{Error, KeyRecord, Result};
use schnorrkel::derive::{ChainCode, Derivation};
use schnorrkel::{ExpansionMode, MiniSecretKey, PublicKey, SecretKey};
use zeroize::Zeroizing;

use crate::coin::SubstrateCoin;
use crate::kind::SubstrateKeyKind;
use crate::path::Junction;

/// An sr25519 key, private or watch-only.
#[derive(Clone)]
pub(crate) enum SrKey {
    Private(SecretKey),
    Public(PublicKey),
}

impl SrKey {
    /// Expand a 32-byte mini secret key in Ed25519 mode, as Substrate does.
    pub fn from_mini_secret(bytes: &[u8]) -> Result<Self> {
        let mini = MiniSecretKey::from_bytes(bytes).map_err(|e| Error::seed(bytes, e))?;
        Ok(Self::Private(mini.expand(ExpansionMode::Ed25519)))
    }

    /// Accepts a 32-byte mini secret key or a 64-byte expanded `key‖nonce`.
    pub fn from_private(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            32 => Self::from_mini_secret(bytes).map_err(|_| {
                Error::private_key(bytes, "not a valid mini secret key")
            }),
            64 => SecretKey::from_bytes(bytes)
                .map(Self::Private)
                .map_err(|e| Error::private_key(bytes, e)),
            n => Err(Error::private_key(
                bytes,
                format!("expected 32 or 64 bytes, got {n}"),
            )),
        }
    }

    pub fn from_public(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_bytes(bytes)
            .map(Self::Public)
            .map_err(|e| Error::public_key(bytes, e))
    }

    pub fn is_public_only(&self) -> bool {
        matches!(self, Self::Public(_))
    }

    pub fn public(&self) -> PublicKey {
        match self {
            Self::Private(secret) => secret.to_public(),
            Self::Public(public) => *public,
        }
    }

    /// Derive along `junctions`. `path` is only used for error messages.
    pub fn derive_path(&self, junctions: &[Junction], path: &str) -> Result<Self> {
        junctions
            .iter()
            .try_fold(self.clone(), |key, junction| key.derive(junction, path))
    }

    fn derive(&self, junction: &Junction, path: &str) -> Result<Self> {
        let cc = ChainCode(junction.chain_code());
        match (self, junction.is_hard()) {
            (Self::Private(secret), true) => {
                let (mini, _) = secret.hard_derive_mini_secret_key(Some(cc), b"");
                Ok(Self::Private(mini.expand(ExpansionMode::Ed25519)))
            }
            (Self::Private(secret), false) => {
                let (child, _) = secret.derived_key_simple(cc, b"");
                // The library draws a random nonce; rebuild it from the parent.
                let parent = Zeroizing::new(secret.to_bytes());
                let mut bytes = Zeroizing::new(child.to_bytes());
                bytes[32..].copy_from_slice(&blake2b_256(&[&parent[32..], &cc.0[..]].concat()));
                SecretKey::from_bytes(&bytes[..])
                    .map(Self::Private)
                    .map_err(|e| Error::Derivation(format!("soft junction of {path}: {e}")))
            }
            (Self::Public(_), true) => Err(Error::path(
                path,
                "hard derivation requires a private key",
            )),
            (Self::Public(public), false) => {
                let (child, _) = public.derived_key_simple(cc, b"");
                Ok(Self::Public(child))
            }
        }
    }

    pub fn key_record(&self, coin: SubstrateCoin) -> KeyRecord<SubstrateKeyKind> {
        let public = self.public().to_bytes();
        let mut record = KeyRecord::new();
        record.insert(SubstrateKeyKind::Pub, hex::encode(public));
        if let Self::Private(secret) = self {
            let bytes = Zeroizing::new(secret.to_bytes());
            record.insert(SubstrateKeyKind::Priv, hex::encode(bytes.as_slice()));
        }
        record.insert(SubstrateKeyKind::Address, coin.address(&public));
        record
    }
}
