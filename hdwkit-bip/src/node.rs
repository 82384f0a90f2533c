//! Curve-independent key nodes walked by the BIP engine.

use bitcoin::NetworkKind;
use bitcoin::bip32::{ChainCode, ChildNumber, Fingerprint, Xpriv, Xpub};
use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey};
use hdwkit::encoding::base58check_encode;
use hdwkit::{ChildIndex, Error, KeyRecord, Level, Result};
use zeroize::Zeroizing;

use crate::address::{ed25519_address, secp256k1_address};
use crate::bip::Bip;
use crate::coin::{Coin, Curve};
use crate::extended_key::ExtendedKeyData;
use crate::kind::BipKeyKind;
use crate::slip10::Ed25519Node;

/// A secp256k1 node, private or watch-only.
#[derive(Clone, Copy)]
pub(crate) enum SecpNode {
    Private(Xpriv),
    Public(Xpub),
}

/// A node of either curve, carrying its own depth.
#[derive(Clone)]
pub(crate) enum Node {
    Secp256k1(SecpNode),
    Ed25519(Ed25519Node),
}

fn network_kind(coin: Coin) -> NetworkKind {
    if coin.is_testnet() {
        NetworkKind::Test
    } else {
        NetworkKind::Main
    }
}

fn fingerprint_bytes(fingerprint: &Fingerprint) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&fingerprint[..]);
    out
}

fn chain_code_bytes(chain_code: &ChainCode) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&chain_code[..]);
    out
}

fn prefixed_secret(secret: &[u8; 32]) -> Zeroizing<[u8; 33]> {
    let mut key = Zeroizing::new([0u8; 33]);
    key[1..].copy_from_slice(secret);
    key
}

impl Node {
    /// Master node from a BIP-39 (or raw) seed.
    pub fn from_seed(coin: Coin, seed: &[u8]) -> Result<Self> {
        match coin.curve() {
            Curve::Secp256k1 => {
                let xpriv = Xpriv::new_master(network_kind(coin), seed)
                    .map_err(|e| Error::seed(seed, e))?;
                Ok(Self::Secp256k1(SecpNode::Private(xpriv)))
            }
            Curve::Ed25519 => Ok(Self::Ed25519(Ed25519Node::from_seed(seed)?)),
        }
    }

    /// Node from a serialized extended key whose version matches `bip` and `coin`.
    pub fn from_extended_key(coin: Coin, bip: Bip, encoded: &str) -> Result<Self> {
        let data = ExtendedKeyData::decode(encoded)?;
        let versions = bip.key_versions(coin);
        let private = if data.version == versions.private {
            true
        } else if data.version == versions.public {
            false
        } else {
            return Err(Error::extended_key(
                encoded,
                format!(
                    "version {} is not defined for {bip} {coin}",
                    hex::encode(data.version)
                ),
            ));
        };
        if private != data.is_private() {
            return Err(Error::extended_key(encoded, "key data does not match version"));
        }

        match coin.curve() {
            Curve::Secp256k1 => {
                let network = network_kind(coin);
                let parent_fingerprint = Fingerprint::from(data.parent_fingerprint);
                let child_number = ChildNumber::from(data.child_number);
                let chain_code = ChainCode::from(data.chain_code);
                let node = if private {
                    let private_key = SecretKey::from_slice(&data.key[1..])
                        .map_err(|e| Error::extended_key(encoded, e))?;
                    SecpNode::Private(Xpriv {
                        network,
                        depth: data.depth,
                        parent_fingerprint,
                        child_number,
                        private_key,
                        chain_code,
                    })
                } else {
                    let public_key = PublicKey::from_slice(&data.key[..])
                        .map_err(|e| Error::extended_key(encoded, e))?;
                    SecpNode::Public(Xpub {
                        network,
                        depth: data.depth,
                        parent_fingerprint,
                        child_number,
                        public_key,
                        chain_code,
                    })
                };
                Ok(Self::Secp256k1(node))
            }
            Curve::Ed25519 => {
                let node = if private {
                    let mut secret = Zeroizing::new([0u8; 32]);
                    secret.copy_from_slice(&data.key[1..]);
                    Ed25519Node::from_secret(
                        *secret,
                        data.chain_code,
                        data.depth,
                        data.parent_fingerprint,
                        data.child_number,
                    )
                } else {
                    Ed25519Node::from_public(
                        &data.key[..],
                        data.chain_code,
                        data.depth,
                        data.parent_fingerprint,
                        data.child_number,
                    )
                    .map_err(|e| Error::extended_key(encoded, e))?
                };
                Ok(Self::Ed25519(node))
            }
        }
    }

    /// Master-level node from a raw private key and a zero chain code.
    pub fn from_private_key(coin: Coin, key: &[u8]) -> Result<Self> {
        match coin.curve() {
            Curve::Secp256k1 => {
                let private_key =
                    SecretKey::from_slice(key).map_err(|e| Error::private_key(key, e))?;
                Ok(Self::Secp256k1(SecpNode::Private(Xpriv {
                    network: network_kind(coin),
                    depth: 0,
                    parent_fingerprint: Fingerprint::default(),
                    child_number: ChildNumber::from(0),
                    private_key,
                    chain_code: ChainCode::from([0u8; 32]),
                })))
            }
            Curve::Ed25519 => {
                let secret: [u8; 32] = key
                    .try_into()
                    .map_err(|_| Error::private_key(key, "expected 32 bytes"))?;
                Ok(Self::Ed25519(Ed25519Node::from_secret(
                    secret, [0; 32], 0, [0; 4], 0,
                )))
            }
        }
    }

    /// Account-level watch-only node from a raw public key and a zero chain code.
    pub fn from_public_key(coin: Coin, key: &[u8]) -> Result<Self> {
        let depth = Level::Account.depth();
        match coin.curve() {
            Curve::Secp256k1 => {
                let public_key = PublicKey::from_slice(key).map_err(|e| Error::public_key(key, e))?;
                Ok(Self::Secp256k1(SecpNode::Public(Xpub {
                    network: network_kind(coin),
                    depth,
                    parent_fingerprint: Fingerprint::default(),
                    child_number: ChildNumber::from(0),
                    public_key,
                    chain_code: ChainCode::from([0u8; 32]),
                })))
            }
            Curve::Ed25519 => Ok(Self::Ed25519(Ed25519Node::from_public(
                key, [0; 32], depth, [0; 4], 0,
            )?)),
        }
    }

    /// Depth below the master node.
    pub fn depth(&self) -> u8 {
        match self {
            Self::Secp256k1(SecpNode::Private(x)) => x.depth,
            Self::Secp256k1(SecpNode::Public(x)) => x.depth,
            Self::Ed25519(node) => node.depth,
        }
    }

    /// Position in the BIP-44 tree.
    pub fn level(&self) -> Level {
        Level::from_depth(self.depth())
    }

    /// Whether the node has no private key.
    pub fn is_public_only(&self) -> bool {
        match self {
            Self::Secp256k1(SecpNode::Private(_)) => false,
            Self::Secp256k1(SecpNode::Public(_)) => true,
            Self::Ed25519(node) => node.secret.is_none(),
        }
    }

    /// Whether children can be derived; SLIP-10 ed25519 has no public derivation.
    pub fn can_derive(&self) -> bool {
        match self {
            Self::Secp256k1(_) => true,
            Self::Ed25519(node) => node.secret.is_some(),
        }
    }

    /// Derive one child.
    pub fn derive(&self, index: ChildIndex) -> Result<Self> {
        if self.depth() == u8::MAX {
            return Err(Error::Derivation("maximum depth reached".into()));
        }
        let child = ChildNumber::from(index.to_u32());
        match self {
            Self::Secp256k1(SecpNode::Private(xpriv)) => {
                let secp = Secp256k1::signing_only();
                xpriv
                    .derive_priv(&secp, &[child])
                    .map(|x| Self::Secp256k1(SecpNode::Private(x)))
                    .map_err(|e| Error::Derivation(format!("child {index}: {e}")))
            }
            Self::Secp256k1(SecpNode::Public(xpub)) => {
                let secp = Secp256k1::verification_only();
                xpub.ckd_pub(&secp, child)
                    .map(|x| Self::Secp256k1(SecpNode::Public(x)))
                    .map_err(|e| Error::Derivation(format!("child {index}: {e}")))
            }
            Self::Ed25519(node) => node.derive(index).map(Self::Ed25519),
        }
    }

    /// Every encoding of this node; private kinds only when the secret is known.
    pub fn key_record(&self, coin: Coin, bip: Bip) -> Result<KeyRecord<BipKeyKind>> {
        let versions = bip.key_versions(coin);
        let mut record = KeyRecord::new();

        match self {
            Self::Secp256k1(node) => {
                let xpub = match node {
                    SecpNode::Private(xpriv) => Xpub::from_priv(&Secp256k1::signing_only(), xpriv),
                    SecpNode::Public(xpub) => *xpub,
                };
                let public = xpub.public_key;
                let mut ex_pub = ExtendedKeyData {
                    version: versions.public,
                    depth: xpub.depth,
                    parent_fingerprint: fingerprint_bytes(&xpub.parent_fingerprint),
                    child_number: u32::from(xpub.child_number),
                    chain_code: chain_code_bytes(&xpub.chain_code),
                    key: Zeroizing::new(public.serialize()),
                };
                record.insert(BipKeyKind::ExPub, ex_pub.encode());
                record.insert(BipKeyKind::RawComprPub, hex::encode(public.serialize()));
                record.insert(
                    BipKeyKind::RawUncomprPub,
                    hex::encode(&public.serialize_uncompressed()[1..]),
                );

                if let SecpNode::Private(xpriv) = node {
                    let secret = Zeroizing::new(xpriv.private_key.secret_bytes());
                    ex_pub.version = versions.private;
                    ex_pub.key = prefixed_secret(&secret);
                    record.insert(BipKeyKind::ExPriv, ex_pub.encode());
                    record.insert(BipKeyKind::RawPriv, hex::encode(*secret));
                    if let Some(prefix) = coin.wif_prefix() {
                        let mut payload = Zeroizing::new(secret.to_vec());
                        payload.push(0x01);
                        record.insert(BipKeyKind::WifPriv, base58check_encode(&[prefix], &payload));
                    }
                }
                record.insert(BipKeyKind::Address, secp256k1_address(coin, bip, &public)?);
            }
            Self::Ed25519(node) => {
                let public = node.public_33();
                let mut ex_key = ExtendedKeyData {
                    version: versions.public,
                    depth: node.depth,
                    parent_fingerprint: node.parent_fingerprint,
                    child_number: node.child_number,
                    chain_code: node.chain_code,
                    key: Zeroizing::new(public),
                };
                record.insert(BipKeyKind::ExPub, ex_key.encode());
                record.insert(BipKeyKind::RawComprPub, hex::encode(public));
                record.insert(BipKeyKind::RawUncomprPub, hex::encode(public));

                if let Some(secret) = &node.secret {
                    ex_key.version = versions.private;
                    ex_key.key = prefixed_secret(secret);
                    record.insert(BipKeyKind::ExPriv, ex_key.encode());
                    record.insert(BipKeyKind::RawPriv, hex::encode(secret.as_slice()));
                }
                record.insert(BipKeyKind::Address, ed25519_address(coin, &node.public)?);
            }
        }
        Ok(record)
    }
}
