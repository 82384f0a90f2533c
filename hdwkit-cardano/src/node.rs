//! BIP32-Ed25519 key nodes (Khovratovich/Law), as used by Cardano.
//!
//! A private node holds the 64-byte extended secret `kL ‖ kR`; `kL` is a
//! little-endian scalar, always a multiple of 8. Soft children can be
//! derived from the public key alone.
//!
//! Reference: https://github.com/input-output-hk/adrestia/raw/master/user-guide/static/Ed25519_BIP.pdf

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use hdwkit::encoding::{base58check_decode, base58check_encode};
use hdwkit::hash::{hash160, hmac_sha256, hmac_sha512};
use hdwkit::{ChildIndex, Error, Level, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

const ED25519_SEED_KEY: &[u8] = b"ed25519 seed";
const ICARUS_ROUNDS: u32 = 4096;

/// Version bytes of serialized public nodes.
pub const PUBLIC_VERSION: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];
/// Version bytes of serialized private nodes.
pub const PRIVATE_VERSION: [u8; 4] = [0x0f, 0x43, 0x31, 0xd4];

// version ‖ depth ‖ fingerprint ‖ index ‖ chain code, then the key
const HEADER_LEN: usize = 4 + 1 + 4 + 4 + 32;
const PUBLIC_LEN: usize = HEADER_LEN + 33;
const PRIVATE_LEN: usize = HEADER_LEN + 65;

/// `8 * z`, where `z` is the 28-byte little-endian integer `zl[..28]`.
fn times_eight(zl: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut prev = 0u8;
    for (o, &z) in out.iter_mut().zip(&zl[..28]) {
        *o = (z << 3) | (prev >> 5);
        prev = z;
    }
    out[28] = prev >> 5;
    out
}

/// Little-endian addition modulo 2^256.
fn add_le(a: &[u8], b: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut carry = 0u16;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        let sum = u16::from(x) + u16::from(y) + carry;
        *o = sum as u8;
        carry = sum >> 8;
    }
    out
}

fn public_of(kl: &[u8]) -> [u8; 32] {
    let mut bytes = Zeroizing::new([0u8; 32]);
    bytes.copy_from_slice(&kl[..32]);
    EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(*bytes))
        .compress()
        .to_bytes()
}

fn decompress(public: &[u8; 32]) -> Result<EdwardsPoint> {
    CompressedEdwardsY(*public)
        .decompress()
        .ok_or_else(|| Error::public_key(public, "not a valid ed25519 point"))
}

/// A BIP32-Ed25519 node carrying its position in the tree.
#[derive(Clone)]
pub(crate) struct CardanoNode {
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
    chain_code: [u8; 32],
    secret: Option<Zeroizing<[u8; 64]>>,
    public: [u8; 32],
}

impl CardanoNode {
    fn private(
        secret: Zeroizing<[u8; 64]>,
        chain_code: [u8; 32],
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: u32,
    ) -> Self {
        let public = public_of(&secret[..32]);
        Self {
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            secret: Some(secret),
            public,
        }
    }

    /// Icarus master key: PBKDF2-HMAC-SHA512 of the passphrase salted with the
    /// mnemonic entropy, then clamped.
    pub fn from_icarus(entropy: &[u8], passphrase: &str) -> Self {
        let mut out = Zeroizing::new([0u8; 96]);
        pbkdf2_hmac::<Sha512>(passphrase.as_bytes(), entropy, ICARUS_ROUNDS, out.as_mut_slice());
        out[0] &= 0b1111_1000;
        out[31] &= 0b0001_1111;
        out[31] |= 0b0100_0000;

        let mut secret = Zeroizing::new([0u8; 64]);
        secret.copy_from_slice(&out[..64]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&out[64..]);
        Self::private(secret, chain_code, 0, [0; 4], 0)
    }

    /// Ledger master key: the BIP-39 seed is hashed until bit 5 of the last
    /// scalar byte is clear.
    pub fn from_ledger(seed: &[u8]) -> Result<Self> {
        let mut digest = Zeroizing::new(hmac_sha512(ED25519_SEED_KEY, &[seed])?);
        while digest[31] & 0b0010_0000 != 0 {
            let previous = Zeroizing::new(*digest);
            *digest = hmac_sha512(ED25519_SEED_KEY, &[previous.as_slice()])?;
        }
        digest[0] &= 0b1111_1000;
        digest[31] &= 0b0111_1111;
        digest[31] |= 0b0100_0000;

        let chain_code = hmac_sha256(ED25519_SEED_KEY, &[&[0x01], seed])?;
        let mut secret = Zeroizing::new([0u8; 64]);
        secret.copy_from_slice(&digest[..]);
        Ok(Self::private(secret, chain_code, 0, [0; 4], 0))
    }

    /// Master-level node from `kL ‖ kR`, or `kL ‖ kR ‖ chain code`.
    pub fn from_private_key(key: &[u8]) -> Result<Self> {
        let chain_code = match key.len() {
            64 => [0u8; 32],
            96 => {
                let mut chain_code = [0u8; 32];
                chain_code.copy_from_slice(&key[64..]);
                chain_code
            }
            n => {
                return Err(Error::private_key(
                    key,
                    format!("expected 64 or 96 bytes, got {n}"),
                ));
            }
        };
        if key[0] & 0b111 != 0 {
            return Err(Error::private_key(key, "kL is not a multiple of 8"));
        }
        let mut secret = Zeroizing::new([0u8; 64]);
        secret.copy_from_slice(&key[..64]);
        Ok(Self::private(secret, chain_code, 0, [0; 4], 0))
    }

    /// Account-level watch-only node from `A`, or `A ‖ chain code`.
    pub fn from_public_key(key: &[u8]) -> Result<Self> {
        let (point, chain_code) = match key.len() {
            32 => (key, [0u8; 32]),
            64 => {
                let mut chain_code = [0u8; 32];
                chain_code.copy_from_slice(&key[32..]);
                (&key[..32], chain_code)
            }
            n => {
                return Err(Error::public_key(
                    key,
                    format!("expected 32 or 64 bytes, got {n}"),
                ));
            }
        };
        let mut public = [0u8; 32];
        public.copy_from_slice(point);
        decompress(&public)?;
        Ok(Self {
            depth: Level::Account.depth(),
            parent_fingerprint: [0; 4],
            child_number: ChildIndex::HARDENED_OFFSET,
            chain_code,
            secret: None,
            public,
        })
    }

    /// Parse a serialized node (78 bytes public, 110 bytes private).
    pub fn from_extended_key(encoded: &str) -> Result<Self> {
        let data = Zeroizing::new(
            base58check_decode(encoded).map_err(|e| Error::extended_key(encoded, e))?,
        );
        let (private, expected) = match data.get(..4) {
            Some(v) if v == PRIVATE_VERSION => (true, PRIVATE_LEN),
            Some(v) if v == PUBLIC_VERSION => (false, PUBLIC_LEN),
            _ => return Err(Error::extended_key(encoded, "unknown version bytes")),
        };
        if data.len() != expected {
            return Err(Error::extended_key(
                encoded,
                format!("expected {expected} bytes, got {}", data.len()),
            ));
        }
        if data[HEADER_LEN] != 0x00 {
            return Err(Error::extended_key(encoded, "key data must start with 0x00"));
        }

        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let mut child_number = [0u8; 4];
        child_number.copy_from_slice(&data[9..13]);
        let child_number = u32::from_be_bytes(child_number);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&data[13..HEADER_LEN]);
        let key = &data[HEADER_LEN + 1..];

        if private {
            let mut secret = Zeroizing::new([0u8; 64]);
            secret.copy_from_slice(key);
            Ok(Self::private(secret, chain_code, depth, parent_fingerprint, child_number))
        } else {
            let mut public = [0u8; 32];
            public.copy_from_slice(key);
            decompress(&public).map_err(|e| Error::extended_key(encoded, e))?;
            Ok(Self {
                depth,
                parent_fingerprint,
                child_number,
                chain_code,
                secret: None,
                public,
            })
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn level(&self) -> Level {
        Level::from_depth(self.depth)
    }

    pub fn is_public_only(&self) -> bool {
        self.secret.is_none()
    }

    /// Raw public key `A`.
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// `kL ‖ kR`, when known.
    pub fn secret(&self) -> Option<&[u8; 64]> {
        self.secret.as_deref()
    }

    /// Public key with the `0x00` prefix used in serialization.
    pub fn public_33(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[1..].copy_from_slice(&self.public);
        out
    }

    fn fingerprint(&self) -> [u8; 4] {
        let id = hash160(&self.public_33());
        [id[0], id[1], id[2], id[3]]
    }

    fn header(&self, version: [u8; 4]) -> Vec<u8> {
        let mut header = Vec::with_capacity(PRIVATE_LEN);
        header.extend_from_slice(&version);
        header.push(self.depth);
        header.extend_from_slice(&self.parent_fingerprint);
        header.extend_from_slice(&self.child_number.to_be_bytes());
        header.extend_from_slice(&self.chain_code);
        header
    }

    pub fn extended_public(&self) -> String {
        let mut data = self.header(PUBLIC_VERSION);
        data.extend_from_slice(&self.public_33());
        base58check_encode(&data[..4], &data[4..])
    }

    pub fn extended_private(&self) -> Option<String> {
        let secret = self.secret.as_ref()?;
        let mut data = Zeroizing::new(self.header(PRIVATE_VERSION));
        data.push(0x00);
        data.extend_from_slice(secret.as_slice());
        Some(base58check_encode(&data[..4], &data[4..]))
    }

    /// Derive one child. Hardened children need the private key.
    pub fn derive(&self, index: ChildIndex) -> Result<Self> {
        let depth = self
            .depth
            .checked_add(1)
            .ok_or_else(|| Error::Derivation("maximum depth reached".into()))?;
        let raw = index.to_u32().to_le_bytes();

        let (z, chain) = match (&self.secret, index.is_hardened()) {
            (Some(secret), true) => (
                Zeroizing::new(hmac_sha512(&self.chain_code, &[&[0x00], secret.as_slice(), &raw])?),
                hmac_sha512(&self.chain_code, &[&[0x01], secret.as_slice(), &raw])?,
            ),
            (None, true) => {
                return Err(Error::Derivation(format!(
                    "hardened child {index} needs a private key"
                )));
            }
            (_, false) => (
                Zeroizing::new(hmac_sha512(&self.chain_code, &[&[0x02], &self.public, &raw])?),
                hmac_sha512(&self.chain_code, &[&[0x03], &self.public, &raw])?,
            ),
        };
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&chain[32..]);
        let tweak = Zeroizing::new(times_eight(&z[..28]));

        match &self.secret {
            Some(secret) => {
                let mut child = Zeroizing::new([0u8; 64]);
                child[..32].copy_from_slice(&add_le(&secret[..32], tweak.as_slice()));
                child[32..].copy_from_slice(&add_le(&secret[32..], &z[32..]));
                Ok(Self::private(
                    child,
                    chain_code,
                    depth,
                    self.fingerprint(),
                    index.to_u32(),
                ))
            }
            None => {
                let point = decompress(&self.public)?
                    + EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(*tweak));
                Ok(Self {
                    depth,
                    parent_fingerprint: self.fingerprint(),
                    child_number: index.to_u32(),
                    chain_code,
                    secret: None,
                    public: point.compress().to_bytes(),
                })
            }
        }
    }
}
