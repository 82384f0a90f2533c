//! Electrum V1 wallets: old mnemonics, stretched master key and
//! `sha256d("index:change:"‖mpk)` child offsets.

use bitcoin::secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};
use hdwkit::encoding::base58check_encode;
use hdwkit::entropy::random_bytes;
use hdwkit::hash::{double_sha256, hash160, sha256};
use hdwkit::{
    AddressCollection, DataValue, Error, HdWallet, KeyFormat, KeyRecord, Result, validate_range,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::kind::{ElectrumDataKind, ElectrumKeyKind};
use crate::old_mnemonic;
use crate::wallet::{self, ElectrumParams, Levels, Meta, Record};

const STRETCH_ROUNDS: usize = 100_000;
const P2PKH_VERSION: u8 = 0x00;
const WIF_PREFIX: u8 = 0x80;

#[derive(Clone, Copy)]
enum V1Key {
    Private(SecretKey),
    Public(PublicKey),
}

impl V1Key {
    fn public(&self) -> PublicKey {
        match self {
            Self::Private(secret) => secret.public_key(&Secp256k1::signing_only()),
            Self::Public(public) => *public,
        }
    }

    /// 64-byte master public key, the uncompressed point without prefix.
    fn mpk(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&self.public().serialize_uncompressed()[1..]);
        out
    }

    fn child(&self, change: u32, index: u32) -> Result<Self> {
        let mut data = format!("{index}:{change}:").into_bytes();
        data.extend_from_slice(&self.mpk());
        let tweak = Scalar::from_be_bytes(double_sha256(&data))
            .map_err(|e| Error::Derivation(format!("V1 offset {change}/{index}: {e}")))?;
        match self {
            Self::Private(secret) => secret.add_tweak(&tweak).map(Self::Private),
            Self::Public(public) => public
                .add_exp_tweak(&Secp256k1::verification_only(), &tweak)
                .map(Self::Public),
        }
        .map_err(|e| Error::Derivation(format!("V1 child {change}/{index}: {e}")))
    }

    fn key_record(&self) -> Record {
        let public = self.public();
        let uncompressed = public.serialize_uncompressed();
        let mut record = KeyRecord::new();
        record.insert(ElectrumKeyKind::RawComprPub, hex::encode(public.serialize()));
        record.insert(ElectrumKeyKind::RawUncomprPub, hex::encode(&uncompressed[1..]));
        if let Self::Private(secret) = self {
            let bytes = Zeroizing::new(secret.secret_bytes());
            record.insert(ElectrumKeyKind::RawPriv, hex::encode(*bytes));
            // Old Electrum keys are uncompressed, so the WIF has no 0x01 suffix.
            record.insert(ElectrumKeyKind::WifPriv, base58check_encode(&[WIF_PREFIX], &*bytes));
        }
        record.insert(
            ElectrumKeyKind::Address,
            base58check_encode(&[P2PKH_VERSION], &hash160(&uncompressed)),
        );
        record
    }
}

/// Stretch an old seed into the master private key.
///
/// Electrum stretches the *hex text* of the seed, not its bytes.
fn stretch(seed: &[u8]) -> Zeroizing<[u8; 32]> {
    let text = Zeroizing::new(hex::encode(seed).into_bytes());
    let mut buf = Zeroizing::new(Vec::with_capacity(2 * text.len()));
    buf.extend_from_slice(&text);
    let mut x = Zeroizing::new([0u8; 32]);
    for _ in 0..STRETCH_ROUNDS {
        buf.extend_from_slice(&text);
        *x = sha256(&buf);
        buf.clear();
        buf.extend_from_slice(&*x);
    }
    x
}

/// An Electrum V1 wallet.
#[derive(Clone)]
pub struct ElectrumV1Wallet {
    meta: Meta,
    root: V1Key,
    levels: Levels,
}

impl ElectrumV1Wallet {
    /// Reported as `spec_name`.
    pub const SPEC_NAME: &'static str = "Electrum V1";

    fn new(meta: Meta, root: V1Key) -> Self {
        debug!(watch_only = matches!(root, V1Key::Public(_)), "created Electrum V1 wallet root");
        Self {
            meta,
            root,
            levels: Levels::default(),
        }
    }

    /// Wallet name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }
}

impl HdWallet for ElectrumV1Wallet {
    type KeyKind = ElectrumKeyKind;
    type DataKind = ElectrumDataKind;
    type Params = ElectrumParams;

    fn generate(&mut self, params: &ElectrumParams) -> Result<()> {
        validate_range("address offset + number", params.addr_num, params.addr_off)?;

        let mut addresses = AddressCollection::new(params.addr_off, KeyFormat::ADDRESS);
        for i in 0..params.addr_num {
            let child = self.root.child(params.change_idx, params.addr_off + i)?;
            addresses.push(child.key_record());
        }
        let levels = Levels {
            master_key: Some(self.root.key_record()),
            change_idx: Some(params.change_idx),
            address_off: Some(params.addr_off),
            addresses: Some(addresses),
        };
        debug!(
            change = params.change_idx,
            addresses = params.addr_num,
            "generated Electrum V1 wallet"
        );
        self.levels = levels;
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        matches!(self.root, V1Key::Public(_))
    }

    fn get_data(&self, kind: ElectrumDataKind) -> Option<DataValue<'_, ElectrumKeyKind>> {
        wallet::get_data(&self.meta, &self.levels, Self::SPEC_NAME, None, kind)
    }
}

/// Builds [`ElectrumV1Wallet`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectrumV1WalletFactory;

impl ElectrumV1WalletFactory {
    /// Create a factory.
    pub const fn new() -> Self {
        Self
    }

    /// Generate a random 16-byte seed and its 12-word mnemonic.
    pub fn create_random(&self, name: &str) -> Result<ElectrumV1Wallet> {
        let seed = random_bytes::<16>();
        let phrase = Zeroizing::new(old_mnemonic::encode(seed.as_slice())?);
        self.create_from_mnemonic(name, &phrase)
    }

    /// Build a wallet from an old mnemonic.
    pub fn create_from_mnemonic(&self, name: &str, phrase: &str) -> Result<ElectrumV1Wallet> {
        let normalized = Zeroizing::new(hdwkit::mnemonic::normalize(phrase));
        let seed = Zeroizing::new(old_mnemonic::decode(&normalized)?);
        let mut wallet = self.create_from_seed(name, &seed)?;
        wallet.meta.mnemonic = Some(normalized);
        Ok(wallet)
    }

    /// Build a wallet from a 16 or 32-byte old seed.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<ElectrumV1Wallet> {
        if seed.len() != 16 && seed.len() != 32 {
            return Err(Error::seed(seed, format!("expected 16 or 32 bytes, got {}", seed.len())));
        }
        let master = stretch(seed);
        let secret = SecretKey::from_slice(&*master)
            .map_err(|e| Error::seed(seed, format!("stretched key is invalid: {e}")))?;
        let mut meta = Meta::new(name);
        meta.seed = Some(Zeroizing::new(hex::encode(seed)));
        Ok(ElectrumV1Wallet::new(meta, V1Key::Private(secret)))
    }

    /// Build a wallet from the 32-byte master private key.
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<ElectrumV1Wallet> {
        let secret = SecretKey::from_slice(key).map_err(|e| Error::private_key(key, e))?;
        Ok(ElectrumV1Wallet::new(Meta::new(name), V1Key::Private(secret)))
    }

    /// Build a watch-only wallet from the master public key: 64 bytes
    /// without prefix, or 33/65 bytes with one.
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<ElectrumV1Wallet> {
        let public = if key.len() == 64 {
            let mut prefixed = [0x04u8; 65];
            prefixed[1..].copy_from_slice(key);
            PublicKey::from_slice(&prefixed)
        } else {
            PublicKey::from_slice(key)
        }
        .map_err(|e| Error::public_key(key, e))?;
        Ok(ElectrumV1Wallet::new(Meta::new(name), V1Key::Public(public)))
    }
}
