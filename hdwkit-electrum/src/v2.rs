//! Electrum V2 wallets: BIP-32 trees under a seed-versioned mnemonic.

use bitcoin::NetworkKind;
use bitcoin::bip32::{ChildNumber, Xpriv, Xpub};
use bitcoin::secp256k1::{PublicKey, Secp256k1, SecretKey};
use hdwkit::encoding::{base58check_decode, base58check_encode, segwit_encode};
use hdwkit::hash::hash160;
use hdwkit::{
    AddressCollection, ChildIndex, DataValue, Error, HdWallet, KeyFormat, KeyRecord, Result,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::kind::{ElectrumDataKind, ElectrumKeyKind};
use crate::v2_mnemonic::{self, MnemonicType};
use crate::wallet::{self, ElectrumParams, Levels, Meta, Record};

const XPRV: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];
const XPUB: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];
const ZPRV: [u8; 4] = [0x04, 0xb2, 0x43, 0x0c];
const ZPUB: [u8; 4] = [0x04, 0xb2, 0x47, 0x46];
const P2PKH_VERSION: u8 = 0x00;
const WIF_PREFIX: u8 = 0x80;
const SEGWIT_HRP: &str = "bc";

impl MnemonicType {
    const fn private_version(self) -> [u8; 4] {
        match self {
            Self::Standard => XPRV,
            Self::Segwit => ZPRV,
        }
    }

    const fn public_version(self) -> [u8; 4] {
        match self {
            Self::Standard => XPUB,
            Self::Segwit => ZPUB,
        }
    }

    fn from_version(version: &[u8]) -> Option<(Self, bool)> {
        Self::ALL.into_iter().find_map(|t| {
            if version == t.private_version() {
                Some((t, true))
            } else if version == t.public_version() {
                Some((t, false))
            } else {
                None
            }
        })
    }
}

#[derive(Clone, Copy)]
enum V2Node {
    Private(Xpriv),
    Public(Xpub),
}

impl V2Node {
    fn public(&self) -> Xpub {
        match self {
            Self::Private(xpriv) => Xpub::from_priv(&Secp256k1::signing_only(), xpriv),
            Self::Public(xpub) => *xpub,
        }
    }

    fn derive(&self, index: ChildIndex) -> Result<Self> {
        let child = ChildNumber::from(index.to_u32());
        match self {
            Self::Private(xpriv) => xpriv
                .derive_priv(&Secp256k1::signing_only(), &[child])
                .map(Self::Private),
            Self::Public(xpub) => xpub
                .ckd_pub(&Secp256k1::verification_only(), child)
                .map(Self::Public),
        }
        .map_err(|e| Error::Derivation(format!("child {index}: {e}")))
    }

    /// Record of the node; extended forms only for the master.
    fn key_record(&self, mnemonic_type: MnemonicType, extended: bool) -> Result<Record> {
        let xpub = self.public();
        let public = xpub.public_key;
        let mut record = KeyRecord::new();
        if extended {
            record.insert(
                ElectrumKeyKind::ExPub,
                with_version(mnemonic_type.public_version(), &xpub.encode()),
            );
        }
        record.insert(ElectrumKeyKind::RawComprPub, hex::encode(public.serialize()));
        record.insert(
            ElectrumKeyKind::RawUncomprPub,
            hex::encode(&public.serialize_uncompressed()[1..]),
        );
        if let Self::Private(xpriv) = self {
            if extended {
                let encoded = Zeroizing::new(xpriv.encode());
                record.insert(
                    ElectrumKeyKind::ExPriv,
                    with_version(mnemonic_type.private_version(), &*encoded),
                );
            }
            let secret = Zeroizing::new(xpriv.private_key.secret_bytes());
            record.insert(ElectrumKeyKind::RawPriv, hex::encode(*secret));
            let mut payload = Zeroizing::new(secret.to_vec());
            payload.push(0x01);
            record.insert(ElectrumKeyKind::WifPriv, base58check_encode(&[WIF_PREFIX], &payload));
        }
        record.insert(ElectrumKeyKind::Address, address(mnemonic_type, &public)?);
        Ok(record)
    }
}

fn with_version(version: [u8; 4], encoded: &[u8; 78]) -> String {
    base58check_encode(&version, &encoded[4..])
}

fn address(mnemonic_type: MnemonicType, public: &PublicKey) -> Result<String> {
    let hash = hash160(&public.serialize());
    match mnemonic_type {
        MnemonicType::Standard => Ok(base58check_encode(&[P2PKH_VERSION], &hash)),
        MnemonicType::Segwit => segwit_encode(SEGWIT_HRP, 0, &hash),
    }
}

/// An Electrum V2 wallet, standard or segwit.
#[derive(Clone)]
pub struct ElectrumV2Wallet {
    meta: Meta,
    mnemonic_type: MnemonicType,
    root: V2Node,
    levels: Levels,
}

impl ElectrumV2Wallet {
    /// Reported as `spec_name`.
    pub const SPEC_NAME: &'static str = "Electrum V2";

    fn new(meta: Meta, mnemonic_type: MnemonicType, root: V2Node) -> Result<Self> {
        if mnemonic_type == MnemonicType::Segwit && matches!(root, V2Node::Public(_)) {
            return Err(Error::unsupported(
                "watch-only wallet",
                "segwit master keys are hardened-derived",
            ));
        }
        debug!(
            %mnemonic_type,
            watch_only = matches!(root, V2Node::Public(_)),
            "created Electrum V2 wallet root"
        );
        Ok(Self {
            meta,
            mnemonic_type,
            root,
            levels: Levels::default(),
        })
    }

    /// Wallet name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Standard or segwit.
    pub fn mnemonic_type(&self) -> MnemonicType {
        self.mnemonic_type
    }

    /// Node addresses hang from: `m` for standard, `m/0'` for segwit.
    fn account(&self) -> Result<V2Node> {
        match self.mnemonic_type {
            MnemonicType::Standard => Ok(self.root),
            MnemonicType::Segwit => self.root.derive(ChildIndex::hardened(0)?),
        }
    }
}

impl HdWallet for ElectrumV2Wallet {
    type KeyKind = ElectrumKeyKind;
    type DataKind = ElectrumDataKind;
    type Params = ElectrumParams;

    fn generate(&mut self, params: &ElectrumParams) -> Result<()> {
        if params.change_idx >= ChildIndex::HARDENED_OFFSET {
            return Err(Error::IndexOutOfRange {
                name: "change index",
                value: u64::from(params.change_idx),
                max: u64::from(ChildIndex::HARDENED_OFFSET - 1),
            });
        }
        let end = u64::from(params.addr_off) + u64::from(params.addr_num);
        if end > u64::from(ChildIndex::HARDENED_OFFSET) {
            return Err(Error::IndexOutOfRange {
                name: "address offset + number",
                value: end,
                max: u64::from(ChildIndex::HARDENED_OFFSET),
            });
        }

        let change = self
            .account()?
            .derive(ChildIndex::Normal(params.change_idx))?;
        let mut addresses = AddressCollection::new(params.addr_off, KeyFormat::ADDRESS);
        for i in 0..params.addr_num {
            let node = change.derive(ChildIndex::Normal(params.addr_off + i))?;
            addresses.push(node.key_record(self.mnemonic_type, false)?);
        }
        let levels = Levels {
            master_key: Some(self.root.key_record(self.mnemonic_type, true)?),
            change_idx: Some(params.change_idx),
            address_off: Some(params.addr_off),
            addresses: Some(addresses),
        };
        debug!(
            mnemonic_type = %self.mnemonic_type,
            change = params.change_idx,
            addresses = params.addr_num,
            "generated Electrum V2 wallet"
        );
        self.levels = levels;
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        matches!(self.root, V2Node::Public(_))
    }

    fn get_data(&self, kind: ElectrumDataKind) -> Option<DataValue<'_, ElectrumKeyKind>> {
        wallet::get_data(
            &self.meta,
            &self.levels,
            Self::SPEC_NAME,
            Some(self.mnemonic_type.name()),
            kind,
        )
    }
}

/// Builds [`ElectrumV2Wallet`]s of one mnemonic type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectrumV2WalletFactory {
    mnemonic_type: MnemonicType,
}

impl ElectrumV2WalletFactory {
    /// Create a factory for `mnemonic_type` wallets.
    pub const fn new(mnemonic_type: MnemonicType) -> Self {
        Self { mnemonic_type }
    }

    /// Mnemonic type of the wallets built.
    pub const fn mnemonic_type(&self) -> MnemonicType {
        self.mnemonic_type
    }

    /// Generate a random 12 or 24-word mnemonic of this factory's type.
    pub fn create_random(
        &self,
        name: &str,
        word_count: usize,
        passphrase: Option<&str>,
    ) -> Result<ElectrumV2Wallet> {
        let phrase = v2_mnemonic::generate(word_count, self.mnemonic_type)?;
        self.create_from_mnemonic(name, &phrase, passphrase)
    }

    /// Build a wallet from a V2 mnemonic and optional seed extension.
    ///
    /// Phrase and passphrase are both normalized (lowercase, single spaces).
    pub fn create_from_mnemonic(
        &self,
        name: &str,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<ElectrumV2Wallet> {
        let normalized = Zeroizing::new(hdwkit::mnemonic::normalize(phrase));
        v2_mnemonic::validate(&normalized, self.mnemonic_type)?;
        let passphrase = passphrase.map(|p| Zeroizing::new(hdwkit::mnemonic::normalize(p)));
        let seed = v2_mnemonic::to_seed(&normalized, passphrase.as_deref().map_or("", String::as_str));
        let mut wallet = self.create_from_seed(name, &*seed)?;
        wallet.meta.mnemonic = Some(normalized);
        wallet.meta.passphrase = passphrase;
        Ok(wallet)
    }

    /// Build a wallet from a 16 to 64-byte seed.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<ElectrumV2Wallet> {
        if !(16..=64).contains(&seed.len()) {
            return Err(Error::seed(seed, format!("expected 16 to 64 bytes, got {}", seed.len())));
        }
        let xpriv = Xpriv::new_master(NetworkKind::Main, seed).map_err(|e| Error::seed(seed, e))?;
        let mut meta = Meta::new(name);
        meta.seed = Some(Zeroizing::new(hex::encode(seed)));
        ElectrumV2Wallet::new(meta, self.mnemonic_type, V2Node::Private(xpriv))
    }

    /// Build a wallet from a depth-0 extended key of this factory's type.
    pub fn create_from_extended_key(&self, name: &str, encoded: &str) -> Result<ElectrumV2Wallet> {
        let encoded = encoded.trim();
        let mut data = Zeroizing::new(base58check_decode(encoded)?);
        if data.len() != 78 {
            return Err(Error::extended_key(
                encoded,
                format!("expected 78 bytes, got {}", data.len()),
            ));
        }
        let (mnemonic_type, private) = MnemonicType::from_version(&data[..4])
            .ok_or_else(|| Error::extended_key(encoded, "unknown version"))?;
        if mnemonic_type != self.mnemonic_type {
            return Err(Error::extended_key(
                encoded,
                format!("{mnemonic_type} key given to a {} factory", self.mnemonic_type),
            ));
        }
        if data[4] != 0 {
            return Err(Error::extended_key(encoded, "not a master key (depth is not 0)"));
        }
        // The bitcoin crate only decodes xprv/xpub versions.
        let node = if private {
            data[..4].copy_from_slice(&XPRV);
            V2Node::Private(Xpriv::decode(&data).map_err(|e| Error::extended_key(encoded, e))?)
        } else {
            data[..4].copy_from_slice(&XPUB);
            V2Node::Public(Xpub::decode(&data).map_err(|e| Error::extended_key(encoded, e))?)
        };
        ElectrumV2Wallet::new(Meta::new(name), self.mnemonic_type, node)
    }

    /// Build a wallet from a 32-byte master private key (zero chain code).
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<ElectrumV2Wallet> {
        let private_key = SecretKey::from_slice(key).map_err(|e| Error::private_key(key, e))?;
        let xpriv = Xpriv {
            network: NetworkKind::Main,
            depth: 0,
            parent_fingerprint: Default::default(),
            child_number: ChildNumber::from(0),
            private_key,
            chain_code: [0u8; 32].into(),
        };
        ElectrumV2Wallet::new(Meta::new(name), self.mnemonic_type, V2Node::Private(xpriv))
    }

    /// Build a watch-only standard wallet from a master public key (zero chain code).
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<ElectrumV2Wallet> {
        let public_key = PublicKey::from_slice(key).map_err(|e| Error::public_key(key, e))?;
        let xpub = Xpub {
            network: NetworkKind::Main,
            depth: 0,
            parent_fingerprint: Default::default(),
            child_number: ChildNumber::from(0),
            public_key,
            chain_code: [0u8; 32].into(),
        };
        ElectrumV2Wallet::new(Meta::new(name), self.mnemonic_type, V2Node::Public(xpub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdwkit::KeyKind;

    const STANDARD: &str = "cycle rocket west magnet parrot shuffle foot correct salt library feed song";
    const SEGWIT: &str = "bitter grass shiver impose acquire brush forget axis eager alone wine silver";
    const XPRV_MASTER: &str = "xprv9s21ZrQH143K32jECVM729vWgGq4mUDJCk1ozqAStTphzQtCTuoFmFafNoG1g55iCnBTXUzz3zWnDb5CVLGiFvmaZjuazHDL8a81cPQ8KL6";
    const XPUB_MASTER: &str = "xpub661MyMwAqRbcFWohJWt7PHsFEJfZAvw9ZxwQoDa4SoMgsDDM1T7WK3u9E4edkC4ugRnZ8E4xDZRpk8Rnts3Nbt97dPwT52CwBdDWroaZf8U";
    const ZPRV_MASTER: &str = "zprvAWgYBBk7JR8GkraNZJeEodAp2UR1VRWJTXyV1ywuUVs1awUgTiBS1ZTDtLA5F3MFDn1LZzu8dUpSKdT7ToDpvEG6PQu4bJs7zQY47Sd3sEZ";
    const ZPUB_MASTER: &str = "zpub6jftahH18ngZyLeqfLBFAm7YaWFVttE9pku5pNMX2qPzTjoq1FVgZMmhjecyB2nqFb31gHE9vNvbaggU6vvWpNZbXEWLLUjYjFqG95LNyT8";

    fn params(change_idx: u32, addr_num: u32) -> ElectrumParams {
        ElectrumParams {
            change_idx,
            addr_num,
            addr_off: 0,
        }
    }

    fn standard() -> ElectrumV2WalletFactory {
        ElectrumV2WalletFactory::new(MnemonicType::Standard)
    }

    fn segwit() -> ElectrumV2WalletFactory {
        ElectrumV2WalletFactory::new(MnemonicType::Segwit)
    }

    fn first(wallet: &ElectrumV2Wallet) -> &Record {
        wallet
            .get_data(ElectrumDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .and_then(|c| c.get(0))
            .unwrap()
    }

    fn master(wallet: &ElectrumV2Wallet) -> &Record {
        wallet
            .get_data(ElectrumDataKind::MasterKey)
            .and_then(|d| d.as_keys())
            .unwrap()
    }

    #[test]
    fn standard_vector() {
        let mut wallet = standard().create_from_mnemonic("std", STANDARD, None).unwrap();
        wallet.generate(&params(0, 1)).unwrap();
        assert_eq!(master(&wallet).get(ElectrumKeyKind::ExPriv), Some(XPRV_MASTER));
        assert_eq!(master(&wallet).get(ElectrumKeyKind::ExPub), Some(XPUB_MASTER));

        let address = first(&wallet);
        assert_eq!(
            address.get(ElectrumKeyKind::Address),
            Some("1NNkttn1YvVGdqBW4PR6zvc3Zx3H5owKRf")
        );
        assert_eq!(
            address.get(ElectrumKeyKind::WifPriv),
            Some("L4xstkeBfS6RbE6FezmKsHheFqktMMHQMsK7D1Hr5dvFbNhnekHM")
        );
        assert_eq!(
            address.get(ElectrumKeyKind::RawPriv),
            Some("e711975a08cbc059362d1ddfed54fe65c7fde31f704101be9778095d5e52679d")
        );
        assert!(!address.has(ElectrumKeyKind::ExPub));

        wallet.generate(&params(1, 1)).unwrap();
        assert_eq!(
            first(&wallet).get(ElectrumKeyKind::Address),
            Some("1KSezYMhAJMWqFbVFB2JshYg69UpmEXR4D")
        );
    }

    #[test]
    fn passphrase_is_normalized_and_reported() {
        let mut upper = standard()
            .create_from_mnemonic("std", STANDARD, Some("TREZOR"))
            .unwrap();
        upper.generate(&params(0, 1)).unwrap();
        assert_eq!(
            first(&upper).get(ElectrumKeyKind::Address),
            Some("1J66xtdqpUfd27z2YtvgSZfEPL24gaWgCE")
        );
        assert_eq!(
            upper.get_data(ElectrumDataKind::Passphrase).and_then(|d| d.as_text()),
            Some("trezor")
        );

        let mut lower = standard()
            .create_from_mnemonic("std", STANDARD, Some("trezor"))
            .unwrap();
        lower.generate(&params(0, 1)).unwrap();
        assert_eq!(upper.to_map().unwrap(), lower.to_map().unwrap());
    }

    #[test]
    fn segwit_vector() {
        let mut wallet = segwit().create_from_mnemonic("sw", SEGWIT, None).unwrap();
        wallet.generate(&params(0, 1)).unwrap();
        assert_eq!(master(&wallet).get(ElectrumKeyKind::ExPriv), Some(ZPRV_MASTER));
        assert_eq!(master(&wallet).get(ElectrumKeyKind::ExPub), Some(ZPUB_MASTER));
        assert_eq!(
            first(&wallet).get(ElectrumKeyKind::Address),
            Some("bc1q3g5tmkmlvxryhh843v4dz026avatc0zzr6h3af")
        );
        assert_eq!(
            wallet.get_data(ElectrumDataKind::MnemonicType).and_then(|d| d.as_text()),
            Some("segwit")
        );

        wallet.generate(&params(1, 1)).unwrap();
        assert_eq!(
            first(&wallet).get(ElectrumKeyKind::Address),
            Some("bc1qdy94n2q5qcp0kg7v9yzwe6wvfkhnvyzje7nx2p")
        );
    }

    #[test]
    fn mnemonic_type_must_match_factory() {
        assert!(matches!(
            segwit().create_from_mnemonic("x", STANDARD, None),
            Err(Error::InvalidMnemonic { .. })
        ));
        assert!(matches!(
            standard().create_from_mnemonic("x", SEGWIT, None),
            Err(Error::InvalidMnemonic { .. })
        ));
    }

    #[test]
    fn extended_master_keys_reload() {
        let mut from_xprv = standard().create_from_extended_key("k", XPRV_MASTER).unwrap();
        from_xprv.generate(&params(0, 1)).unwrap();
        assert_eq!(
            first(&from_xprv).get(ElectrumKeyKind::Address),
            Some("1NNkttn1YvVGdqBW4PR6zvc3Zx3H5owKRf")
        );
        assert!(!from_xprv.has_data(ElectrumDataKind::Mnemonic));

        let mut from_xpub = standard().create_from_extended_key("k", XPUB_MASTER).unwrap();
        from_xpub.generate(&params(0, 1)).unwrap();
        assert!(from_xpub.is_watch_only());
        assert_eq!(
            first(&from_xpub).get(ElectrumKeyKind::Address),
            Some("1NNkttn1YvVGdqBW4PR6zvc3Zx3H5owKRf")
        );
        let json = from_xpub.to_json(0).unwrap();
        for kind in ElectrumKeyKind::ALL.iter().filter(|k| k.is_private()) {
            assert!(!json.contains(kind.name()));
        }

        let mut from_zprv = segwit().create_from_extended_key("k", ZPRV_MASTER).unwrap();
        from_zprv.generate(&params(0, 1)).unwrap();
        assert_eq!(
            first(&from_zprv).get(ElectrumKeyKind::Address),
            Some("bc1q3g5tmkmlvxryhh843v4dz026avatc0zzr6h3af")
        );
    }

    #[test]
    fn segwit_watch_only_is_rejected() {
        assert!(matches!(
            segwit().create_from_extended_key("k", ZPUB_MASTER),
            Err(Error::Unsupported { .. })
        ));
        let public = hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();
        assert!(segwit().create_from_public_key("k", &public).is_err());
        assert!(standard().create_from_public_key("k", &public).is_ok());
    }

    #[test]
    fn extended_key_checks() {
        assert!(matches!(
            standard().create_from_extended_key("k", ZPRV_MASTER),
            Err(Error::InvalidExtendedKey { .. })
        ));
        let account = "xpub6BosfCnifzxcFwrSzQiqu2DBVTshkCXacvNsWGYJVVhhawA7d4R5WSWGFNbi8Aw6ZRc1brxMyWMzG3DSSSSoekkudhUd9yLb6qx39T9nMdj";
        assert!(matches!(
            standard().create_from_extended_key("k", account),
            Err(Error::InvalidExtendedKey { .. })
        ));
    }

    #[test]
    fn private_key_wallet_derives_from_zero_chain_code() {
        let key = [1u8; 32];
        let mut wallet = standard().create_from_private_key("pk", &key).unwrap();
        wallet.generate(&params(0, 2)).unwrap();
        assert_eq!(
            master(&wallet).get(ElectrumKeyKind::RawPriv),
            Some(hex::encode(key).as_str())
        );
        assert_eq!(
            wallet
                .get_data(ElectrumDataKind::Addresses)
                .and_then(|d| d.as_key_collection())
                .map(|c| c.count()),
            Some(2)
        );
        assert!(standard().create_from_private_key("pk", &[0u8; 32]).is_err());
    }

    #[test]
    fn bounds_leave_wallet_untouched() {
        let mut wallet = standard().create_from_mnemonic("std", STANDARD, None).unwrap();
        wallet.generate(&params(0, 1)).unwrap();
        let before = wallet.to_map().unwrap();
        assert!(matches!(
            wallet.generate(&params(ChildIndex::HARDENED_OFFSET, 1)),
            Err(Error::IndexOutOfRange { .. })
        ));
        let past_normal = ElectrumParams {
            change_idx: 0,
            addr_num: 2,
            addr_off: ChildIndex::HARDENED_OFFSET - 1,
        };
        assert!(wallet.generate(&past_normal).is_err());
        assert_eq!(wallet.to_map().unwrap(), before);
    }

    #[test]
    fn offset_addresses_match_full_walk() {
        let factory = standard();
        let mut full = factory.create_from_mnemonic("std", STANDARD, None).unwrap();
        full.generate(&params(0, 4)).unwrap();
        let mut offset = factory.create_from_mnemonic("std", STANDARD, None).unwrap();
        offset
            .generate(&ElectrumParams {
                change_idx: 0,
                addr_num: 2,
                addr_off: 2,
            })
            .unwrap();
        let full = full.get_data(ElectrumDataKind::Addresses).and_then(|d| d.as_key_collection()).unwrap();
        let offset = offset.get_data(ElectrumDataKind::Addresses).and_then(|d| d.as_key_collection()).unwrap();
        assert_eq!(offset.get(0), full.get(2));
        assert_eq!(offset.key_of(0), "address_3");
    }

    #[test]
    fn random_wallet_round_trips() {
        let factory = segwit();
        let mut random = factory.create_random("r", 12, Some("pw")).unwrap();
        random.generate(&params(0, 1)).unwrap();
        let phrase = random
            .get_data(ElectrumDataKind::Mnemonic)
            .and_then(|d| d.as_text())
            .unwrap()
            .to_owned();
        let mut restored = factory.create_from_mnemonic("r", &phrase, Some("pw")).unwrap();
        restored.generate(&params(0, 1)).unwrap();
        assert_eq!(random.to_map().unwrap(), restored.to_map().unwrap());
    }

    #[test]
    fn json_field_order() {
        let mut wallet = standard().create_from_mnemonic("std", STANDARD, Some("")).unwrap();
        wallet.generate(&params(0, 1)).unwrap();
        let keys: Vec<_> = wallet.to_map().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "wallet_name",
                "spec_name",
                "mnemonic_type",
                "mnemonic",
                "passphrase",
                "seed_bytes",
                "master_key",
                "change_idx",
                "address_off",
                "addresses"
            ]
        );
    }
}
