//! Validated entry points that build BIP wallet shells.

use hdwkit::mnemonic::{self, WordCount};
use hdwkit::{Error, Language, Result};
use tracing::debug;
use zeroize::Zeroizing;

use crate::bip::Bip;
use crate::coin::Coin;
use crate::node::Node;
use crate::wallet::BipWallet;

/// Accepted seed lengths, in bytes.
const SEED_LEN: core::ops::RangeInclusive<usize> = 16..=64;

/// Builds [`BipWallet`]s for one scheme and coin.
///
/// Every entry point returns a wallet with metadata only; call
/// [`HdWallet::generate`](hdwkit::HdWallet::generate) to derive levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BipWalletFactory {
    bip: Bip,
    coin: Coin,
}

impl BipWalletFactory {
    /// Create a factory, rejecting coins the scheme does not define.
    pub fn new(bip: Bip, coin: Coin) -> Result<Self> {
        if !bip.supports(coin) {
            return Err(Error::unsupported("coin", format!("{coin} under {bip}")));
        }
        Ok(Self { bip, coin })
    }

    /// Derivation scheme.
    pub fn bip(&self) -> Bip {
        self.bip
    }

    /// Coin.
    pub fn coin(&self) -> Coin {
        self.coin
    }

    /// Generate a fresh mnemonic and build a wallet from it.
    pub fn create_random(&self, name: &str, words: WordCount, language: Language) -> Result<BipWallet> {
        let phrase = Zeroizing::new(mnemonic::generate(words, language)?.to_string());
        self.create_from_mnemonic(name, &phrase, None)
    }

    /// Build a wallet from a BIP-39 mnemonic in any supported language.
    pub fn create_from_mnemonic(
        &self,
        name: &str,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<BipWallet> {
        let normalized = Zeroizing::new(mnemonic::normalize(phrase));
        let parsed = mnemonic::parse_any(&normalized)?;
        let seed = Zeroizing::new(parsed.to_seed(passphrase.unwrap_or_default()));
        Ok(self
            .create_from_seed(name, seed.as_slice())?
            .with_mnemonic(normalized.to_string(), passphrase))
    }

    /// Build a wallet from raw seed bytes (16 to 64 bytes).
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<BipWallet> {
        if !SEED_LEN.contains(&seed.len()) {
            return Err(Error::seed(
                seed,
                format!("length {} not in 16..=64 bytes", seed.len()),
            ));
        }
        let root = Node::from_seed(self.coin, seed)?;
        Ok(self.wallet(name, root).with_seed(seed))
    }

    /// Build a wallet from a serialized extended key, starting at its depth.
    pub fn create_from_extended_key(&self, name: &str, key: &str) -> Result<BipWallet> {
        let root = Node::from_extended_key(self.coin, self.bip, key.trim())?;
        Ok(self.wallet(name, root))
    }

    /// Build a master-level wallet from a raw 32-byte private key.
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<BipWallet> {
        let root = Node::from_private_key(self.coin, key)?;
        Ok(self.wallet(name, root))
    }

    /// Build an account-level watch-only wallet from a raw public key.
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<BipWallet> {
        let root = Node::from_public_key(self.coin, key)?;
        Ok(self.wallet(name, root))
    }

    fn wallet(&self, name: &str, root: Node) -> BipWallet {
        debug!(
            scheme = %self.bip,
            coin = %self.coin,
            level = %root.level(),
            watch_only = root.is_public_only(),
            "created BIP wallet root"
        );
        BipWallet::new(name, self.bip, self.coin, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{BipDataKind, BipKeyKind};
    use crate::wallet::BipParams;
    use hdwkit::{Chain, DataKind, HdWallet, KeyKind};

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn generated(bip: Bip, coin: Coin, params: &BipParams) -> BipWallet {
        let mut wallet = BipWalletFactory::new(bip, coin)
            .unwrap()
            .create_from_mnemonic("test", MNEMONIC, None)
            .unwrap();
        wallet.generate(params).unwrap();
        wallet
    }

    fn first_address(wallet: &BipWallet) -> String {
        wallet
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .and_then(|c| c.get(0))
            .and_then(|r| r.get(BipKeyKind::Address))
            .unwrap()
            .to_owned()
    }

    fn one_address() -> BipParams {
        BipParams {
            addr_num: 1,
            ..BipParams::default()
        }
    }

    #[test]
    fn known_first_addresses() {
        let cases = [
            (Bip::Bip44, Coin::Bitcoin, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"),
            (Bip::Bip49, Coin::Bitcoin, "37VucYSaXLCAsxYyAPfbSi9eh4iEcbShgf"),
            (Bip::Bip84, Coin::Bitcoin, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"),
            (
                Bip::Bip86,
                Coin::Bitcoin,
                "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
            ),
            (Bip::Bip44, Coin::BitcoinTestnet, "mkpZhYtJu2r87Js3pDiWJDmPte2NRZ8bJV"),
            (Bip::Bip84, Coin::BitcoinTestnet, "tb1q6rz28mcfaxtmd6v789l9rrlrusdprr9pqcpvkl"),
            (Bip::Bip44, Coin::Litecoin, "LUWPbpM43E2p7ZSh8cyTBEkvpHmr3cB8Ez"),
            (Bip::Bip84, Coin::Litecoin, "ltc1qjmxnz78nmc8nq77wuxh25n2es7rzm5c2rkk4wh"),
            (Bip::Bip44, Coin::Dogecoin, "DBus3bamQjgJULBJtYXpEzDWQRwF5iwxgC"),
            (Bip::Bip44, Coin::Dash, "XoJA8qE3N2Y3jMLEtZ3vcN42qseZ8LvFf5"),
            (Bip::Bip44, Coin::Ethereum, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"),
            (Bip::Bip44, Coin::Tron, "TUEZSdKsoDHQMeZwihtdoBiN46zxhGWYdH"),
            (Bip::Bip44, Coin::Cosmos, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4"),
            (Bip::Bip44, Coin::Solana, "B9sVeu4rJU12oUrUtzjc6BSNuEXdfvurZkdcaTVkP2LY"),
        ];
        for (bip, coin, expected) in cases {
            let wallet = generated(bip, coin, &one_address());
            assert_eq!(first_address(&wallet), expected, "{bip} {coin}");
        }
    }

    #[test]
    fn solana_levels_are_all_hardened() {
        let wallet = generated(Bip::Bip44, Coin::Solana, &one_address());
        let change = wallet.get_data(BipDataKind::ChangeKey).unwrap().as_keys().unwrap();
        // m/44'/501'/0'/0', the path most Solana wallets stop at
        assert_eq!(
            change.get(BipKeyKind::Address),
            Some("HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk")
        );
        assert!(!change.has(BipKeyKind::WifPriv));
    }

    #[test]
    fn full_walk_from_mnemonic() {
        let wallet = generated(Bip::Bip44, Coin::Bitcoin, &BipParams::default());
        assert!(!wallet.is_watch_only());
        for kind in BipDataKind::ALL.iter().filter(|k| **k != BipDataKind::Passphrase) {
            assert!(wallet.has_data(*kind), "{kind:?}");
        }
        let master = wallet.get_data(BipDataKind::MasterKey).unwrap().as_keys().unwrap();
        assert_eq!(
            master.get(BipKeyKind::ExPriv),
            Some("xprv9s21ZrQH143K3GJpoapnV8SFfukcVBSfeCficPSGfubmSFDxo1kuHnLisriDvSnRRuL2Qrg5ggqHKNVpxR86QEC8w35uxmGoggxtQTPvfUu")
        );
        assert_eq!(
            master.get(BipKeyKind::RawPriv),
            Some("1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67")
        );
        let account = wallet.get_data(BipDataKind::AccountKey).unwrap().as_keys().unwrap();
        assert_eq!(
            account.get(BipKeyKind::ExPub),
            Some("xpub6BosfCnifzxcFwrSzQiqu2DBVTshkCXacvNsWGYJVVhhawA7d4R5WSWGFNbi8Aw6ZRc1brxMyWMzG3DSSSSoekkudhUd9yLb6qx39T9nMdj")
        );
        let first = wallet
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .and_then(|c| c.get(0))
            .unwrap();
        assert_eq!(
            first.get(BipKeyKind::WifPriv),
            Some("L4p2b9VAf8k5aUahF1JCJUzZkgNEAqLfq8DDdQiyAprQAKSbu8hf")
        );
        assert_eq!(
            first.get(BipKeyKind::RawUncomprPub),
            Some("aaeb52dd7494c361049de67cc680e83ebcbbbdbeb13637d92cd845f70308af5e9370164133294e5fd1679672fe7866c307daf97281a28f66dca7cbb52919824f")
        );
    }

    #[test]
    fn bip32_vector_1_master_from_seed() {
        let mut wallet = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin)
            .unwrap()
            .create_from_seed("v1", &hex_literal::hex!("000102030405060708090a0b0c0d0e0f"))
            .unwrap();
        wallet.generate(&one_address()).unwrap();
        let master = wallet.get_data(BipDataKind::MasterKey).unwrap().as_keys().unwrap();
        assert_eq!(
            master.get(BipKeyKind::ExPriv),
            Some("xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi")
        );
    }

    #[test]
    fn ethereum_from_seed_with_offset() {
        let seed = hex_literal::hex!(
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
        let mut wallet = BipWalletFactory::new(Bip::Bip44, Coin::Ethereum)
            .unwrap()
            .create_from_seed("eth", &seed)
            .unwrap();
        wallet
            .generate(&BipParams {
                addr_num: 3,
                addr_off: 2,
                ..BipParams::default()
            })
            .unwrap();

        let master = wallet.get_data(BipDataKind::MasterKey).unwrap().as_keys().unwrap();
        assert_eq!(
            master.get(BipKeyKind::RawPriv),
            Some("1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67")
        );
        assert_eq!(wallet.get_data(BipDataKind::AddressOff).unwrap().as_index(), Some(2));

        let map = wallet.to_map().unwrap();
        let addresses = map["addresses"].as_object().unwrap();
        let keys: Vec<_> = addresses.keys().cloned().collect();
        assert_eq!(keys, ["address_3", "address_4", "address_5"]);
        assert_eq!(addresses["address_3"]["address"], "0xb6716976A3ebe8D39aCEB04372f22Ff8e6802D7A");
        assert_eq!(
            addresses["address_3"]["raw_priv"],
            "5b824bd1104617939cd07c117ddc4301eb5beeca0904f964158963d69ab9d831"
        );
        assert_eq!(addresses["address_4"]["address"], "0xF3f50213C1d2e255e4B2bAD430F8A38EEF8D718E");
        assert_eq!(addresses["address_5"]["address"], "0x51cA8ff9f1C0a99f88E86B8112eA3237F55374cA");
    }

    #[test]
    fn solana_public_key_stops_at_its_level() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Solana).unwrap();
        let mut wallet = factory
            .create_from_public_key(
                "sol",
                &hex_literal::hex!("96da9c08f0703f749fd14e630a2b81d9109a9a8f17b7ade18952e82eb2b5e431"),
            )
            .unwrap();
        wallet.generate(&one_address()).unwrap();

        assert!(wallet.is_watch_only());
        let account = wallet.get_data(BipDataKind::AccountKey).unwrap().as_keys().unwrap();
        assert_eq!(
            account.get(BipKeyKind::Address),
            Some("B9sVeu4rJU12oUrUtzjc6BSNuEXdfvurZkdcaTVkP2LY")
        );
        assert!(!wallet.has_data(BipDataKind::ChangeIdx));
        assert!(!wallet.has_data(BipDataKind::ChangeKey));
        assert!(!wallet.has_data(BipDataKind::AddressOff));
        assert_eq!(first_address(&wallet), "B9sVeu4rJU12oUrUtzjc6BSNuEXdfvurZkdcaTVkP2LY");
        let count = wallet
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .map(|c| c.count());
        assert_eq!(count, Some(1));
    }

    #[test]
    fn zpub_account_key() {
        let wallet = generated(Bip::Bip84, Coin::Bitcoin, &one_address());
        let account = wallet.get_data(BipDataKind::AccountKey).unwrap().as_keys().unwrap();
        assert_eq!(
            account.get(BipKeyKind::ExPub),
            Some("zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs")
        );
    }

    #[test]
    fn offset_and_change_chain() {
        let params = BipParams {
            change: Chain::Internal,
            addr_num: 3,
            addr_off: 20,
            ..BipParams::default()
        };
        let wallet = generated(Bip::Bip44, Coin::Bitcoin, &params);
        assert_eq!(
            wallet.get_data(BipDataKind::ChangeIdx).unwrap().as_index(),
            Some(1)
        );
        let map = wallet.to_map().unwrap();
        let keys: Vec<_> = map["addresses"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["address_21", "address_22", "address_23"]);

        let external = generated(
            Bip::Bip44,
            Coin::Bitcoin,
            &BipParams {
                addr_num: 21,
                ..BipParams::default()
            },
        );
        let collection = external
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .unwrap();
        assert_eq!(
            collection.get(20).and_then(|r| r.get(BipKeyKind::Address)),
            Some("1FSCcgcjLvp8fE8qfTRLNFzPWaLZKSVnbM")
        );
    }

    #[test]
    fn watch_only_from_account_xpub() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        let mut wallet = factory
            .create_from_extended_key(
                "watch",
                "xpub6BosfCnifzxcFwrSzQiqu2DBVTshkCXacvNsWGYJVVhhawA7d4R5WSWGFNbi8Aw6ZRc1brxMyWMzG3DSSSSoekkudhUd9yLb6qx39T9nMdj",
            )
            .unwrap();
        wallet.generate(&one_address()).unwrap();

        assert!(wallet.is_watch_only());
        assert!(!wallet.has_data(BipDataKind::MasterKey));
        assert!(!wallet.has_data(BipDataKind::AccountIdx));
        let change = wallet.get_data(BipDataKind::ChangeKey).unwrap().as_keys().unwrap();
        assert!(!change.has_private());
        assert_eq!(first_address(&wallet), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
    }

    #[test]
    fn leaf_key_yields_single_address() {
        let wallet = generated(Bip::Bip44, Coin::Bitcoin, &one_address());
        let leaf_xprv = wallet
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .and_then(|c| c.get(0))
            .and_then(|r| r.get(BipKeyKind::ExPriv))
            .unwrap()
            .to_owned();

        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        let mut leaf = factory.create_from_extended_key("leaf", &leaf_xprv).unwrap();
        leaf.generate(&BipParams::default()).unwrap();
        let addresses = leaf
            .get_data(BipDataKind::Addresses)
            .and_then(|d| d.as_key_collection())
            .unwrap();
        assert_eq!(addresses.count(), 1);
        assert!(!leaf.has_data(BipDataKind::ChangeKey));
        assert_eq!(first_address(&leaf), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
    }

    #[test]
    fn public_key_wallet_is_watch_only() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Ethereum).unwrap();
        let mut wallet = factory
            .create_from_public_key(
                "pub",
                &hex_literal::hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            )
            .unwrap();
        wallet.generate(&one_address()).unwrap();
        assert!(wallet.is_watch_only());
        assert!(wallet.has_data(BipDataKind::AccountKey));
        assert!(!wallet.has_data(BipDataKind::CoinKey));
        let json = wallet.to_json(0).unwrap();
        for kind in BipKeyKind::ALL.iter().filter(|k| k.is_private()) {
            assert!(!json.contains(kind.name()), "{kind:?}");
        }
    }

    #[test]
    fn private_key_wallet_starts_at_master() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        let mut wallet = factory
            .create_from_private_key(
                "priv",
                &hex_literal::hex!("e284129cc0922579a535bbf4d1a3b25773090d28c909bc0fed73b5e0222cc372"),
            )
            .unwrap();
        wallet.generate(&one_address()).unwrap();
        let master = wallet.get_data(BipDataKind::MasterKey).unwrap().as_keys().unwrap();
        assert_eq!(
            master.get(BipKeyKind::RawPriv),
            Some("e284129cc0922579a535bbf4d1a3b25773090d28c909bc0fed73b5e0222cc372")
        );
        assert!(!wallet.has_data(BipDataKind::SeedBytes));
    }

    #[test]
    fn bounds_leave_wallet_untouched() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        let mut wallet = factory.create_from_mnemonic("w", MNEMONIC, None).unwrap();
        let before = wallet.to_json(0).unwrap();

        let bad = BipParams {
            addr_num: 2,
            addr_off: u32::MAX - 1,
            ..BipParams::default()
        };
        assert!(matches!(
            wallet.generate(&bad),
            Err(Error::IndexOutOfRange { .. })
        ));
        let bad_account = BipParams {
            account_idx: 0x8000_0000,
            ..BipParams::default()
        };
        assert!(wallet.generate(&bad_account).is_err());
        assert_eq!(wallet.to_json(0).unwrap(), before);
        assert!(!wallet.has_data(BipDataKind::MasterKey));
    }

    #[test]
    fn generation_is_deterministic_and_repeatable() {
        let params = BipParams {
            addr_num: 3,
            ..BipParams::default()
        };
        let a = generated(Bip::Bip84, Coin::Bitcoin, &params);
        let mut b = generated(Bip::Bip84, Coin::Bitcoin, &BipParams::default());
        b.generate(&params).unwrap();
        assert_eq!(a.to_json(0).unwrap(), b.to_json(0).unwrap());
    }

    #[test]
    fn random_wallet_round_trips_through_mnemonic() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Ethereum).unwrap();
        let mut random = factory
            .create_random("r", WordCount::Words24, Language::English)
            .unwrap();
        random.generate(&one_address()).unwrap();
        let phrase = random
            .get_data(BipDataKind::Mnemonic)
            .and_then(|d| d.as_text())
            .unwrap()
            .to_owned();
        assert_eq!(phrase.split(' ').count(), 24);

        let mut restored = factory.create_from_mnemonic("r", &phrase, None).unwrap();
        restored.generate(&one_address()).unwrap();
        assert_eq!(random.to_map().unwrap(), restored.to_map().unwrap());
    }

    #[test]
    fn passphrase_is_reported_and_changes_seed() {
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        let plain = factory.create_from_mnemonic("a", MNEMONIC, None).unwrap();
        let salted = factory.create_from_mnemonic("a", MNEMONIC, Some("TREZOR")).unwrap();
        assert!(!plain.has_data(BipDataKind::Passphrase));
        assert!(!plain.to_map().unwrap().contains_key("passphrase"));
        assert!(salted.to_map().unwrap().contains_key("passphrase"));
        assert_eq!(
            salted.get_data(BipDataKind::Passphrase).and_then(|d| d.as_text()),
            Some("TREZOR")
        );
        assert_eq!(
            salted.get_data(BipDataKind::SeedBytes).and_then(|d| d.as_text()),
            Some("c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04")
        );
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            BipWalletFactory::new(Bip::Bip84, Coin::Ethereum),
            Err(Error::Unsupported { .. })
        ));
        let factory = BipWalletFactory::new(Bip::Bip44, Coin::Bitcoin).unwrap();
        assert!(matches!(
            factory.create_from_seed("s", &[0u8; 15]).err(),
            Some(Error::InvalidSeed { .. })
        ));
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            factory.create_from_mnemonic("m", bad, None).err(),
            Some(Error::InvalidMnemonic { .. })
        ));
        assert!(matches!(
            factory.create_from_extended_key("x", "xpub123").err(),
            Some(Error::InvalidExtendedKey { .. })
        ));
    }

    #[test]
    fn json_reload_matches_map() {
        let wallet = generated(Bip::Bip44, Coin::Ethereum, &one_address());
        let reloaded: serde_json::Value = serde_json::from_str(&wallet.to_json(4).unwrap()).unwrap();
        assert_eq!(reloaded, serde_json::Value::Object(wallet.to_map().unwrap()));
        let keys: Vec<_> = wallet.to_map().unwrap().keys().cloned().collect();
        assert_eq!(keys[..3], ["wallet_name", "spec_name", "coin_name"]);
    }
}
