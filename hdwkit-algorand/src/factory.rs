//! Entry points that build Algorand wallets.

use hdwkit::entropy::random_bytes;
use hdwkit::{Error, Result};
use tracing::debug;

use crate::key::AlgorandKey;
use crate::mnemonic;
use crate::wallet::AlgorandWallet;

/// Builds [`AlgorandWallet`]s.
///
/// The Algorand "seed" is the private key itself, so `create_from_seed` and
/// `create_from_private_key` differ only in whether `seed_bytes` is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorandWalletFactory;

impl AlgorandWalletFactory {
    /// Create a factory.
    pub const fn new() -> Self {
        Self
    }

    /// Generate a random key and its 25-word mnemonic.
    pub fn create_random(&self, name: &str) -> Result<AlgorandWallet> {
        let key = random_bytes::<32>();
        let phrase = mnemonic::encode(&key);
        self.create_from_mnemonic(name, &phrase)
    }

    /// Build a wallet from a 25-word mnemonic.
    pub fn create_from_mnemonic(&self, name: &str, phrase: &str) -> Result<AlgorandWallet> {
        let normalized = hdwkit::mnemonic::normalize(phrase);
        let key = mnemonic::decode(&normalized)?;
        Ok(self
            .create_from_seed(name, key.as_slice())?
            .with_mnemonic(mnemonic::encode(&key)))
    }

    /// Build a wallet from the 32-byte private key, reported as the seed.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<AlgorandWallet> {
        if seed.len() != 32 {
            return Err(Error::seed(seed, format!("expected 32 bytes, got {}", seed.len())));
        }
        Ok(self.create_from_private_key(name, seed)?.with_seed(seed))
    }

    /// Build a wallet from a 32-byte private key.
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<AlgorandWallet> {
        Ok(wallet(name, AlgorandKey::from_private(key)?))
    }

    /// Build a watch-only wallet from a 32-byte public key.
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<AlgorandWallet> {
        Ok(wallet(name, AlgorandKey::from_public(key)?))
    }
}

fn wallet(name: &str, key: AlgorandKey) -> AlgorandWallet {
    debug!(watch_only = key.is_public_only(), "created Algorand wallet key");
    AlgorandWallet::new(name, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{AlgorandDataKind, AlgorandKeyKind};
    use crate::wallet::AlgorandParams;
    use hdwkit::HdWallet;
    use hex_literal::hex;

    const PHRASE: &str = "crisp sheriff solution ten remove object chair enhance future rather biology era myth image swap crash coffee scatter buffalo depart day twist advance about unfair";
    const ADDRESS: &str = "25NJQAMCWEFLPVKL73J4SZAHHIHOC4XT3KTCGJNPAINGR5YHKENMEF5QTE";

    fn address_of(wallet: &AlgorandWallet) -> String {
        wallet
            .get_data(AlgorandDataKind::Key)
            .and_then(|d| d.as_keys())
            .and_then(|r| r.get(AlgorandKeyKind::Address))
            .unwrap()
            .to_owned()
    }

    #[test]
    fn from_mnemonic() {
        let mut wallet = AlgorandWalletFactory::new()
            .create_from_mnemonic("algo", PHRASE)
            .unwrap();
        assert!(!wallet.has_data(AlgorandDataKind::Key));
        wallet.generate(&AlgorandParams).unwrap();

        assert_eq!(address_of(&wallet), ADDRESS);
        assert_eq!(
            wallet.get_data(AlgorandDataKind::SeedBytes).and_then(|d| d.as_text()),
            Some("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
        );
        let keys: Vec<_> = wallet.to_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["wallet_name", "coin_name", "mnemonic", "seed_bytes", "key"]);
    }

    #[test]
    fn mnemonic_is_normalized() {
        let messy = format!("  {}  ", PHRASE.to_uppercase().replace(' ', "   "));
        let wallet = AlgorandWalletFactory::new()
            .create_from_mnemonic("algo", &messy)
            .unwrap();
        assert_eq!(
            wallet.get_data(AlgorandDataKind::Mnemonic).and_then(|d| d.as_text()),
            Some(PHRASE)
        );
    }

    #[test]
    fn private_key_wallet_omits_seed_and_mnemonic() {
        let mut wallet = AlgorandWalletFactory::new()
            .create_from_private_key(
                "algo",
                &hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
            )
            .unwrap();
        wallet.generate(&AlgorandParams).unwrap();
        assert!(!wallet.has_data(AlgorandDataKind::SeedBytes));
        assert!(!wallet.has_data(AlgorandDataKind::Mnemonic));
        assert_eq!(address_of(&wallet), ADDRESS);
    }

    #[test]
    fn watch_only_from_public_key() {
        let mut wallet = AlgorandWalletFactory::new()
            .create_from_public_key(
                "watch",
                &hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
            )
            .unwrap();
        wallet.generate(&AlgorandParams).unwrap();
        assert!(wallet.is_watch_only());
        assert!(!wallet.to_json(0).unwrap().contains("\"priv\""));
        assert_eq!(address_of(&wallet), ADDRESS);
    }

    #[test]
    fn random_round_trips_through_mnemonic() {
        let factory = AlgorandWalletFactory::new();
        let mut random = factory.create_random("r").unwrap();
        random.generate(&AlgorandParams).unwrap();
        let phrase = random
            .get_data(AlgorandDataKind::Mnemonic)
            .and_then(|d| d.as_text())
            .unwrap()
            .to_owned();
        assert_eq!(phrase.split(' ').count(), 25);

        let mut restored = factory.create_from_mnemonic("r", &phrase).unwrap();
        restored.generate(&AlgorandParams).unwrap();
        assert_eq!(random.to_map().unwrap(), restored.to_map().unwrap());
    }

    #[test]
    fn json_reload_matches_map() {
        let mut wallet = AlgorandWalletFactory::new()
            .create_from_mnemonic("algo", PHRASE)
            .unwrap();
        wallet.generate(&AlgorandParams).unwrap();
        let reloaded: serde_json::Value = serde_json::from_str(&wallet.to_json(2).unwrap()).unwrap();
        assert_eq!(reloaded, serde_json::Value::Object(wallet.to_map().unwrap()));
    }

    #[test]
    fn rejects_bad_seed_length() {
        assert!(matches!(
            AlgorandWalletFactory::new().create_from_seed("s", &[0u8; 64]).err(),
            Some(Error::InvalidSeed { .. })
        ));
    }
}
