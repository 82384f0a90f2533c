//! Entry points that build Substrate wallets.

use hdwkit::mnemonic::{self, WordCount};
use hdwkit::{Error, Language, Result};
use sha2::Sha512;
use tracing::debug;
use zeroize::Zeroizing;

use crate::coin::SubstrateCoin;
use crate::key::SrKey;
use crate::wallet::SubstrateWallet;

const SEED_ROUNDS: u32 = 2048;

/// Builds [`SubstrateWallet`]s for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubstrateWalletFactory {
    coin: SubstrateCoin,
}

impl SubstrateWalletFactory {
    /// Create a factory for `coin`.
    pub const fn new(coin: SubstrateCoin) -> Self {
        Self { coin }
    }

    /// Network.
    pub fn coin(&self) -> SubstrateCoin {
        self.coin
    }

    /// Generate a fresh BIP-39 mnemonic and build a wallet from it.
    pub fn create_random(
        &self,
        name: &str,
        words: WordCount,
        language: Language,
    ) -> Result<SubstrateWallet> {
        let phrase = Zeroizing::new(mnemonic::generate(words, language)?.to_string());
        self.create_from_mnemonic(name, &phrase, None)
    }

    /// Build a wallet from a BIP-39 mnemonic.
    ///
    /// Unlike BIP-39 proper, Substrate stretches the mnemonic *entropy*, not
    /// the phrase, with `PBKDF2-HMAC-SHA512`.
    pub fn create_from_mnemonic(
        &self,
        name: &str,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<SubstrateWallet> {
        let normalized = Zeroizing::new(mnemonic::normalize(phrase));
        let entropy = Zeroizing::new(mnemonic::parse_any(&normalized)?.to_entropy());
        let salt = Zeroizing::new(format!("mnemonic{}", passphrase.unwrap_or_default()));
        let mut seed = Zeroizing::new([0u8; 64]);
        pbkdf2::pbkdf2_hmac::<Sha512>(&entropy, salt.as_bytes(), SEED_ROUNDS, seed.as_mut_slice());
        Ok(self
            .create_from_seed(name, seed.as_slice())?
            .with_mnemonic(normalized.to_string(), passphrase))
    }

    /// Build a wallet from a 32 to 64-byte seed; its first 32 bytes are the
    /// mini secret key.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<SubstrateWallet> {
        if !(32..=64).contains(&seed.len()) {
            return Err(Error::seed(
                seed,
                format!("length {} not in 32..=64 bytes", seed.len()),
            ));
        }
        let root = SrKey::from_mini_secret(&seed[..32])?;
        Ok(self.wallet(name, root).with_seed(seed))
    }

    /// Build a wallet from a 32-byte mini secret or 64-byte expanded secret.
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<SubstrateWallet> {
        Ok(self.wallet(name, SrKey::from_private(key)?))
    }

    /// Build a watch-only wallet from a 32-byte public key.
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<SubstrateWallet> {
        Ok(self.wallet(name, SrKey::from_public(key)?))
    }

    fn wallet(&self, name: &str, root: SrKey) -> SubstrateWallet {
        debug!(coin = %self.coin, watch_only = root.is_public_only(), "created Substrate wallet root");
        SubstrateWallet::new(name, self.coin, root)
    }
}
