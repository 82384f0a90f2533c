//! Validated entry points that build Cardano wallet shells.

use hdwkit::mnemonic::{self, WordCount};
use hdwkit::{Error, Language, Level, Result};
use tracing::debug;
use zeroize::Zeroizing;

use crate::coin::{CardanoCoin, MasterKeyStyle};
use crate::node::CardanoNode;
use crate::wallet::CardanoWallet;

/// Valid BIP-39 entropy lengths, in bytes.
const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];
/// Accepted BIP-39 seed lengths, in bytes.
const SEED_LEN: core::ops::RangeInclusive<usize> = 16..=64;

/// Builds [`CardanoWallet`]s for one coin variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardanoWalletFactory {
    coin: CardanoCoin,
}

impl CardanoWalletFactory {
    /// Create a factory for `coin`.
    pub const fn new(coin: CardanoCoin) -> Self {
        Self { coin }
    }

    /// Coin variant.
    pub const fn coin(&self) -> CardanoCoin {
        self.coin
    }

    /// Generate a fresh mnemonic; `None` picks the coin's default length.
    pub fn create_random(
        &self,
        name: &str,
        words: Option<WordCount>,
        language: Language,
    ) -> Result<CardanoWallet> {
        let words = words.unwrap_or_else(|| self.coin.default_word_count());
        let phrase = Zeroizing::new(mnemonic::generate(words, language)?.to_string());
        self.create_from_mnemonic(name, &phrase, None)
    }

    /// Build a wallet from a BIP-39 mnemonic in any supported language.
    pub fn create_from_mnemonic(
        &self,
        name: &str,
        phrase: &str,
        passphrase: Option<&str>,
    ) -> Result<CardanoWallet> {
        let normalized = Zeroizing::new(mnemonic::normalize(phrase));
        let parsed = mnemonic::parse_any(&normalized)?;
        let pass = passphrase.unwrap_or_default();
        let wallet = match self.coin.style() {
            MasterKeyStyle::Icarus => {
                let entropy = Zeroizing::new(parsed.to_entropy());
                let root = CardanoNode::from_icarus(&entropy, pass);
                self.wallet(name, root).with_seed(&entropy)
            }
            MasterKeyStyle::Ledger => {
                let seed = Zeroizing::new(parsed.to_seed(pass));
                let root = CardanoNode::from_ledger(seed.as_slice())?;
                self.wallet(name, root).with_seed(seed.as_slice())
            }
        };
        Ok(wallet.with_mnemonic(normalized.to_string(), passphrase))
    }

    /// Build a wallet from seed bytes: mnemonic entropy for Icarus coins, a
    /// BIP-39 seed for Ledger coins.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<CardanoWallet> {
        let root = match self.coin.style() {
            MasterKeyStyle::Icarus => {
                if !ENTROPY_LENGTHS.contains(&seed.len()) {
                    return Err(Error::seed(
                        seed,
                        format!("entropy length {} not one of {ENTROPY_LENGTHS:?}", seed.len()),
                    ));
                }
                CardanoNode::from_icarus(seed, "")
            }
            MasterKeyStyle::Ledger => {
                if !SEED_LEN.contains(&seed.len()) {
                    return Err(Error::seed(
                        seed,
                        format!("length {} not in 16..=64 bytes", seed.len()),
                    ));
                }
                CardanoNode::from_ledger(seed)?
            }
        };
        Ok(self.wallet(name, root).with_seed(seed))
    }

    /// Build a wallet from a serialized node at depth 0 to 3.
    ///
    /// Public nodes must be at account depth, since everything above it is
    /// hardened.
    pub fn create_from_extended_key(&self, name: &str, key: &str) -> Result<CardanoWallet> {
        let key = key.trim();
        let root = CardanoNode::from_extended_key(key)?;
        let account = Level::Account.depth();
        if root.depth() > account {
            return Err(Error::extended_key(
                key,
                format!("depth {} is below the account level", root.depth()),
            ));
        }
        if root.is_public_only() && root.depth() != account {
            return Err(Error::extended_key(
                key,
                "public keys are only accepted at the account level",
            ));
        }
        Ok(self.wallet(name, root))
    }

    /// Build a master-level wallet from `kL ‖ kR` (64 bytes) or
    /// `kL ‖ kR ‖ chain code` (96 bytes).
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<CardanoWallet> {
        let root = CardanoNode::from_private_key(key)?;
        Ok(self.wallet(name, root))
    }

    /// Build an account-level watch-only wallet from `A` (32 bytes) or
    /// `A ‖ chain code` (64 bytes).
    pub fn create_from_public_key(&self, name: &str, key: &[u8]) -> Result<CardanoWallet> {
        let root = CardanoNode::from_public_key(key)?;
        Ok(self.wallet(name, root))
    }

    fn wallet(&self, name: &str, root: CardanoNode) -> CardanoWallet {
        debug!(
            coin = %self.coin,
            level = %root.level(),
            watch_only = root.is_public_only(),
            "created Cardano wallet root"
        );
        CardanoWallet::new(name, self.coin, root)
    }
}
