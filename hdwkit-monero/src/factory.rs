//! Monero wallet factory.

use curve25519_dalek::scalar::Scalar;
use hdwkit::entropy::random_bytes;
use hdwkit::Result;
use tracing::debug;
use zeroize::Zeroizing;

use crate::key::MoneroKeys;
use crate::mnemonic;
use crate::network::MoneroNetwork;
use crate::wallet::MoneroWallet;

/// Builds [`MoneroWallet`]s for one network.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneroWalletFactory {
    network: MoneroNetwork,
}

impl MoneroWalletFactory {
    /// Create a factory for `network`.
    pub const fn new(network: MoneroNetwork) -> Self {
        Self { network }
    }

    /// Network of the wallets built.
    pub const fn network(&self) -> MoneroNetwork {
        self.network
    }

    /// Generate a random spend key and its 25-word mnemonic.
    pub fn create_random(&self, name: &str) -> Result<MoneroWallet> {
        let random = random_bytes::<32>();
        let seed = Zeroizing::new(Scalar::from_bytes_mod_order(*random).to_bytes());
        let phrase = mnemonic::encode(&*seed)?;
        self.create_from_seed(name, &*seed)
            .map(|wallet| wallet.with_mnemonic(phrase))
    }

    /// Build a wallet from a 25, 24, 13 or 12-word mnemonic.
    pub fn create_from_mnemonic(&self, name: &str, phrase: &str) -> Result<MoneroWallet> {
        let normalized = Zeroizing::new(hdwkit::mnemonic::normalize(phrase));
        let seed = mnemonic::decode(&normalized)?;
        self.create_from_seed(name, &seed)
            .map(|wallet| wallet.with_mnemonic(normalized))
    }

    /// Build a wallet from a 32-byte seed or a 16-byte MyMonero seed.
    pub fn create_from_seed(&self, name: &str, seed: &[u8]) -> Result<MoneroWallet> {
        let keys = MoneroKeys::from_seed(seed)?;
        Ok(self.wallet(name, keys).with_seed(seed))
    }

    /// Build a wallet from a private spend key.
    pub fn create_from_private_key(&self, name: &str, key: &[u8]) -> Result<MoneroWallet> {
        let keys = MoneroKeys::from_private_spend(key)?;
        Ok(self.wallet(name, keys))
    }

    /// Build a watch-only wallet from the private view key and public spend key.
    pub fn create_watch_only(
        &self,
        name: &str,
        priv_view_key: &[u8],
        pub_spend_key: &[u8],
    ) -> Result<MoneroWallet> {
        let keys = MoneroKeys::from_watch_only(priv_view_key, pub_spend_key)?;
        Ok(self.wallet(name, keys))
    }

    fn wallet(&self, name: &str, keys: MoneroKeys) -> MoneroWallet {
        debug!(
            network = %self.network,
            watch_only = keys.is_watch_only(),
            "created Monero wallet keys"
        );
        MoneroWallet::new(name, self.network, keys)
    }
}
