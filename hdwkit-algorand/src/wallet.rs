//! Algorand wallets.

use hdwkit::{DataValue, HdWallet, KeyRecord, Result};
use tracing::debug;
use zeroize::Zeroizing;

use crate::key::AlgorandKey;
use crate::kind::{AlgorandDataKind, AlgorandKeyKind};

/// Algorand wallets have no generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlgorandParams;

/// A single-key Algorand wallet.
#[derive(Clone)]
pub struct AlgorandWallet {
    name: String,
    mnemonic: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<String>>,
    key: AlgorandKey,
    record: Option<KeyRecord<AlgorandKeyKind>>,
}

impl AlgorandWallet {
    /// Display name of the coin.
    pub const COIN_NAME: &'static str = "Algorand (ALGO)";

    pub(crate) fn new(name: &str, key: AlgorandKey) -> Self {
        Self {
            name: name.to_owned(),
            mnemonic: None,
            seed: None,
            key,
            record: None,
        }
    }

    pub(crate) fn with_mnemonic(mut self, mnemonic: Zeroizing<String>) -> Self {
        self.mnemonic = Some(mnemonic);
        self
    }

    pub(crate) fn with_seed(mut self, seed: &[u8]) -> Self {
        self.seed = Some(Zeroizing::new(hex::encode(seed)));
        self
    }

    /// Wallet name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HdWallet for AlgorandWallet {
    type KeyKind = AlgorandKeyKind;
    type DataKind = AlgorandDataKind;
    type Params = AlgorandParams;

    /// Wrap the key into its record; there is nothing to derive.
    fn generate(&mut self, _params: &AlgorandParams) -> Result<()> {
        self.record = Some(self.key.key_record());
        debug!(watch_only = self.key.is_public_only(), "generated Algorand wallet");
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        self.key.is_public_only()
    }

    fn get_data(&self, kind: AlgorandDataKind) -> Option<DataValue<'_, AlgorandKeyKind>> {
        match kind {
            AlgorandDataKind::WalletName => Some(DataValue::Text(&self.name)),
            AlgorandDataKind::CoinName => Some(DataValue::Text(Self::COIN_NAME)),
            AlgorandDataKind::Mnemonic => self.mnemonic.as_deref().map(|m| DataValue::Text(m)),
            AlgorandDataKind::SeedBytes => self.seed.as_deref().map(|s| DataValue::Text(s)),
            AlgorandDataKind::Key => self.record.as_ref().map(DataValue::Keys),
        }
    }
}
