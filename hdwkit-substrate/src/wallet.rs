//! Substrate wallets.

use hdwkit::{DataValue, HdWallet, KeyRecord, Result};
use tracing::debug;
use zeroize::Zeroizing;

use crate::coin::SubstrateCoin;
use crate::key::SrKey;
use crate::kind::{SubstrateDataKind, SubstrateKeyKind};
use crate::path;

/// Generation parameters of a Substrate wallet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstrateParams {
    /// Derivation path such as `//Alice` or `//hard/soft`. Empty keeps the root.
    pub path: String,
}

impl SubstrateParams {
    /// Parameters deriving along `path`.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// An sr25519 wallet for one Substrate network.
#[derive(Clone)]
pub struct SubstrateWallet {
    name: String,
    coin: SubstrateCoin,
    coin_name: String,
    mnemonic: Option<Zeroizing<String>>,
    passphrase: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<String>>,
    root: SrKey,
    derived: Option<(String, KeyRecord<SubstrateKeyKind>)>,
}

impl SubstrateWallet {
    pub(crate) fn new(name: &str, coin: SubstrateCoin, root: SrKey) -> Self {
        Self {
            name: name.to_owned(),
            coin,
            coin_name: coin.display_name(),
            mnemonic: None,
            passphrase: None,
            seed: None,
            root,
            derived: None,
        }
    }

    pub(crate) fn with_mnemonic(mut self, mnemonic: String, passphrase: Option<&str>) -> Self {
        self.mnemonic = Some(Zeroizing::new(mnemonic));
        self.passphrase = passphrase.map(|p| Zeroizing::new(p.to_owned()));
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

    /// Network.
    pub fn coin(&self) -> SubstrateCoin {
        self.coin
    }
}

impl HdWallet for SubstrateWallet {
    type KeyKind = SubstrateKeyKind;
    type DataKind = SubstrateDataKind;
    type Params = SubstrateParams;

    /// Derive once along `params.path` from the stored root key.
    fn generate(&mut self, params: &SubstrateParams) -> Result<()> {
        let junctions = path::parse(&params.path)?;
        let key = self.root.derive_path(&junctions, &params.path)?;
        debug!(
            coin = %self.coin,
            junctions = junctions.len(),
            watch_only = key.is_public_only(),
            "generated Substrate wallet"
        );
        self.derived = Some((params.path.clone(), key.key_record(self.coin)));
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        self.root.is_public_only()
    }

    fn get_data(&self, kind: SubstrateDataKind) -> Option<DataValue<'_, SubstrateKeyKind>> {
        match kind {
            SubstrateDataKind::WalletName => Some(DataValue::Text(&self.name)),
            SubstrateDataKind::CoinName => Some(DataValue::Text(&self.coin_name)),
            SubstrateDataKind::Mnemonic => self.mnemonic.as_deref().map(|m| DataValue::Text(m)),
            SubstrateDataKind::Passphrase => {
                self.passphrase.as_deref().map(|p| DataValue::Text(p))
            }
            SubstrateDataKind::SeedBytes => self.seed.as_deref().map(|s| DataValue::Text(s)),
            SubstrateDataKind::Path => self.derived.as_ref().map(|(p, _)| DataValue::Text(p)),
            SubstrateDataKind::Key => self.derived.as_ref().map(|(_, k)| DataValue::Keys(k)),
        }
    }
}
