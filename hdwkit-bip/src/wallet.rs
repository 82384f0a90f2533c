//! BIP wallets and the level-by-level derivation engine.

use hdwkit::{
    AddressCollection, Chain, ChildIndex, DataValue, HdWallet, KeyFormat, KeyRecord, Level,
    Result, validate_range,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::bip::Bip;
use crate::coin::Coin;
use crate::kind::{BipDataKind, BipKeyKind};
use crate::node::Node;

/// Generation parameters of a BIP wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BipParams {
    /// Account index, always derived hardened. Defaults to 0.
    pub account_idx: u32,
    /// Change chain. Defaults to [`Chain::External`].
    pub change: Chain,
    /// Number of addresses to derive. Defaults to 20.
    pub addr_num: u32,
    /// Index of the first address. Defaults to 0.
    pub addr_off: u32,
}

impl Default for BipParams {
    fn default() -> Self {
        Self {
            account_idx: 0,
            change: Chain::External,
            addr_num: 20,
            addr_off: 0,
        }
    }
}

type Record = KeyRecord<BipKeyKind>;

/// Everything one `generate` call produces.
#[derive(Clone, Default)]
struct Levels {
    master_key: Option<Record>,
    purpose_key: Option<Record>,
    coin_key: Option<Record>,
    account_idx: Option<u32>,
    account_key: Option<Record>,
    change_idx: Option<u32>,
    change_key: Option<Record>,
    address_off: Option<u32>,
    addresses: Option<AddressCollection<Record>>,
}

/// A BIP-44/49/84/86 wallet.
///
/// Built by [`BipWalletFactory`](crate::BipWalletFactory); the root node is
/// kept so every [`generate`](HdWallet::generate) call re-derives from it and
/// replaces the previous levels.
#[derive(Clone)]
pub struct BipWallet {
    name: String,
    bip: Bip,
    coin: Coin,
    coin_name: String,
    mnemonic: Option<Zeroizing<String>>,
    passphrase: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<String>>,
    root: Node,
    levels: Levels,
}

impl BipWallet {
    pub(crate) fn new(name: &str, bip: Bip, coin: Coin, root: Node) -> Self {
        Self {
            name: name.to_owned(),
            bip,
            coin,
            coin_name: coin.display_name(),
            mnemonic: None,
            passphrase: None,
            seed: None,
            root,
            levels: Levels::default(),
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

    /// Derivation scheme.
    pub fn bip(&self) -> Bip {
        self.bip
    }

    /// Coin.
    pub fn coin(&self) -> Coin {
        self.coin
    }

    /// Level of the root node the wallet was built from.
    pub fn root_level(&self) -> Level {
        self.root.level()
    }

    fn record(&self, node: &Node) -> Result<Record> {
        node.key_record(self.coin, self.bip)
    }

    fn derive_levels(&self, params: &BipParams, account: ChildIndex) -> Result<Levels> {
        let mut levels = Levels::default();
        let mut node = self.root.clone();

        // A node that cannot derive ends the walk at its own level.
        if node.level() == Level::Master {
            levels.master_key = Some(self.record(&node)?);
            if node.can_derive() {
                node = node.derive(ChildIndex::Hardened(self.bip.purpose()))?;
            }
        }
        if node.level() == Level::Purpose {
            levels.purpose_key = Some(self.record(&node)?);
            if node.can_derive() {
                node = node.derive(ChildIndex::Hardened(self.coin.coin_type()))?;
            }
        }
        if node.level() == Level::Coin {
            levels.coin_key = Some(self.record(&node)?);
            if node.can_derive() {
                levels.account_idx = Some(params.account_idx);
                node = node.derive(account)?;
            }
        }
        if node.level() == Level::Account {
            levels.account_key = Some(self.record(&node)?);
            if node.can_derive() {
                levels.change_idx = Some(params.change.index());
                node = node.derive(ChildIndex::Normal(params.change.index()))?;
            }
        }

        let addresses = if node.level() == Level::Change && node.can_derive() {
            levels.change_key = Some(self.record(&node)?);
            levels.address_off = Some(params.addr_off);
            let mut addresses = AddressCollection::new(params.addr_off, KeyFormat::ADDRESS);
            for i in 0..params.addr_num {
                // Indices past 2^31 - 1 fall into the hardened range.
                let child = node.derive(ChildIndex::from(params.addr_off + i))?;
                addresses.push(self.record(&child)?);
            }
            addresses
        } else {
            // A leaf key, or a public ed25519 key: a single address, range ignored.
            if node.level() == Level::Change {
                levels.change_key = Some(self.record(&node)?);
            }
            AddressCollection::from_entries(vec![self.record(&node)?], 0, KeyFormat::ADDRESS)
        };
        levels.addresses = Some(addresses);
        Ok(levels)
    }
}

impl HdWallet for BipWallet {
    type KeyKind = BipKeyKind;
    type DataKind = BipDataKind;
    type Params = BipParams;

    fn generate(&mut self, params: &BipParams) -> Result<()> {
        let account = ChildIndex::hardened(params.account_idx)?;
        validate_range("address offset + number", params.addr_num, params.addr_off)?;

        let levels = self.derive_levels(params, account)?;
        debug!(
            scheme = %self.bip,
            coin = %self.coin,
            from = %self.root.level(),
            addresses = levels.addresses.as_ref().map_or(0, AddressCollection::count),
            "generated BIP wallet"
        );
        self.levels = levels;
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        self.root.is_public_only()
    }

    fn get_data(&self, kind: BipDataKind) -> Option<DataValue<'_, BipKeyKind>> {
        let levels = &self.levels;
        match kind {
            BipDataKind::WalletName => Some(DataValue::Text(&self.name)),
            BipDataKind::SpecName => Some(DataValue::Text(self.bip.name())),
            BipDataKind::CoinName => Some(DataValue::Text(&self.coin_name)),
            BipDataKind::Mnemonic => self.mnemonic.as_deref().map(|m| DataValue::Text(m)),
            BipDataKind::Passphrase => self.passphrase.as_deref().map(|p| DataValue::Text(p)),
            BipDataKind::SeedBytes => self.seed.as_deref().map(|s| DataValue::Text(s)),
            BipDataKind::MasterKey => levels.master_key.as_ref().map(DataValue::Keys),
            BipDataKind::PurposeKey => levels.purpose_key.as_ref().map(DataValue::Keys),
            BipDataKind::CoinKey => levels.coin_key.as_ref().map(DataValue::Keys),
            BipDataKind::AccountIdx => levels.account_idx.map(DataValue::Index),
            BipDataKind::AccountKey => levels.account_key.as_ref().map(DataValue::Keys),
            BipDataKind::ChangeIdx => levels.change_idx.map(DataValue::Index),
            BipDataKind::ChangeKey => levels.change_key.as_ref().map(DataValue::Keys),
            BipDataKind::AddressOff => levels.address_off.map(DataValue::Index),
            BipDataKind::Addresses => levels.addresses.as_ref().map(DataValue::KeyCollection),
        }
    }
}
