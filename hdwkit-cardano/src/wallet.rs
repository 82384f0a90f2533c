//! Cardano Shelley wallets.
//!
//! The BIP-44 style walk stops at the account node. From there the Shelley
//! stage derives the payment chain (`role/index`, base addresses) and the
//! staking key (`2/0`, reward address), all with soft derivation so an
//! account-level public key is enough.

use hdwkit::{
    AddressCollection, Chain, ChildIndex, DataValue, Error, HdWallet, KeyFormat, KeyRecord, Level,
    Result,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::address::{base_address, reward_address};
use crate::coin::CardanoCoin;
use crate::kind::{CardanoDataKind, CardanoKeyKind};
use crate::node::CardanoNode;

const STAKING_ROLE: u32 = 2;

/// Generation parameters of a Cardano wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardanoParams {
    /// Account index, always derived hardened. Defaults to 0.
    pub account_idx: u32,
    /// Payment chain role. Defaults to [`Chain::External`].
    pub change: Chain,
    /// Number of addresses to derive. Defaults to 20.
    pub addr_num: u32,
    /// Index of the first address. Defaults to 0.
    pub addr_off: u32,
}

impl Default for CardanoParams {
    fn default() -> Self {
        Self {
            account_idx: 0,
            change: Chain::External,
            addr_num: 20,
            addr_off: 0,
        }
    }
}

type Record = KeyRecord<CardanoKeyKind>;

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
    staking_key: Option<Record>,
}

fn key_record(node: &CardanoNode, address: Option<String>) -> Record {
    let mut record = KeyRecord::new();
    record.insert(CardanoKeyKind::ExPub, node.extended_public());
    record.insert(CardanoKeyKind::RawPub, hex::encode(node.public_33()));
    if let Some(ex_priv) = node.extended_private() {
        record.insert(CardanoKeyKind::ExPriv, ex_priv);
    }
    if let Some(secret) = node.secret() {
        record.insert(CardanoKeyKind::RawPriv, hex::encode(secret));
    }
    if let Some(address) = address {
        record.insert(CardanoKeyKind::Address, address);
    }
    record
}

/// A CIP-1852 Shelley wallet.
#[derive(Clone)]
pub struct CardanoWallet {
    name: String,
    coin: CardanoCoin,
    mnemonic: Option<Zeroizing<String>>,
    passphrase: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<String>>,
    root: CardanoNode,
    levels: Levels,
}

impl CardanoWallet {
    pub(crate) fn new(name: &str, coin: CardanoCoin, root: CardanoNode) -> Self {
        Self {
            name: name.to_owned(),
            coin,
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

    /// Coin variant.
    pub fn coin(&self) -> CardanoCoin {
        self.coin
    }

    /// Level of the root node the wallet was built from.
    pub fn root_level(&self) -> Level {
        self.root.level()
    }

    fn derive_levels(&self, params: &CardanoParams, account: ChildIndex) -> Result<Levels> {
        let mut levels = Levels::default();
        let mut node = self.root.clone();

        if node.level() == Level::Master {
            levels.master_key = Some(key_record(&node, None));
            node = node.derive(ChildIndex::Hardened(CardanoCoin::PURPOSE))?;
        }
        if node.level() == Level::Purpose {
            levels.purpose_key = Some(key_record(&node, None));
            node = node.derive(ChildIndex::Hardened(CardanoCoin::COIN_TYPE))?;
        }
        if node.level() == Level::Coin {
            levels.coin_key = Some(key_record(&node, None));
            levels.account_idx = Some(params.account_idx);
            node = node.derive(account)?;
        }
        levels.account_key = Some(key_record(&node, None));

        let staking = node
            .derive(ChildIndex::Normal(STAKING_ROLE))?
            .derive(ChildIndex::Normal(0))?;
        let stake_public = *staking.public_key();

        let role = params.change.index();
        let change = node.derive(ChildIndex::Normal(role))?;
        let mut addresses = AddressCollection::new(params.addr_off, KeyFormat::ADDRESS);
        for i in 0..params.addr_num {
            let child = change.derive(ChildIndex::Normal(params.addr_off + i))?;
            let address = base_address(self.coin, child.public_key(), &stake_public)?;
            addresses.push(key_record(&child, Some(address)));
        }
        levels.change_idx = Some(role);
        levels.change_key = Some(key_record(&change, None));
        levels.address_off = Some(params.addr_off);
        levels.addresses = Some(addresses);

        let reward = reward_address(self.coin, &stake_public)?;
        levels.staking_key = Some(key_record(&staking, Some(reward)));
        Ok(levels)
    }
}

impl HdWallet for CardanoWallet {
    type KeyKind = CardanoKeyKind;
    type DataKind = CardanoDataKind;
    type Params = CardanoParams;

    fn generate(&mut self, params: &CardanoParams) -> Result<()> {
        let account = ChildIndex::hardened(params.account_idx)?;
        // Payment keys are soft children.
        let end = u64::from(params.addr_off) + u64::from(params.addr_num);
        if end > u64::from(ChildIndex::HARDENED_OFFSET) {
            return Err(Error::IndexOutOfRange {
                name: "address offset + number",
                value: end,
                max: u64::from(ChildIndex::HARDENED_OFFSET),
            });
        }

        let levels = self.derive_levels(params, account)?;
        debug!(
            coin = %self.coin,
            from = %self.root.level(),
            addresses = params.addr_num,
            "generated Cardano wallet"
        );
        self.levels = levels;
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        self.root.is_public_only()
    }

    fn get_data(&self, kind: CardanoDataKind) -> Option<DataValue<'_, CardanoKeyKind>> {
        let levels = &self.levels;
        match kind {
            CardanoDataKind::WalletName => Some(DataValue::Text(&self.name)),
            CardanoDataKind::CoinName => Some(DataValue::Text(self.coin.coin_name())),
            CardanoDataKind::Mnemonic => self.mnemonic.as_deref().map(|m| DataValue::Text(m)),
            CardanoDataKind::Passphrase => self.passphrase.as_deref().map(|p| DataValue::Text(p)),
            CardanoDataKind::SeedBytes => self.seed.as_deref().map(|s| DataValue::Text(s)),
            CardanoDataKind::MasterKey => levels.master_key.as_ref().map(DataValue::Keys),
            CardanoDataKind::PurposeKey => levels.purpose_key.as_ref().map(DataValue::Keys),
            CardanoDataKind::CoinKey => levels.coin_key.as_ref().map(DataValue::Keys),
            CardanoDataKind::AccountIdx => levels.account_idx.map(DataValue::Index),
            CardanoDataKind::AccountKey => levels.account_key.as_ref().map(DataValue::Keys),
            CardanoDataKind::ChangeIdx => levels.change_idx.map(DataValue::Index),
            CardanoDataKind::ChangeKey => levels.change_key.as_ref().map(DataValue::Keys),
            CardanoDataKind::AddressOff => levels.address_off.map(DataValue::Index),
            CardanoDataKind::Addresses => levels.addresses.as_ref().map(DataValue::KeyCollection),
            CardanoDataKind::StakingKey => levels.staking_key.as_ref().map(DataValue::Keys),
        }
    }
}
