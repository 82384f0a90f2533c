//! Monero wallets.

use hdwkit::{
    AddressCollection, DataValue, HdWallet, KeyFormat, KeyRecord, Result, validate_range,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::key::MoneroKeys;
use crate::kind::{MoneroDataKind, MoneroKeyKind};
use crate::network::MoneroNetwork;

/// Generation parameters of a Monero wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneroParams {
    /// Account (major index) of the subaddresses. Defaults to 0.
    pub account_idx: u32,
    /// Number of subaddresses. Defaults to 0, which derives none.
    pub subaddr_num: u32,
    /// Minor index of the first subaddress. Defaults to 0.
    pub subaddr_off: u32,
    /// Payment ID of the integrated address, if one is wanted.
    pub payment_id: Option<[u8; 8]>,
}

#[derive(Clone)]
struct Subaddresses {
    account_idx: u32,
    offset: u32,
    addresses: AddressCollection<String>,
}

/// A Monero wallet: one spend/view key set and an optional subaddress range.
#[derive(Clone)]
pub struct MoneroWallet {
    name: String,
    network: MoneroNetwork,
    mnemonic: Option<Zeroizing<String>>,
    seed: Option<Zeroizing<String>>,
    keys: MoneroKeys,
    record: Option<KeyRecord<MoneroKeyKind>>,
    subaddresses: Option<Subaddresses>,
}

impl MoneroWallet {
    pub(crate) fn new(name: &str, network: MoneroNetwork, keys: MoneroKeys) -> Self {
        Self {
            name: name.to_owned(),
            network,
            mnemonic: None,
            seed: None,
            keys,
            record: None,
            subaddresses: None,
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

    /// Network the addresses are encoded for.
    pub fn network(&self) -> MoneroNetwork {
        self.network
    }
}

impl HdWallet for MoneroWallet {
    type KeyKind = MoneroKeyKind;
    type DataKind = MoneroDataKind;
    type Params = MoneroParams;

    fn generate(&mut self, params: &MoneroParams) -> Result<()> {
        validate_range("subaddress", params.subaddr_num, params.subaddr_off)?;

        let record = self.keys.key_record(self.network, params.payment_id.as_ref())?;
        let subaddresses = if params.subaddr_num > 0 {
            let mut addresses = AddressCollection::new(params.subaddr_off, KeyFormat::SUBADDRESS);
            for i in 0..params.subaddr_num {
                addresses.push(self.keys.subaddress(
                    self.network,
                    params.account_idx,
                    params.subaddr_off + i,
                )?);
            }
            Some(Subaddresses {
                account_idx: params.account_idx,
                offset: params.subaddr_off,
                addresses,
            })
        } else {
            None
        };

        debug!(
            network = %self.network,
            account = params.account_idx,
            subaddresses = params.subaddr_num,
            integrated = params.payment_id.is_some(),
            "generated Monero wallet"
        );
        self.record = Some(record);
        self.subaddresses = subaddresses;
        Ok(())
    }

    fn is_watch_only(&self) -> bool {
        self.keys.is_watch_only()
    }

    fn get_data(&self, kind: MoneroDataKind) -> Option<DataValue<'_, MoneroKeyKind>> {
        match kind {
            MoneroDataKind::WalletName => Some(DataValue::Text(&self.name)),
            MoneroDataKind::CoinName => Some(DataValue::Text(self.network.coin_name())),
            MoneroDataKind::Mnemonic => self.mnemonic.as_deref().map(|m| DataValue::Text(m)),
            MoneroDataKind::SeedBytes => self.seed.as_deref().map(|s| DataValue::Text(s)),
            MoneroDataKind::Key => self.record.as_ref().map(DataValue::Keys),
            MoneroDataKind::AccountIdx => {
                self.subaddresses.as_ref().map(|s| DataValue::Index(s.account_idx))
            }
            MoneroDataKind::SubaddressOff => {
                self.subaddresses.as_ref().map(|s| DataValue::Index(s.offset))
            }
            MoneroDataKind::Subaddresses => {
                self.subaddresses.as_ref().map(|s| DataValue::AddressList(&s.addresses))
            }
        }
    }
}
