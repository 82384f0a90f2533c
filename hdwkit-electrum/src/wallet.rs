//! Parameters and state shared by both Electrum wallet generations.

use hdwkit::{AddressCollection, DataValue, KeyRecord};
use zeroize::Zeroizing;

use crate::kind::{ElectrumDataKind, ElectrumKeyKind};

pub(crate) type Record = KeyRecord<ElectrumKeyKind>;

/// Generation parameters of an Electrum wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectrumParams {
    /// Change branch: 0 for receiving, 1 for change. Defaults to 0.
    pub change_idx: u32,
    /// Number of addresses to derive. Defaults to 20.
    pub addr_num: u32,
    /// Index of the first address. Defaults to 0.
    pub addr_off: u32,
}

impl Default for ElectrumParams {
    fn default() -> Self {
        Self {
            change_idx: 0,
            addr_num: 20,
            addr_off: 0,
        }
    }
}

/// Metadata fixed when a wallet is created.
#[derive(Clone, Default)]
pub(crate) struct Meta {
    pub name: String,
    pub mnemonic: Option<Zeroizing<String>>,
    pub passphrase: Option<Zeroizing<String>>,
    pub seed: Option<Zeroizing<String>>,
}

impl Meta {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }
}

/// Everything one `generate` call produces.
#[derive(Clone, Default)]
pub(crate) struct Levels {
    pub master_key: Option<Record>,
    pub change_idx: Option<u32>,
    pub address_off: Option<u32>,
    pub addresses: Option<AddressCollection<Record>>,
}

/// Field lookup common to both generations.
pub(crate) fn get_data<'a>(
    meta: &'a Meta,
    levels: &'a Levels,
    spec_name: &'static str,
    mnemonic_type: Option<&'static str>,
    kind: ElectrumDataKind,
) -> Option<DataValue<'a, ElectrumKeyKind>> {
    match kind {
        ElectrumDataKind::WalletName => Some(DataValue::Text(&meta.name)),
        ElectrumDataKind::SpecName => Some(DataValue::Text(spec_name)),
        ElectrumDataKind::MnemonicType => mnemonic_type.map(DataValue::Text),
        ElectrumDataKind::Mnemonic => meta.mnemonic.as_deref().map(|m| DataValue::Text(m)),
        ElectrumDataKind::Passphrase => meta.passphrase.as_deref().map(|p| DataValue::Text(p)),
        ElectrumDataKind::SeedBytes => meta.seed.as_deref().map(|s| DataValue::Text(s)),
        ElectrumDataKind::MasterKey => levels.master_key.as_ref().map(DataValue::Keys),
        ElectrumDataKind::ChangeIdx => levels.change_idx.map(DataValue::Index),
        ElectrumDataKind::AddressOff => levels.address_off.map(DataValue::Index),
        ElectrumDataKind::Addresses => levels.addresses.as_ref().map(DataValue::KeyCollection),
    }
}
