//! Key and data kinds shared by both Electrum wallet generations.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Encodings emitted for each Electrum key.
///
/// V1 keys have no extended forms, so `ex_pub` and `ex_priv` only appear in
/// V2 wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElectrumKeyKind {
    /// Extended public key.
    ExPub,
    /// Compressed public key, hex.
    RawComprPub,
    /// Uncompressed public key without prefix byte, hex.
    RawUncomprPub,
    /// Extended private key.
    ExPriv,
    /// Private key, hex.
    RawPriv,
    /// Wallet import format.
    WifPriv,
    /// Address.
    Address,
}

impl KeyKind for ElectrumKeyKind {
    const ALL: &'static [Self] = &[
        Self::ExPub,
        Self::RawComprPub,
        Self::RawUncomprPub,
        Self::ExPriv,
        Self::RawPriv,
        Self::WifPriv,
        Self::Address,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::ExPub => "ex_pub",
            Self::RawComprPub => "raw_compr_pub",
            Self::RawUncomprPub => "raw_uncompr_pub",
            Self::ExPriv => "ex_priv",
            Self::RawPriv => "raw_priv",
            Self::WifPriv => "wif_priv",
            Self::Address => "address",
        }
    }

    fn is_private(self) -> bool {
        matches!(self, Self::ExPriv | Self::RawPriv | Self::WifPriv)
    }
}

/// Top-level fields of an Electrum wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectrumDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// `"Electrum V1"` or `"Electrum V2"`.
    SpecName,
    /// `"standard"` or `"segwit"` (V2 only).
    MnemonicType,
    /// Mnemonic.
    Mnemonic,
    /// Seed extension (V2 only).
    Passphrase,
    /// Seed, hex.
    SeedBytes,
    /// Master key.
    MasterKey,
    /// Change branch used for addresses.
    ChangeIdx,
    /// Index of the first address.
    AddressOff,
    /// Derived addresses.
    Addresses,
}

impl DataKind for ElectrumDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
        Self::SpecName,
        Self::MnemonicType,
        Self::Mnemonic,
        Self::Passphrase,
        Self::SeedBytes,
        Self::MasterKey,
        Self::ChangeIdx,
        Self::AddressOff,
        Self::Addresses,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
            Self::SpecName => "spec_name",
            Self::MnemonicType => "mnemonic_type",
            Self::Mnemonic => "mnemonic",
            Self::Passphrase => "passphrase",
            Self::SeedBytes => "seed_bytes",
            Self::MasterKey => "master_key",
            Self::ChangeIdx => "change_idx",
            Self::AddressOff => "address_off",
            Self::Addresses => "addresses",
        }
    }
}

/// Error returned for a name that is not an Electrum wallet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Electrum wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for ElectrumKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for ElectrumDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
