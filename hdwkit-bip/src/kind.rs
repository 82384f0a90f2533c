//! Key and data kinds of BIP wallets.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Encodings emitted for each BIP key node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BipKeyKind {
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
    /// Wallet import format, for coins that define one.
    WifPriv,
    /// Address string.
    Address,
}

impl KeyKind for BipKeyKind {
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

/// Top-level fields of a BIP wallet, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BipDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// `"BIP44"` and friends.
    SpecName,
    /// Coin display name.
    CoinName,
    /// Mnemonic the wallet was created from.
    Mnemonic,
    /// BIP-39 passphrase.
    Passphrase,
    /// Seed, hex.
    SeedBytes,
    /// Root node.
    MasterKey,
    /// `m/purpose'`.
    PurposeKey,
    /// `m/purpose'/coin'`.
    CoinKey,
    /// Account index used for the account node.
    AccountIdx,
    /// `m/purpose'/coin'/account'`.
    AccountKey,
    /// Change chain index.
    ChangeIdx,
    /// `.../account'/change`.
    ChangeKey,
    /// Index of the first address.
    AddressOff,
    /// Derived addresses.
    Addresses,
}

impl DataKind for BipDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
        Self::SpecName,
        Self::CoinName,
        Self::Mnemonic,
        Self::Passphrase,
        Self::SeedBytes,
        Self::MasterKey,
        Self::PurposeKey,
        Self::CoinKey,
        Self::AccountIdx,
        Self::AccountKey,
        Self::ChangeIdx,
        Self::ChangeKey,
        Self::AddressOff,
        Self::Addresses,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
            Self::SpecName => "spec_name",
            Self::CoinName => "coin_name",
            Self::Mnemonic => "mnemonic",
            Self::Passphrase => "passphrase",
            Self::SeedBytes => "seed_bytes",
            Self::MasterKey => "master_key",
            Self::PurposeKey => "purpose_key",
            Self::CoinKey => "coin_key",
            Self::AccountIdx => "account_idx",
            Self::AccountKey => "account_key",
            Self::ChangeIdx => "change_idx",
            Self::ChangeKey => "change_key",
            Self::AddressOff => "address_off",
            Self::Addresses => "addresses",
        }
    }
}

/// Error returned when a kind name is not one a BIP wallet reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown BIP wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for BipKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for BipDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
