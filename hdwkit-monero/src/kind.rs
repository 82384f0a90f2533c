//! Key and data kinds of Monero wallets.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Entries of the Monero key record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoneroKeyKind {
    /// Private spend key, hex.
    PrivSkey,
    /// Private view key, hex.
    PrivVkey,
    /// Public spend key, hex.
    PubSkey,
    /// Public view key, hex.
    PubVkey,
    /// Standard address.
    PrimaryAddress,
    /// Standard address with a payment ID, when one was given.
    IntegratedAddress,
}

impl KeyKind for MoneroKeyKind {
    const ALL: &'static [Self] = &[
        Self::PrivSkey,
        Self::PrivVkey,
        Self::PubSkey,
        Self::PubVkey,
        Self::PrimaryAddress,
        Self::IntegratedAddress,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PrivSkey => "priv_skey",
            Self::PrivVkey => "priv_vkey",
            Self::PubSkey => "pub_skey",
            Self::PubVkey => "pub_vkey",
            Self::PrimaryAddress => "primary_address",
            Self::IntegratedAddress => "integrated_address",
        }
    }

    /// Only the spend key is secret here: a watch-only wallet still holds
    /// the private view key.
    fn is_private(self) -> bool {
        self == Self::PrivSkey
    }
}

/// Top-level fields of a Monero wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneroDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// Coin display name.
    CoinName,
    /// 25 or 13-word mnemonic.
    Mnemonic,
    /// Seed, hex.
    SeedBytes,
    /// The key record.
    Key,
    /// Account of the subaddresses.
    AccountIdx,
    /// Index of the first subaddress.
    SubaddressOff,
    /// Derived subaddresses.
    Subaddresses,
}

impl DataKind for MoneroDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
        Self::CoinName,
        Self::Mnemonic,
        Self::SeedBytes,
        Self::Key,
        Self::AccountIdx,
        Self::SubaddressOff,
        Self::Subaddresses,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
            Self::CoinName => "coin_name",
            Self::Mnemonic => "mnemonic",
            Self::SeedBytes => "seed_bytes",
            Self::Key => "key",
            Self::AccountIdx => "account_idx",
            Self::SubaddressOff => "subaddress_off",
            Self::Subaddresses => "subaddresses",
        }
    }
}

/// Error returned for a name that is not a Monero wallet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Monero wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for MoneroKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for MoneroDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
