//! Key and data kinds of Algorand wallets.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Encodings emitted for the Algorand key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorandKeyKind {
    /// Private key (ed25519 seed), hex.
    Priv,
    /// Public key, hex.
    Pub,
    /// Base32 address.
    Address,
}

impl KeyKind for AlgorandKeyKind {
    const ALL: &'static [Self] = &[Self::Priv, Self::Pub, Self::Address];

    fn name(self) -> &'static str {
        match self {
            Self::Priv => "priv",
            Self::Pub => "pub",
            Self::Address => "address",
        }
    }

    fn is_private(self) -> bool {
        self == Self::Priv
    }
}

/// Top-level fields of an Algorand wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorandDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// Coin display name.
    CoinName,
    /// 25-word mnemonic.
    Mnemonic,
    /// Private key the wallet was created from, hex.
    SeedBytes,
    /// The key record.
    Key,
}

impl DataKind for AlgorandDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
        Self::CoinName,
        Self::Mnemonic,
        Self::SeedBytes,
        Self::Key,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
            Self::CoinName => "coin_name",
            Self::Mnemonic => "mnemonic",
            Self::SeedBytes => "seed_bytes",
            Self::Key => "key",
        }
    }
}

/// Error returned for a name that is not an Algorand wallet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Algorand wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for AlgorandKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for AlgorandDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
