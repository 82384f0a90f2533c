//! Key and data kinds of Substrate wallets.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Encodings emitted for the derived sr25519 key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubstrateKeyKind {
    /// Public key, hex.
    Pub,
    /// Expanded secret key `key‖nonce`, hex.
    Priv,
    /// SS58 address.
    Address,
}

impl KeyKind for SubstrateKeyKind {
    const ALL: &'static [Self] = &[Self::Pub, Self::Priv, Self::Address];

    fn name(self) -> &'static str {
        match self {
            Self::Pub => "pub",
            Self::Priv => "priv",
            Self::Address => "address",
        }
    }

    fn is_private(self) -> bool {
        self == Self::Priv
    }
}

/// Top-level fields of a Substrate wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstrateDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// Network display name.
    CoinName,
    /// BIP-39 mnemonic.
    Mnemonic,
    /// Mnemonic passphrase.
    Passphrase,
    /// Seed, hex.
    SeedBytes,
    /// Derivation path applied by the last `generate`.
    Path,
    /// The derived key.
    Key,
}

impl DataKind for SubstrateDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
        Self::CoinName,
        Self::Mnemonic,
        Self::Passphrase,
        Self::SeedBytes,
        Self::Path,
        Self::Key,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
            Self::CoinName => "coin_name",
            Self::Mnemonic => "mnemonic",
            Self::Passphrase => "passphrase",
            Self::SeedBytes => "seed_bytes",
            Self::Path => "path",
            Self::Key => "key",
        }
    }
}

/// Error returned for a name that is not a Substrate wallet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Substrate wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for SubstrateKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for SubstrateDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
