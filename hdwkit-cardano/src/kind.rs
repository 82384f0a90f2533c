//! Key and data kinds of Cardano wallets.

use core::fmt;
use core::str::FromStr;

use hdwkit::{DataKind, KeyKind};

/// Encodings emitted for each Cardano key node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardanoKeyKind {
    /// Extended public key.
    ExPub,
    /// Public key with the `0x00` prefix, hex.
    RawPub,
    /// Extended private key.
    ExPriv,
    /// Extended secret `kL ‖ kR`, hex.
    RawPriv,
    /// Base address for address keys, reward address for the staking key.
    Address,
}

impl KeyKind for CardanoKeyKind {
    const ALL: &'static [Self] = &[
        Self::ExPub,
        Self::RawPub,
        Self::ExPriv,
        Self::RawPriv,
        Self::Address,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::ExPub => "ex_pub",
            Self::RawPub => "raw_pub",
            Self::ExPriv => "ex_priv",
            Self::RawPriv => "raw_priv",
            Self::Address => "address",
        }
    }

    fn is_private(self) -> bool {
        matches!(self, Self::ExPriv | Self::RawPriv)
    }
}

/// Top-level fields of a Cardano wallet, in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardanoDataKind {
    /// Caller-chosen wallet name.
    WalletName,
    /// Coin display name.
    CoinName,
    /// Mnemonic the wallet was created from.
    Mnemonic,
    /// Passphrase mixed into the master key.
    Passphrase,
    /// Mnemonic entropy (Icarus) or BIP-39 seed (Ledger), hex.
    SeedBytes,
    /// Root node.
    MasterKey,
    /// `m/1852'`.
    PurposeKey,
    /// `m/1852'/1815'`.
    CoinKey,
    /// Account index used for the account node.
    AccountIdx,
    /// `m/1852'/1815'/account'`.
    AccountKey,
    /// Role of the payment chain (0 external, 1 internal).
    ChangeIdx,
    /// `.../account'/role`.
    ChangeKey,
    /// Index of the first address.
    AddressOff,
    /// Payment keys with their base addresses.
    Addresses,
    /// `.../account'/2/0` with its reward address.
    StakingKey,
}

impl DataKind for CardanoDataKind {
    const ALL: &'static [Self] = &[
        Self::WalletName,
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
        Self::StakingKey,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::WalletName => "wallet_name",
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
            Self::StakingKey => "staking_key",
        }
    }
}

/// Error returned for a name that is not a Cardano wallet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Cardano wallet kind '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for CardanoKeyKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

impl FromStr for CardanoDataKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseKindError(s.to_owned()))
    }
}
