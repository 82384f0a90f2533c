//! Cardano coin variants.

use core::fmt;
use core::str::FromStr;

use hdwkit::WordCount;

/// How a mnemonic becomes the master key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterKeyStyle {
    /// PBKDF2 over the mnemonic entropy (Yoroi, Daedalus Shelley).
    Icarus,
    /// HMAC loop over the BIP-39 seed (Ledger devices).
    Ledger,
}

/// A Cardano master key style on one network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardanoCoin {
    /// Icarus master key, mainnet.
    #[default]
    Icarus,
    /// Icarus master key, testnet.
    IcarusTestnet,
    /// Ledger master key, mainnet.
    Ledger,
    /// Ledger master key, testnet.
    LedgerTestnet,
}

impl CardanoCoin {
    /// Every supported variant.
    pub const ALL: [Self; 4] = [
        Self::Icarus,
        Self::IcarusTestnet,
        Self::Ledger,
        Self::LedgerTestnet,
    ];

    /// SLIP-44 coin type.
    pub const COIN_TYPE: u32 = 1815;

    /// CIP-1852 purpose.
    pub const PURPOSE: u32 = 1852;

    /// Master key derivation style.
    pub const fn style(self) -> MasterKeyStyle {
        match self {
            Self::Icarus | Self::IcarusTestnet => MasterKeyStyle::Icarus,
            Self::Ledger | Self::LedgerTestnet => MasterKeyStyle::Ledger,
        }
    }

    /// Whether addresses are for the test network.
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::IcarusTestnet | Self::LedgerTestnet)
    }

    /// Network id written into the address header.
    pub const fn network_id(self) -> u8 {
        if self.is_testnet() { 0 } else { 1 }
    }

    /// Bech32 prefix of payment addresses.
    pub const fn address_hrp(self) -> &'static str {
        if self.is_testnet() { "addr_test" } else { "addr" }
    }

    /// Bech32 prefix of reward addresses.
    pub const fn reward_hrp(self) -> &'static str {
        if self.is_testnet() { "stake_test" } else { "stake" }
    }

    /// Mnemonic length used when none is requested.
    pub const fn default_word_count(self) -> WordCount {
        match self.style() {
            MasterKeyStyle::Icarus => WordCount::Words15,
            MasterKeyStyle::Ledger => WordCount::Words24,
        }
    }

    /// Coin name reported by wallets.
    pub const fn coin_name(self) -> &'static str {
        match self {
            Self::Icarus => "Cardano Icarus (ADA)",
            Self::IcarusTestnet => "Cardano Icarus TestNet (ADA)",
            Self::Ledger => "Cardano Ledger (ADA)",
            Self::LedgerTestnet => "Cardano Ledger TestNet (ADA)",
        }
    }

    /// Lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Icarus => "icarus",
            Self::IcarusTestnet => "icarus-testnet",
            Self::Ledger => "ledger",
            Self::LedgerTestnet => "ledger-testnet",
        }
    }
}

impl fmt::Display for CardanoCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for an unknown Cardano coin name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoinError(String);

impl fmt::Display for ParseCoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown Cardano coin '{}', expected one of: icarus, icarus-testnet, ledger, ledger-testnet",
            self.0
        )
    }
}

impl std::error::Error for ParseCoinError {}

impl FromStr for CardanoCoin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|coin| coin.id() == lower)
            .ok_or_else(|| ParseCoinError(s.to_owned()))
    }
}
