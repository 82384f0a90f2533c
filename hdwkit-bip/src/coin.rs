//! Coins reachable through the BIP-44 family of schemes.

use core::fmt;
use core::str::FromStr;

/// Elliptic curve a coin signs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// secp256k1, BIP-32 derivation with public children.
    Secp256k1,
    /// ed25519, SLIP-10 derivation, hardened children only.
    Ed25519,
}

/// Address format family of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressStyle {
    /// Bitcoin-like: the BIP purpose selects P2PKH, P2SH-P2WPKH, P2WPKH or P2TR.
    Utxo {
        /// Base58 version byte of P2PKH addresses.
        p2pkh: u8,
        /// Base58 version byte of P2SH addresses.
        p2sh: u8,
        /// Bech32 human-readable part, if the coin has SegWit.
        hrp: Option<&'static str>,
    },
    /// Ethereum and EVM chains: EIP-55 checksummed Keccak address.
    Ethereum,
    /// Tron: base58check of `0x41 ‖ keccak20`.
    Tron,
    /// Cosmos SDK chains: bech32 of the key's Hash160.
    Cosmos {
        /// Bech32 human-readable part.
        hrp: &'static str,
    },
    /// Solana: base58 of the ed25519 public key.
    Solana,
}

/// A coin supported by the BIP engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    /// Bitcoin mainnet.
    Bitcoin,
    /// Bitcoin testnet.
    BitcoinTestnet,
    /// Litecoin.
    Litecoin,
    /// Dogecoin.
    Dogecoin,
    /// Dash.
    Dash,
    /// Ethereum.
    Ethereum,
    /// Ethereum Classic.
    EthereumClassic,
    /// BNB Smart Chain.
    BinanceSmartChain,
    /// Polygon.
    Polygon,
    /// Tron.
    Tron,
    /// Cosmos Hub.
    Cosmos,
    /// Solana.
    Solana,
}

impl Coin {
    /// Every coin, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Bitcoin,
        Self::BitcoinTestnet,
        Self::Litecoin,
        Self::Dogecoin,
        Self::Dash,
        Self::Ethereum,
        Self::EthereumClassic,
        Self::BinanceSmartChain,
        Self::Polygon,
        Self::Tron,
        Self::Cosmos,
        Self::Solana,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::BitcoinTestnet => "Bitcoin TestNet",
            Self::Litecoin => "Litecoin",
            Self::Dogecoin => "Dogecoin",
            Self::Dash => "Dash",
            Self::Ethereum => "Ethereum",
            Self::EthereumClassic => "Ethereum Classic",
            Self::BinanceSmartChain => "BNB Smart Chain",
            Self::Polygon => "Polygon",
            Self::Tron => "Tron",
            Self::Cosmos => "Cosmos",
            Self::Solana => "Solana",
        }
    }

    /// Ticker symbol.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::BitcoinTestnet => "BTC",
            Self::Litecoin => "LTC",
            Self::Dogecoin => "DOGE",
            Self::Dash => "DASH",
            Self::Ethereum => "ETH",
            Self::EthereumClassic => "ETC",
            Self::BinanceSmartChain => "BNB",
            Self::Polygon => "MATIC",
            Self::Tron => "TRX",
            Self::Cosmos => "ATOM",
            Self::Solana => "SOL",
        }
    }

    /// `"Name (TICKER)"` as reported in wallets.
    pub fn display_name(self) -> String {
        format!("{} ({})", self.name(), self.abbreviation())
    }

    /// SLIP-44 coin type.
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Bitcoin => 0,
            Self::BitcoinTestnet => 1,
            Self::Litecoin => 2,
            Self::Dogecoin => 3,
            Self::Dash => 5,
            Self::Ethereum | Self::BinanceSmartChain | Self::Polygon => 60,
            Self::EthereumClassic => 61,
            Self::Tron => 195,
            Self::Cosmos => 118,
            Self::Solana => 501,
        }
    }

    /// Whether the coin is a test network.
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::BitcoinTestnet)
    }

    /// Signing curve.
    pub const fn curve(self) -> Curve {
        match self {
            Self::Solana => Curve::Ed25519,
            _ => Curve::Secp256k1,
        }
    }

    /// Address format family.
    pub const fn address_style(self) -> AddressStyle {
        match self {
            Self::Bitcoin => AddressStyle::Utxo {
                p2pkh: 0x00,
                p2sh: 0x05,
                hrp: Some("bc"),
            },
            Self::BitcoinTestnet => AddressStyle::Utxo {
                p2pkh: 0x6f,
                p2sh: 0xc4,
                hrp: Some("tb"),
            },
            Self::Litecoin => AddressStyle::Utxo {
                p2pkh: 0x30,
                p2sh: 0x32,
                hrp: Some("ltc"),
            },
            Self::Dogecoin => AddressStyle::Utxo {
                p2pkh: 0x1e,
                p2sh: 0x16,
                hrp: None,
            },
            Self::Dash => AddressStyle::Utxo {
                p2pkh: 0x4c,
                p2sh: 0x10,
                hrp: None,
            },
            Self::Ethereum | Self::EthereumClassic | Self::BinanceSmartChain | Self::Polygon => {
                AddressStyle::Ethereum
            }
            Self::Tron => AddressStyle::Tron,
            Self::Cosmos => AddressStyle::Cosmos { hrp: "cosmos" },
            Self::Solana => AddressStyle::Solana,
        }
    }

    /// WIF version byte, for coins that define one.
    pub const fn wif_prefix(self) -> Option<u8> {
        match self {
            Self::Bitcoin => Some(0x80),
            Self::BitcoinTestnet => Some(0xef),
            Self::Litecoin => Some(0xb0),
            Self::Dogecoin => Some(0x9e),
            Self::Dash => Some(0xcc),
            _ => None,
        }
    }

    /// Lowercase identifier accepted by [`FromStr`].
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::BitcoinTestnet => "bitcoin-testnet",
            Self::Litecoin => "litecoin",
            Self::Dogecoin => "dogecoin",
            Self::Dash => "dash",
            Self::Ethereum => "ethereum",
            Self::EthereumClassic => "ethereum-classic",
            Self::BinanceSmartChain => "bsc",
            Self::Polygon => "polygon",
            Self::Tron => "tron",
            Self::Cosmos => "cosmos",
            Self::Solana => "solana",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown coin identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoinError(String);

impl fmt::Display for ParseCoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown coin '{}', expected one of: ", self.0)?;
        let ids: Vec<_> = Coin::ALL.iter().map(|c| c.id()).collect();
        f.write_str(&ids.join(", "))
    }
}

impl std::error::Error for ParseCoinError {}

impl FromStr for Coin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Some(coin) = Self::ALL.iter().copied().find(|c| c.id() == lower) {
            return Ok(coin);
        }
        match lower.as_str() {
            "btc" => Ok(Self::Bitcoin),
            "btc-test" | "tbtc" | "testnet" => Ok(Self::BitcoinTestnet),
            "ltc" => Ok(Self::Litecoin),
            "doge" => Ok(Self::Dogecoin),
            "eth" => Ok(Self::Ethereum),
            "etc" => Ok(Self::EthereumClassic),
            "bnb" | "binance" => Ok(Self::BinanceSmartChain),
            "matic" => Ok(Self::Polygon),
            "trx" => Ok(Self::Tron),
            "atom" => Ok(Self::Cosmos),
            "sol" => Ok(Self::Solana),
            _ => Err(ParseCoinError(s.to_owned())),
        }
    }
}
