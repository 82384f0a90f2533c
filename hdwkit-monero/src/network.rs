//! Monero networks and their address prefixes.

use core::fmt;
use core::str::FromStr;

/// A Monero network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MoneroNetwork {
    /// Main network.
    #[default]
    Mainnet,
    /// Stage network.
    Stagenet,
    /// Test network.
    Testnet,
}

/// Address prefixes of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPrefixes {
    /// Standard (primary) address.
    pub standard: u8,
    /// Integrated address (standard + payment ID).
    pub integrated: u8,
    /// Subaddress.
    pub subaddress: u8,
}

impl MoneroNetwork {
    /// Every network.
    pub const ALL: [Self; 3] = [Self::Mainnet, Self::Stagenet, Self::Testnet];

    /// Address prefixes, all encoded as single-byte varints.
    pub const fn prefixes(self) -> AddressPrefixes {
        match self {
            Self::Mainnet => AddressPrefixes {
                standard: 18,
                integrated: 19,
                subaddress: 42,
            },
            Self::Stagenet => AddressPrefixes {
                standard: 24,
                integrated: 25,
                subaddress: 36,
            },
            Self::Testnet => AddressPrefixes {
                standard: 53,
                integrated: 54,
                subaddress: 63,
            },
        }
    }

    /// Lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Stagenet => "stagenet",
            Self::Testnet => "testnet",
        }
    }

    /// Coin name reported by wallets on this network.
    pub const fn coin_name(self) -> &'static str {
        match self {
            Self::Mainnet => "Monero (XMR)",
            Self::Stagenet => "Monero Stagenet (XMR)",
            Self::Testnet => "Monero Testnet (XMR)",
        }
    }
}

impl fmt::Display for MoneroNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for an unknown network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown Monero network '{}', expected mainnet, stagenet or testnet",
            self.0
        )
    }
}

impl std::error::Error for ParseNetworkError {}

impl FromStr for MoneroNetwork {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "xmr" => Ok(Self::Mainnet),
            "stagenet" | "stage" => Ok(Self::Stagenet),
            "testnet" | "test" => Ok(Self::Testnet),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("Stagenet".parse::<MoneroNetwork>().unwrap(), MoneroNetwork::Stagenet);
        assert_eq!("xmr".parse::<MoneroNetwork>().unwrap(), MoneroNetwork::Mainnet);
        assert!("regtest".parse::<MoneroNetwork>().is_err());
    }

    #[test]
    fn prefixes_are_distinct() {
        let mut all: Vec<u8> = MoneroNetwork::ALL
            .iter()
            .flat_map(|n| {
                let p = n.prefixes();
                [p.standard, p.integrated, p.subaddress]
            })
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 9);
    }
}
