//! Substrate networks and their SS58 address format.

use core::fmt;
use core::str::FromStr;

use hdwkit::hash::blake2b_512;

/// A Substrate-based network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubstrateCoin {
    /// Polkadot relay chain.
    #[default]
    Polkadot,
    /// Kusama relay chain.
    Kusama,
    /// Acala.
    Acala,
    /// Generic Substrate format used by development chains.
    Generic,
}

impl SubstrateCoin {
    /// Every supported network.
    pub const ALL: [Self; 4] = [Self::Polkadot, Self::Kusama, Self::Acala, Self::Generic];

    /// Network name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Polkadot => "Polkadot",
            Self::Kusama => "Kusama",
            Self::Acala => "Acala",
            Self::Generic => "Generic Substrate",
        }
    }

    /// Ticker.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Polkadot => "DOT",
            Self::Kusama => "KSM",
            Self::Acala => "ACA",
            Self::Generic => "SUB",
        }
    }

    /// SS58 address format.
    pub const fn ss58_format(self) -> u16 {
        match self {
            Self::Polkadot => 0,
            Self::Kusama => 2,
            Self::Acala => 10,
            Self::Generic => 42,
        }
    }

    /// Identifier used on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Polkadot => "polkadot",
            Self::Kusama => "kusama",
            Self::Acala => "acala",
            Self::Generic => "substrate",
        }
    }

    /// `"Name (TICKER)"`, as reported in wallets.
    pub fn display_name(self) -> String {
        format!("{} ({})", self.name(), self.abbreviation())
    }

    /// SS58 address of a 32-byte public key.
    pub fn address(self, public_key: &[u8; 32]) -> String {
        ss58_encode(self.ss58_format(), public_key)
    }
}

impl fmt::Display for SubstrateCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoinError(String);

impl fmt::Display for ParseCoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown Substrate network '{}', expected one of: polkadot, kusama, acala, substrate",
            self.0
        )
    }
}

impl std::error::Error for ParseCoinError {}

impl FromStr for SubstrateCoin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.id() == lower || c.abbreviation().eq_ignore_ascii_case(&lower))
            .ok_or_else(|| ParseCoinError(s.to_owned()))
    }
}

fn ss58_encode(format: u16, public_key: &[u8; 32]) -> String {
    let mut data = Vec::with_capacity(36);
    if format < 64 {
        data.push(format as u8);
    } else {
        // Two-byte form for formats 64..16383.
        data.push((((format & 0b1111_1100) >> 2) as u8) | 0b0100_0000);
        data.push(((format >> 8) as u8) | (((format & 0b11) as u8) << 6));
    }
    data.extend_from_slice(public_key);
    let checksum = blake2b_512(&[b"SS58PRE", &data]);
    data.extend_from_slice(&checksum[..2]);
    bs58::encode(data).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ALICE: [u8; 32] = hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

    #[test]
    fn alice_generic_address() {
        assert_eq!(
            SubstrateCoin::Generic.address(&ALICE),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
    }

    #[test]
    fn alice_polkadot_address() {
        assert_eq!(
            SubstrateCoin::Polkadot.address(&ALICE),
            "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"
        );
    }

    #[test]
    fn parse_by_id_and_ticker() {
        assert_eq!("ksm".parse::<SubstrateCoin>().unwrap(), SubstrateCoin::Kusama);
        assert_eq!("substrate".parse::<SubstrateCoin>().unwrap(), SubstrateCoin::Generic);
        assert!("ethereum".parse::<SubstrateCoin>().is_err());
    }
}
