//! Generation parameters shared by several schemes.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// BIP-44 change chain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Chain {
    /// Receiving addresses (`0`).
    #[default]
    External,
    /// Change addresses (`1`).
    Internal,
}

impl Chain {
    /// Numeric index written into the derivation path.
    pub const fn index(self) -> u32 {
        match self {
            Self::External => 0,
            Self::Internal => 1,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an invalid chain selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChainError(String);

impl fmt::Display for ParseChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid chain '{}', expected one of: external, internal, 0, 1",
            self.0
        )
    }
}

impl std::error::Error for ParseChainError {}

impl FromStr for Chain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "external" | "receive" | "0" => Ok(Self::External),
            "internal" | "change" | "1" => Ok(Self::Internal),
            _ => Err(ParseChainError(s.to_owned())),
        }
    }
}

/// Check that `num` entries starting at `off` stay within 32-bit indices.
///
/// `name` labels the range in the error, e.g. `"address"`.
pub fn validate_range(name: &'static str, num: u32, off: u32) -> Result<()> {
    let end = u64::from(off) + u64::from(num);
    if end > u64::from(u32::MAX) {
        return Err(Error::IndexOutOfRange {
            name,
            value: end,
            max: u64::from(u32::MAX),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_parse_and_index() {
        assert_eq!("internal".parse::<Chain>().unwrap(), Chain::Internal);
        assert_eq!("0".parse::<Chain>().unwrap().index(), 0);
        assert!("2".parse::<Chain>().is_err());
    }

    #[test]
    fn range_at_ceiling_is_accepted() {
        assert!(validate_range("address", 1, u32::MAX - 1).is_ok());
        assert!(validate_range("address", u32::MAX, 0).is_ok());
    }

    #[test]
    fn range_past_ceiling_is_rejected() {
        let err = validate_range("address", 2, u32::MAX - 1).unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfRange {
                value: 4_294_967_296,
                ..
            }
        ));
    }
}
