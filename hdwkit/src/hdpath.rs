//! Child indices and the fixed derivation levels of BIP-44 style trees.
//!
//! A root node carries its own [`Level`], read off its depth, and the
//! generation engines only walk forward from there. An account-level extended
//! key therefore skips the master, purpose and coin steps.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// A child index in a derivation path.
///
/// Can be either normal (non-hardened) or hardened.
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n', stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::IndexOutOfRange {
                name: "hardened index",
                value: u64::from(index),
                max: u64::from(Self::HARDENED_OFFSET - 1),
            })
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without hardened flag).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw u32 value used in BIP-32 derivation.
    ///
    /// For hardened indices, this includes the hardened offset (2^31).
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(value: u32) -> Self {
        if value >= Self::HARDENED_OFFSET {
            Self::Hardened(value & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(value)
        }
    }
}

impl From<ChildIndex> for u32 {
    fn from(index: ChildIndex) -> Self {
        index.to_u32()
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let index: u32 = digits
            .parse()
            .map_err(|e| Error::path(s, format!("bad child index: {e}")))?;
        if index >= Self::HARDENED_OFFSET {
            return Err(Error::path(s, "child index must be below 2^31"));
        }
        Ok(if hardened {
            Self::Hardened(index)
        } else {
            Self::Normal(index)
        })
    }
}

/// Position of a node in a `m / purpose' / coin' / account' / change / index` tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Root node (depth 0).
    Master,
    /// `m/purpose'` (depth 1).
    Purpose,
    /// `m/purpose'/coin'` (depth 2).
    Coin,
    /// `m/purpose'/coin'/account'` (depth 3).
    Account,
    /// `.../account'/change` (depth 4).
    Change,
    /// A leaf address key (depth 5 and below).
    AddressIndex,
}

impl Level {
    /// Level of a node at the given depth.
    pub const fn from_depth(depth: u8) -> Self {
        match depth {
            0 => Self::Master,
            1 => Self::Purpose,
            2 => Self::Coin,
            3 => Self::Account,
            4 => Self::Change,
            _ => Self::AddressIndex,
        }
    }

    /// Depth of the first node at this level.
    pub const fn depth(self) -> u8 {
        match self {
            Self::Master => 0,
            Self::Purpose => 1,
            Self::Coin => 2,
            Self::Account => 3,
            Self::Change => 4,
            Self::AddressIndex => 5,
        }
    }

    /// Lowercase level name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Purpose => "purpose",
            Self::Coin => "coin",
            Self::Account => "account",
            Self::Change => "change",
            Self::AddressIndex => "address_index",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
