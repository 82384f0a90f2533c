//! The BIP purposes and their per-coin extended key versions.

use core::fmt;
use core::str::FromStr;

use crate::coin::Coin;

/// A BIP-44 family derivation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bip {
    /// `m/44'`: legacy P2PKH and every account-based coin.
    #[default]
    Bip44,
    /// `m/49'`: P2SH-wrapped SegWit.
    Bip49,
    /// `m/84'`: native SegWit.
    Bip84,
    /// `m/86'`: Taproot key-path outputs.
    Bip86,
}

/// BIP-32 version bytes for one scheme and coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyVersions {
    /// Prefix of serialized private keys.
    pub private: [u8; 4],
    /// Prefix of serialized public keys.
    pub public: [u8; 4],
}

impl KeyVersions {
    const fn new(private: u32, public: u32) -> Self {
        Self {
            private: private.to_be_bytes(),
            public: public.to_be_bytes(),
        }
    }
}

const XPRV: KeyVersions = KeyVersions::new(0x0488_ade4, 0x0488_b21e);
const TPRV: KeyVersions = KeyVersions::new(0x0435_8394, 0x0435_87cf);
const YPRV: KeyVersions = KeyVersions::new(0x049d_7878, 0x049d_7cb2);
const UPRV: KeyVersions = KeyVersions::new(0x044a_4e28, 0x044a_5262);
const ZPRV: KeyVersions = KeyVersions::new(0x04b2_430c, 0x04b2_4746);
const VPRV: KeyVersions = KeyVersions::new(0x045f_18bc, 0x045f_1cf6);
const LTPV: KeyVersions = KeyVersions::new(0x019d_9cfe, 0x019d_a462);
const MTPV: KeyVersions = KeyVersions::new(0x01b2_6792, 0x01b2_6ef6);
const DGPV: KeyVersions = KeyVersions::new(0x02fa_c398, 0x02fa_cafd);

/// Output script a Bitcoin-like coin uses under a given purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Pay to public key hash.
    P2pkh,
    /// P2WPKH nested in P2SH.
    P2shP2wpkh,
    /// Native SegWit v0.
    P2wpkh,
    /// SegWit v1 key-path spend.
    P2tr,
}

impl Bip {
    /// Every scheme, in purpose order.
    pub const ALL: &'static [Self] = &[Self::Bip44, Self::Bip49, Self::Bip84, Self::Bip86];

    /// Purpose field of the derivation path.
    pub const fn purpose(self) -> u32 {
        match self {
            Self::Bip44 => 44,
            Self::Bip49 => 49,
            Self::Bip84 => 84,
            Self::Bip86 => 86,
        }
    }

    /// Scheme name as reported in wallets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bip44 => "BIP44",
            Self::Bip49 => "BIP49",
            Self::Bip84 => "BIP84",
            Self::Bip86 => "BIP86",
        }
    }

    /// Output script used for Bitcoin-like coins.
    pub const fn script_kind(self) -> ScriptKind {
        match self {
            Self::Bip44 => ScriptKind::P2pkh,
            Self::Bip49 => ScriptKind::P2shP2wpkh,
            Self::Bip84 => ScriptKind::P2wpkh,
            Self::Bip86 => ScriptKind::P2tr,
        }
    }

    /// Whether `coin` is defined under this scheme.
    pub const fn supports(self, coin: Coin) -> bool {
        match self {
            Self::Bip44 => true,
            Self::Bip49 | Self::Bip84 => matches!(
                coin,
                Coin::Bitcoin | Coin::BitcoinTestnet | Coin::Litecoin
            ),
            Self::Bip86 => matches!(coin, Coin::Bitcoin | Coin::BitcoinTestnet),
        }
    }

    /// Coins defined under this scheme.
    pub fn coins(self) -> impl Iterator<Item = Coin> {
        Coin::ALL.iter().copied().filter(move |c| self.supports(*c))
    }

    /// Extended key version bytes for `coin` under this scheme.
    pub const fn key_versions(self, coin: Coin) -> KeyVersions {
        match (self, coin) {
            (Self::Bip44 | Self::Bip86, Coin::BitcoinTestnet) => TPRV,
            (Self::Bip44, Coin::Litecoin) => LTPV,
            (Self::Bip44, Coin::Dogecoin) => DGPV,
            (Self::Bip49, Coin::BitcoinTestnet) => UPRV,
            (Self::Bip49, Coin::Litecoin) => MTPV,
            (Self::Bip49, _) => YPRV,
            (Self::Bip84, Coin::BitcoinTestnet) => VPRV,
            (Self::Bip84, _) => ZPRV,
            _ => XPRV,
        }
    }
}

impl fmt::Display for Bip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown scheme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBipError(String);

impl fmt::Display for ParseBipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid scheme '{}', expected one of: bip44, bip49, bip84, bip86",
            self.0
        )
    }
}

impl std::error::Error for ParseBipError {}

impl FromStr for Bip {
    type Err = ParseBipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bip44" | "44" => Ok(Self::Bip44),
            "bip49" | "49" => Ok(Self::Bip49),
            "bip84" | "84" => Ok(Self::Bip84),
            "bip86" | "86" => Ok(Self::Bip86),
            _ => Err(ParseBipError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_matrix() {
        assert_eq!(Bip::Bip44.coins().count(), Coin::ALL.len());
        assert!(Bip::Bip84.supports(Coin::Litecoin));
        assert!(!Bip::Bip84.supports(Coin::Ethereum));
        assert!(!Bip::Bip86.supports(Coin::Litecoin));
        assert_eq!(Bip::Bip49.coins().count(), 3);
    }

    #[test]
    fn version_bytes() {
        assert_eq!(Bip::Bip44.key_versions(Coin::Ethereum).public, [0x04, 0x88, 0xb2, 0x1e]);
        assert_eq!(Bip::Bip84.key_versions(Coin::Bitcoin).public, [0x04, 0xb2, 0x47, 0x46]);
        assert_eq!(
            Bip::Bip49.key_versions(Coin::BitcoinTestnet).private,
            [0x04, 0x4a, 0x4e, 0x28]
        );
        assert_eq!(Bip::Bip44.key_versions(Coin::Dogecoin).public, [0x02, 0xfa, 0xca, 0xfd]);
    }

    #[test]
    fn parse() {
        assert_eq!("BIP86".parse::<Bip>().unwrap(), Bip::Bip86);
        assert_eq!("49".parse::<Bip>().unwrap().purpose(), 49);
        assert!("bip32".parse::<Bip>().is_err());
    }
}
