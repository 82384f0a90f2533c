//! Electrum 2.x "segwit era" mnemonics.
//!
//! Words come from the BIP-39 English list, but the phrase carries no
//! checksum. Its type is instead given by the leading hex digits of
//! `HMAC-SHA512("Seed version", phrase)`.

use core::fmt;
use core::str::FromStr;

use hdwkit::entropy::random_bytes;
use hdwkit::hash::hmac_sha512;
use hdwkit::{Error, Language, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::old_mnemonic;

const SEED_VERSION_KEY: &[u8] = b"Seed version";
const SEED_SALT: &str = "electrum";
const PBKDF2_ROUNDS: u32 = 2048;
const RADIX: u32 = 2048;

/// Word counts accepted by [`generate`].
pub const WORD_COUNTS: &[usize] = &[12, 24];

/// Kind of wallet a V2 mnemonic stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MnemonicType {
    /// P2PKH wallet, seed version `01`.
    #[default]
    Standard,
    /// Native segwit wallet, seed version `100`.
    Segwit,
}

impl MnemonicType {
    /// Every type, in display order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Segwit];

    /// Required hex prefix of the seed version hash.
    pub const fn version_prefix(self) -> &'static str {
        match self {
            Self::Standard => "01",
            Self::Segwit => "100",
        }
    }

    /// Lowercase name, as reported in `mnemonic_type`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Segwit => "segwit",
        }
    }

    /// Whether `phrase` (already normalized) carries this type's version.
    pub fn matches(self, phrase: &str) -> bool {
        seed_version(phrase).is_ok_and(|v| v.starts_with(self.version_prefix()))
    }
}

impl fmt::Display for MnemonicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown mnemonic type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMnemonicTypeError(String);

impl fmt::Display for ParseMnemonicTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Electrum mnemonic type '{}'", self.0)
    }
}

impl std::error::Error for ParseMnemonicTypeError {}

impl FromStr for MnemonicType {
    type Err = ParseMnemonicTypeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "segwit" => Ok(Self::Segwit),
            _ => Err(ParseMnemonicTypeError(s.to_owned())),
        }
    }
}

fn seed_version(phrase: &str) -> Result<String> {
    Ok(hex::encode(hmac_sha512(SEED_VERSION_KEY, &[phrase.as_bytes()])?))
}

/// Validate a normalized phrase against `mnemonic_type`.
///
/// Every word must be in the BIP-39 English list, and phrases that also
/// decode as old mnemonics are refused.
pub fn validate(phrase: &str, mnemonic_type: MnemonicType) -> Result<()> {
    if phrase.is_empty() {
        return Err(Error::mnemonic(phrase, "empty phrase"));
    }
    if let Some(word) = phrase
        .split_whitespace()
        .find(|w| Language::English.find_word(w).is_none())
    {
        return Err(Error::mnemonic(phrase, format!("unknown word '{word}'")));
    }
    if old_mnemonic::is_old_mnemonic(phrase) {
        return Err(Error::mnemonic(phrase, "phrase is an old (V1) mnemonic"));
    }
    if !mnemonic_type.matches(phrase) {
        return Err(Error::mnemonic(
            phrase,
            format!("not a {mnemonic_type} mnemonic"),
        ));
    }
    Ok(())
}

/// Detect the type of a normalized phrase, if any.
pub fn detect(phrase: &str) -> Option<MnemonicType> {
    MnemonicType::ALL
        .into_iter()
        .find(|&t| validate(phrase, t).is_ok())
}

/// 64-byte wallet seed of a normalized phrase and passphrase.
pub fn to_seed(phrase: &str, passphrase: &str) -> Zeroizing<[u8; 64]> {
    let salt = Zeroizing::new(format!("{SEED_SALT}{passphrase}"));
    let mut seed = Zeroizing::new([0u8; 64]);
    pbkdf2_hmac::<Sha512>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut *seed);
    seed
}

fn encode(digits: &[u32]) -> String {
    let words = Language::English.word_list();
    digits
        .iter()
        .map(|&d| words[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Little-endian increment; `false` when every digit wrapped.
fn increment(digits: &mut [u32]) -> bool {
    for digit in digits.iter_mut() {
        *digit += 1;
        if *digit < RADIX {
            return true;
        }
        *digit = 0;
    }
    false
}

/// Generate a random phrase of `word_count` words carrying `mnemonic_type`.
///
/// Random entropy is read as little-endian base-2048 digits with a non-zero
/// top digit and incremented until the phrase validates.
pub fn generate(word_count: usize, mnemonic_type: MnemonicType) -> Result<Zeroizing<String>> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(Error::InvalidWordCount {
            count: word_count,
            allowed: WORD_COUNTS,
        });
    }
    let random = random_bytes::<48>();
    let mut digits = Zeroizing::new(
        random
            .chunks_exact(2)
            .take(word_count)
            .map(|c| u32::from(u16::from_le_bytes([c[0], c[1]])) % RADIX)
            .collect::<Vec<_>>(),
    );
    if let Some(top) = digits.last_mut() {
        if *top == 0 {
            *top = 1;
        }
    }
    loop {
        if !increment(&mut digits) {
            return Err(Error::Derivation("mnemonic nonce search overflowed".into()));
        }
        let phrase = Zeroizing::new(encode(&digits));
        if validate(&phrase, mnemonic_type).is_ok() {
            return Ok(phrase);
        }
    }
}
