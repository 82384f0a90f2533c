//! Mnemonic helpers shared by the BIP-39 based schemes.
//!
//! # Prefix Expansion
//!
//! Wordlists are designed so that every word is uniquely identified by a
//! short prefix (4 characters for BIP-39, 3 for Monero). [`expand_in`] and
//! [`expand_with`] let users type abbreviated words and have them expanded
//! to full words before validation.
//!
//! ```
//! use hdwkit::{Language, mnemonic};
//!
//! let expanded = mnemonic::expand_in(Language::English, "aban aban aban aban aban aban aban aban aban aban aban abou").unwrap();
//! assert_eq!(
//!     expanded,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! ```

use core::fmt;
use core::str::FromStr;

use bip39::{Language, Mnemonic};

use crate::{Error, Result};

/// Minimum prefix length required for unambiguous BIP-39 word expansion.
pub const BIP39_PREFIX_LEN: usize = 4;

/// Number of words in a BIP-39 mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordCount {
    /// 12 words, 128 bits of entropy.
    #[default]
    Words12,
    /// 15 words, 160 bits of entropy.
    Words15,
    /// 18 words, 192 bits of entropy.
    Words18,
    /// 21 words, 224 bits of entropy.
    Words21,
    /// 24 words, 256 bits of entropy.
    Words24,
}

impl WordCount {
    /// Every BIP-39 word count, in increasing order.
    pub const ALL: [Self; 5] = [
        Self::Words12,
        Self::Words15,
        Self::Words18,
        Self::Words21,
        Self::Words24,
    ];

    /// Word counts as plain numbers, for error messages.
    pub const VALUES: &'static [usize] = &[12, 15, 18, 21, 24];

    /// Number of words.
    pub const fn count(self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words15 => 15,
            Self::Words18 => 18,
            Self::Words21 => 21,
            Self::Words24 => 24,
        }
    }

    /// Look up a word count by number.
    pub fn from_count(count: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.count() == count)
            .ok_or(Error::InvalidWordCount {
                count,
                allowed: Self::VALUES,
            })
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Error returned when parsing an invalid word count string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWordCountError(String);

impl fmt::Display for ParseWordCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid word count '{}', expected one of: 12, 15, 18, 21, 24",
            self.0
        )
    }
}

impl std::error::Error for ParseWordCountError {}

impl FromStr for WordCount {
    type Err = ParseWordCountError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| Self::from_count(n).ok())
            .ok_or_else(|| ParseWordCountError(s.to_owned()))
    }
}

/// Generate a random BIP-39 mnemonic.
pub fn generate(word_count: WordCount, language: Language) -> Result<Mnemonic> {
    Mnemonic::generate_in(language, word_count.count())
        .map_err(|e| Error::Derivation(format!("mnemonic generation: {e}")))
}

/// Parse and validate a BIP-39 mnemonic in the given language.
pub fn parse(language: Language, phrase: &str) -> Result<Mnemonic> {
    Mnemonic::parse_in(language, phrase).map_err(|e| Error::mnemonic(phrase, e))
}

/// Parse a BIP-39 mnemonic, detecting its language.
pub fn parse_any(phrase: &str) -> Result<Mnemonic> {
    Mnemonic::parse(phrase).map_err(|e| Error::mnemonic(phrase, e))
}

/// Normalize a phrase: lowercase, single spaces between words.
pub fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand abbreviated words using the specified BIP-39 wordlist.
///
/// Each whitespace-separated token is matched against the wordlist:
/// - If the token is an exact match, it is kept as-is.
/// - If the token is a prefix (>= 4 characters) that uniquely identifies
///   a single word, it is expanded to that word.
/// - Otherwise, an error is returned.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand_in(language: Language, phrase: &str) -> Result<String> {
    expand_with(language.word_list(), BIP39_PREFIX_LEN, phrase)
}

/// Expand abbreviated words against an arbitrary wordlist.
pub fn expand_with(word_list: &[&str], min_prefix: usize, phrase: &str) -> Result<String> {
    let phrase = normalize(phrase);
    let words = phrase
        .split_whitespace()
        .map(|token| resolve_token(word_list, min_prefix, token))
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(" "))
}

/// Resolve a single token against the wordlist.
///
/// Returns the full word if the token is an exact match or a unique prefix.
fn resolve_token<'a>(word_list: &[&'a str], min_prefix: usize, token: &str) -> Result<&'a str> {
    if let Some(word) = word_list.iter().copied().find(|w| *w == token) {
        return Ok(word);
    }

    if token.chars().count() < min_prefix {
        return Err(Error::PrefixTooShort {
            prefix: token.to_owned(),
            min_len: min_prefix,
        });
    }

    let matches: Vec<&'a str> = word_list
        .iter()
        .copied()
        .filter(|word| word.starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Err(Error::UnknownPrefix(token.to_owned())),
        [word] => Ok(*word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.to_owned(),
            candidates: matches.iter().map(|w| (*w).to_owned()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn four_letter_prefix_expansion() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
        assert_eq!(expand_in(Language::English, abbreviated).unwrap(), FULL_12);
    }

    #[test]
    fn full_words_unchanged() {
        assert_eq!(expand_in(Language::English, FULL_12).unwrap(), FULL_12);
        assert_eq!(
            expand_in(Language::English, &FULL_12.to_uppercase()).unwrap(),
            FULL_12
        );
    }

    #[test]
    fn prefix_too_short_rejected() {
        let result = expand_in(Language::English, "aba aba aba");
        assert!(matches!(result, Err(Error::PrefixTooShort { .. })));
    }

    #[test]
    fn unknown_prefix_rejected() {
        let result = expand_in(Language::English, "aban zzzz");
        assert!(matches!(result, Err(Error::UnknownPrefix(_))));
    }

    #[test]
    fn ambiguous_prefix_on_custom_list() {
        let list = ["stack", "stadium", "stamp"];
        let result = expand_with(&list, 2, "sta");
        assert!(matches!(result, Err(Error::AmbiguousPrefix { .. })));
        assert_eq!(expand_with(&list, 2, "stad stam").unwrap(), "stadium stamp");
    }

    #[test]
    fn word_count_parse() {
        assert_eq!("24".parse::<WordCount>().unwrap(), WordCount::Words24);
        assert!("13".parse::<WordCount>().is_err());
        assert!(matches!(
            WordCount::from_count(11),
            Err(Error::InvalidWordCount { count: 11, .. })
        ));
    }

    #[test]
    fn generated_mnemonic_has_requested_length() {
        let m = generate(WordCount::Words15, Language::English).unwrap();
        assert_eq!(m.word_count(), 15);
    }

    #[test]
    fn parse_reports_phrase() {
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        let err = parse(Language::English, bad).unwrap_err();
        assert!(err.to_string().contains(bad));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Abandon\tABOUT  "), "abandon about");
    }
}
