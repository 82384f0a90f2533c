//! Monero 1626-word mnemonics.
//!
//! Seeds are split into 4-byte little-endian chunks, each spelled with three
//! words. A checksum word, chosen by the CRC-32 of the words' three-letter
//! prefixes, is appended. 25 words carry a 32-byte seed and 13 words a
//! 16-byte (MyMonero) seed; 24 and 12-word phrases without checksum are
//! accepted as well.

use std::collections::HashMap;
use std::sync::OnceLock;

use hdwkit::{Error, Result};
use zeroize::Zeroizing;

const WORDLIST_TEXT: &str = include_str!("wordlist/english.txt");
const PREFIX_LEN: usize = 3;

/// Number of words in the list.
pub const WORDLIST_LEN: usize = 1626;

/// Word counts [`decode`] accepts.
pub const WORD_COUNTS: &[usize] = &[12, 13, 24, 25];

/// The English list, in order.
pub fn word_list() -> &'static [&'static str] {
    static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| WORDLIST_TEXT.split_whitespace().collect())
}

fn prefix(word: &str) -> &str {
    word.char_indices()
        .nth(PREFIX_LEN)
        .map_or(word, |(end, _)| &word[..end])
}

fn prefix_index() -> &'static HashMap<&'static str, usize> {
    static INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        word_list()
            .iter()
            .enumerate()
            .map(|(i, w)| (prefix(w), i))
            .collect()
    })
}

/// Index of `word`, matched on its three-letter prefix.
pub fn find_word(word: &str) -> Option<usize> {
    prefix_index().get(prefix(word)).copied()
}

fn checksum_index<S: AsRef<str>>(words: &[S]) -> usize {
    let mut hasher = crc32fast::Hasher::new();
    for word in words {
        hasher.update(prefix(word.as_ref()).as_bytes());
    }
    hasher.finalize() as usize % words.len()
}

/// Spell a 16 or 32-byte seed, checksum word included.
pub fn encode(seed: &[u8]) -> Result<Zeroizing<String>> {
    if seed.len() != 16 && seed.len() != 32 {
        return Err(Error::seed(seed, format!("expected 16 or 32 bytes, got {}", seed.len())));
    }
    let list = word_list();
    let n = WORDLIST_LEN as u64;
    let mut words = Vec::with_capacity(seed.len() / 4 * 3 + 1);
    for chunk in seed.chunks_exact(4) {
        let x = u64::from(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        let w1 = x % n;
        let w2 = (x / n + w1) % n;
        let w3 = (x / n / n + w2) % n;
        words.extend([w1, w2, w3].map(|w| list[w as usize]));
    }
    words.push(words[checksum_index(words.as_slice())]);
    Ok(Zeroizing::new(words.join(" ")))
}

/// Decode a phrase back to its seed, verifying the checksum word if present.
pub fn decode(phrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    if !WORD_COUNTS.contains(&tokens.len()) {
        return Err(Error::InvalidWordCount {
            count: tokens.len(),
            allowed: WORD_COUNTS,
        });
    }
    let (data, checksum) = if tokens.len() % 3 == 1 {
        let (data, last) = tokens.split_at(tokens.len() - 1);
        (data, last.first().copied())
    } else {
        (&tokens[..], None)
    };

    let indices = data
        .iter()
        .map(|w| {
            find_word(w)
                .map(|i| i as u64)
                .ok_or_else(|| Error::mnemonic(phrase, format!("unknown word '{w}'")))
        })
        .collect::<Result<Vec<u64>>>()?;

    let n = WORDLIST_LEN as u64;
    let mut seed = Zeroizing::new(Vec::with_capacity(data.len() / 3 * 4));
    for triple in indices.chunks_exact(3) {
        let (w1, w2, w3) = (triple[0], triple[1], triple[2]);
        let x = w1 + n * ((w2 + n - w1) % n) + n * n * ((w3 + n - w2) % n);
        let chunk = u32::try_from(x)
            .map_err(|_| Error::mnemonic(phrase, "word triple exceeds 32 bits"))?;
        seed.extend_from_slice(&chunk.to_le_bytes());
    }

    if let Some(word) = checksum {
        let expected = data[checksum_index(data)];
        if prefix(expected) != prefix(word) {
            return Err(Error::mnemonic(phrase, "checksum word mismatch"));
        }
    }
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const SPEND: [u8; 32] = hex!("8163466f1883598e6dd14027b8da727057165da91485834314f5500a65846f09");
    const PHRASE: &str = "bowling eggs popular reruns afoot nineteen amply bygones fences ignore width imbalance evolved zodiac pinched adapt jagged railway unopened haggled idiom maximum hydrogen jargon reruns";

    #[test]
    fn wordlist_has_unique_prefixes() {
        assert_eq!(word_list().len(), WORDLIST_LEN);
        assert_eq!(prefix_index().len(), WORDLIST_LEN);
        assert!(word_list().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(word_list()[0], "abbey");
        assert_eq!(word_list()[1625], "zoom");
    }

    #[test]
    fn encodes_and_decodes_known_seed() {
        assert_eq!(encode(&SPEND).unwrap().as_str(), PHRASE);
        assert_eq!(decode(PHRASE).unwrap().as_slice(), SPEND);
    }

    #[test]
    fn prefixes_are_enough() {
        let short: Vec<String> = PHRASE.split(' ').map(|w| prefix(w).to_owned()).collect();
        assert_eq!(decode(&short.join(" ")).unwrap().as_slice(), SPEND);
    }

    #[test]
    fn checksum_is_optional_but_verified() {
        let words: Vec<&str> = PHRASE.split(' ').collect();
        assert_eq!(decode(&words[..24].join(" ")).unwrap().as_slice(), SPEND);

        let mut wrong = words.clone();
        wrong[24] = if words[24] == "bowling" { "eggs" } else { "bowling" };
        assert!(matches!(
            decode(&wrong.join(" ")),
            Err(Error::InvalidMnemonic { .. })
        ));
    }

    #[test]
    fn short_seeds_use_thirteen_words() {
        let seed = [0x5au8; 16];
        let phrase = encode(&seed).unwrap();
        assert_eq!(phrase.split(' ').count(), 13);
        assert_eq!(decode(&phrase).unwrap().as_slice(), seed);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            decode("bowling eggs popular"),
            Err(Error::InvalidWordCount { count: 3, .. })
        ));
        let unknown = PHRASE.replacen("bowling", "qqqq", 1);
        assert!(matches!(decode(&unknown), Err(Error::InvalidMnemonic { .. })));
        assert!(encode(&[0u8; 20]).is_err());
    }
}
