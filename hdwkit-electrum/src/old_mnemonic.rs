//! Electrum 1.x "old" mnemonics.
//!
//! Every 3 words encode one 32-bit big-endian chunk of the seed over a
//! 1626-word list: `x = w1 + n·((w2 − w1) mod n) + n²·((w3 − w2) mod n)`.

use std::sync::OnceLock;

use hdwkit::{Error, Result};

const WORDLIST_TEXT: &str = include_str!("wordlist/old.txt");

/// Number of words in the old wordlist.
pub const WORDLIST_LEN: usize = 1626;

/// The 1626 words, in list order.
pub fn word_list() -> &'static [&'static str] {
    static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| WORDLIST_TEXT.split_whitespace().collect())
}

fn find_word(word: &str) -> Option<usize> {
    word_list().iter().position(|w| *w == word)
}

/// Encode seed bytes (a multiple of 4) as old words.
pub fn encode(seed: &[u8]) -> Result<String> {
    if seed.is_empty() || seed.len() % 4 != 0 {
        return Err(Error::seed(seed, "length must be a non-zero multiple of 4"));
    }
    let words = word_list();
    let n = WORDLIST_LEN as u64;
    let mut out = Vec::with_capacity(seed.len() / 4 * 3);
    for chunk in seed.chunks_exact(4) {
        let x = u64::from(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        let w1 = x % n;
        let w2 = (x / n + w1) % n;
        let w3 = (x / n / n + w2) % n;
        out.extend([w1, w2, w3].map(|w| words[w as usize]));
    }
    Ok(out.join(" "))
}

/// Decode an old mnemonic (a multiple of 3 words) to seed bytes.
pub fn decode(phrase: &str) -> Result<Vec<u8>> {
    let tokens: Vec<&str> = phrase.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() % 3 != 0 {
        return Err(Error::mnemonic(
            phrase,
            format!("{} words is not a multiple of 3", tokens.len()),
        ));
    }
    let indices = tokens
        .iter()
        .map(|w| {
            find_word(w)
                .map(|i| i as u64)
                .ok_or_else(|| Error::mnemonic(phrase, format!("unknown word '{w}'")))
        })
        .collect::<Result<Vec<u64>>>()?;

    let n = WORDLIST_LEN as u64;
    let mut seed = Vec::with_capacity(tokens.len() / 3 * 4);
    for triple in indices.chunks_exact(3) {
        let (w1, w2, w3) = (triple[0], triple[1], triple[2]);
        let x = w1 + n * ((w2 + n - w1) % n) + n * n * ((w3 + n - w2) % n);
        let chunk = u32::try_from(x)
            .map_err(|_| Error::mnemonic(phrase, "word triple exceeds 32 bits"))?;
        seed.extend_from_slice(&chunk.to_be_bytes());
    }
    Ok(seed)
}

/// Whether `phrase` is a 12 or 24-word old mnemonic.
pub fn is_old_mnemonic(phrase: &str) -> bool {
    let count = phrase.split_whitespace().count();
    (count == 12 || count == 24) && decode(phrase).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const PHRASE: &str = "powerful random nobody notice nothing important anyway look away hidden message over";
    const SEED: [u8; 16] = hex!("acb740e454c3134901d7c8f16497cc1c");

    #[test]
    fn wordlist_size() {
        assert_eq!(word_list().len(), WORDLIST_LEN);
    }

    #[test]
    fn decodes_known_phrase() {
        assert_eq!(decode(PHRASE).unwrap(), SEED);
    }

    #[test]
    fn encodes_known_seed() {
        assert_eq!(encode(&SEED).unwrap(), PHRASE);
    }

    #[test]
    fn detects_old_mnemonics() {
        assert!(is_old_mnemonic(PHRASE));
        assert!(!is_old_mnemonic("powerful random nobody"));
        assert!(!is_old_mnemonic(
            "cycle rocket west magnet parrot shuffle foot correct salt library feed song"
        ));
    }

    #[test]
    fn rejects_bad_word_counts() {
        assert!(matches!(
            decode("powerful random"),
            Err(Error::InvalidMnemonic { .. })
        ));
        assert!(encode(&[1, 2, 3]).is_err());
    }
}
