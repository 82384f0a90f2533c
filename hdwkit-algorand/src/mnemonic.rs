//! 25-word Algorand mnemonics.
//!
//! The 32-byte private key is packed little-endian into 11-bit groups, giving
//! 24 BIP-39 English words. A 25th word carries the first 11 bits of
//! `sha512/256(key)`.

use hdwkit::hash::sha512_256;
use hdwkit::{Error, Language, Result};
use zeroize::Zeroizing;

/// Number of words in an Algorand mnemonic.
pub const WORD_COUNT: usize = 25;

const KEY_LEN: usize = 32;

/// Encode a private key as a 25-word mnemonic.
pub fn encode(key: &[u8; KEY_LEN]) -> Zeroizing<String> {
    let words = Language::English.word_list();
    let mut phrase: Vec<&str> = to_u11(key).iter().map(|&i| words[usize::from(i)]).collect();
    phrase.push(words[usize::from(checksum(key))]);
    Zeroizing::new(phrase.join(" "))
}

/// Decode a 25-word mnemonic back to the private key, verifying its checksum.
pub fn decode(phrase: &str) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != WORD_COUNT {
        return Err(Error::InvalidWordCount {
            count: words.len(),
            allowed: &[WORD_COUNT],
        });
    }

    let indices = words
        .iter()
        .map(|w| {
            Language::English
                .find_word(w)
                .ok_or_else(|| Error::mnemonic(phrase, format!("unknown word '{w}'")))
        })
        .collect::<Result<Vec<u16>>>()?;
    let (data, check) = indices.split_at(WORD_COUNT - 1);

    // 24 words hold 264 bits: the key plus one zero padding byte.
    let bytes = Zeroizing::new(from_u11(data));
    if bytes.len() != KEY_LEN + 1 || bytes[KEY_LEN] != 0 {
        return Err(Error::mnemonic(phrase, "non-zero padding bits"));
    }
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&bytes[..KEY_LEN]);

    if checksum(&key) != check[0] {
        return Err(Error::mnemonic(phrase, "checksum word mismatch"));
    }
    Ok(key)
}

fn checksum(key: &[u8; KEY_LEN]) -> u16 {
    let hash = sha512_256(key);
    to_u11(&hash[..2])[0]
}

fn to_u11(bytes: &[u8]) -> Vec<u16> {
    let mut out = Vec::with_capacity(bytes.len() * 8 / 11 + 1);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for &b in bytes {
        buffer |= u32::from(b) << bits;
        bits += 8;
        if bits >= 11 {
            out.push((buffer & 0x7ff) as u16);
            buffer >>= 11;
            bits -= 11;
        }
    }
    if bits > 0 {
        out.push((buffer & 0x7ff) as u16);
    }
    out
}

fn from_u11(groups: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(groups.len() * 11 / 8 + 1);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for &g in groups {
        buffer |= u32::from(g) << bits;
        bits += 11;
        while bits >= 8 {
            out.push((buffer & 0xff) as u8);
            buffer >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        out.push((buffer & 0xff) as u8);
    }
    out
}
