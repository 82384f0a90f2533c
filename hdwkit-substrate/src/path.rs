//! `//hard/soft` derivation paths.

use hdwkit::hash::blake2b_256;
use hdwkit::{Error, Result};

/// Junction chain codes are always 32 bytes.
pub const JUNCTION_LEN: usize = 32;

/// One step of a Substrate derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junction {
    chain_code: [u8; JUNCTION_LEN],
    hard: bool,
}

impl Junction {
    /// Build a junction from its text, encoded the way Substrate does.
    ///
    /// Numeric text encodes as a little-endian `u64`, anything else as a
    /// SCALE string; encodings longer than 32 bytes are hashed with
    /// blake2b-256, shorter ones are zero-padded.
    pub fn new(text: &str, hard: bool) -> Self {
        let encoded = match text.parse::<u64>() {
            Ok(n) => n.to_le_bytes().to_vec(),
            Err(_) => {
                let mut out = compact_len(text.len());
                out.extend_from_slice(text.as_bytes());
                out
            }
        };

        let mut chain_code = [0u8; JUNCTION_LEN];
        if encoded.len() > JUNCTION_LEN {
            chain_code = blake2b_256(&encoded);
        } else {
            chain_code[..encoded.len()].copy_from_slice(&encoded);
        }
        Self { chain_code, hard }
    }

    /// The 32-byte chain code fed to the derivation.
    pub fn chain_code(&self) -> [u8; JUNCTION_LEN] {
        self.chain_code
    }

    /// Hard (`//`) or soft (`/`).
    pub fn is_hard(&self) -> bool {
        self.hard
    }
}

/// Parse a path such as `//polkadot//0/wallet` into junctions.
///
/// The empty path has no junctions. Passwords (`///`) are not accepted.
pub fn parse(path: &str) -> Result<Vec<Junction>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let Some(body) = path.strip_prefix('/') else {
        return Err(Error::path(path, "must start with '/'"));
    };

    let mut junctions = Vec::new();
    let mut rest = body;
    loop {
        let (hard, text) = match rest.strip_prefix('/') {
            Some(hard_text) => (true, hard_text),
            None => (false, rest),
        };
        let (segment, next) = match text.find('/') {
            Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
            None => (text, None),
        };
        if segment.is_empty() {
            return Err(Error::path(path, "empty junction"));
        }
        junctions.push(Junction::new(segment, hard));
        match next {
            Some(n) => rest = n,
            None => break,
        }
    }
    Ok(junctions)
}

/// SCALE compact encoding of a length.
fn compact_len(len: usize) -> Vec<u8> {
    let n = len as u64;
    match n {
        0..=0x3f => vec![(n as u8) << 2],
        0x40..=0x3fff => (((n as u16) << 2) | 0b01).to_le_bytes().to_vec(),
        0x4000..=0x3fff_ffff => (((n as u32) << 2) | 0b10).to_le_bytes().to_vec(),
        _ => {
            let bytes = n.to_le_bytes();
            let used = 8 - n.leading_zeros() as usize / 8;
            let mut out = vec![(((used - 4) as u8) << 2) | 0b11];
            out.extend_from_slice(&bytes[..used]);
            out
        }
    }
}
