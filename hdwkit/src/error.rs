//! Error types shared by every wallet scheme.

use thiserror::Error;

/// Errors that can occur while building or generating a wallet.
///
/// Every invalid-argument variant carries the offending value (hex-encoded
/// for binary input) so failures can be diagnosed from the message alone.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Mnemonic failed word-list or checksum validation.
    #[error("invalid mnemonic \"{mnemonic}\": {reason}")]
    InvalidMnemonic {
        /// The rejected phrase.
        mnemonic: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Mnemonic word count is not one the scheme accepts.
    #[error("invalid word count {count}, must be one of {allowed:?}")]
    InvalidWordCount {
        /// Requested word count.
        count: usize,
        /// Word counts the scheme accepts.
        allowed: &'static [usize],
    },

    /// Mnemonic prefix is too short for unambiguous expansion.
    #[error("prefix \"{prefix}\" is too short (minimum {min_len} characters)")]
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },

    /// Mnemonic prefix does not match any word in the wordlist.
    #[error("prefix \"{0}\" does not match any word")]
    UnknownPrefix(String),

    /// Mnemonic prefix matches multiple words in the wordlist.
    #[error("prefix \"{prefix}\" is ambiguous, matches: {}", .candidates.join(", "))]
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },

    /// Seed bytes rejected by the scheme.
    #[error("invalid seed {seed}: {reason}")]
    InvalidSeed {
        /// Hex-encoded seed.
        seed: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Private key bytes rejected by the scheme.
    #[error("invalid private key {key}: {reason}")]
    InvalidPrivateKey {
        /// Hex-encoded key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Public key bytes rejected by the scheme.
    #[error("invalid public key {key}: {reason}")]
    InvalidPublicKey {
        /// Hex-encoded key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Serialized extended key could not be parsed.
    #[error("invalid extended key {key}: {reason}")]
    InvalidExtendedKey {
        /// The extended key string.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Derivation path could not be parsed or applied.
    #[error("invalid derivation path \"{path}\": {reason}")]
    InvalidPath {
        /// The path string.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A numeric generation parameter violates its bound.
    #[error("{name} out of range: {value} exceeds {max}")]
    IndexOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Value that was requested.
        value: u64,
        /// Largest value allowed.
        max: u64,
    },

    /// A combination the scheme does not define (coin, network, mnemonic type).
    #[error("{what} is not supported: {value}")]
    Unsupported {
        /// What was requested.
        what: &'static str,
        /// The requested value.
        value: String,
    },

    /// Text could not be decoded (base58, bech32, base32, hex).
    #[error("invalid encoding \"{input}\": {reason}")]
    InvalidEncoding {
        /// The text that failed to decode.
        input: String,
        /// Decoder message.
        reason: String,
    },

    /// Child derivation failed for a reason other than bad input.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// Writing a wallet to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wallet serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Invalid mnemonic with a reason.
    pub fn mnemonic(mnemonic: &str, reason: impl ToString) -> Self {
        Self::InvalidMnemonic {
            mnemonic: mnemonic.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Invalid seed bytes with a reason.
    pub fn seed(seed: &[u8], reason: impl ToString) -> Self {
        Self::InvalidSeed {
            seed: hex::encode(seed),
            reason: reason.to_string(),
        }
    }

    /// Invalid private key bytes with a reason.
    pub fn private_key(key: &[u8], reason: impl ToString) -> Self {
        Self::InvalidPrivateKey {
            key: hex::encode(key),
            reason: reason.to_string(),
        }
    }

    /// Invalid public key bytes with a reason.
    pub fn public_key(key: &[u8], reason: impl ToString) -> Self {
        Self::InvalidPublicKey {
            key: hex::encode(key),
            reason: reason.to_string(),
        }
    }

    /// Invalid extended key string with a reason.
    pub fn extended_key(key: &str, reason: impl ToString) -> Self {
        Self::InvalidExtendedKey {
            key: key.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Invalid derivation path with a reason.
    pub fn path(path: &str, reason: impl ToString) -> Self {
        Self::InvalidPath {
            path: path.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Undecodable text with a reason.
    pub fn encoding(input: &str, reason: impl ToString) -> Self {
        Self::InvalidEncoding {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// Unsupported value for the given subject.
    pub fn unsupported(what: &'static str, value: impl ToString) -> Self {
        Self::Unsupported {
            what,
            value: value.to_string(),
        }
    }
}

/// A convenient Result type alias for hdwkit operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_input_is_hex_encoded() {
        let err = Error::seed(&[0xde, 0xad], "too short");
        assert_eq!(err.to_string(), "invalid seed dead: too short");
    }

    #[test]
    fn ambiguous_prefix_lists_candidates() {
        let err = Error::AmbiguousPrefix {
            prefix: "ab".into(),
            candidates: vec!["abandon".into(), "ability".into()],
        };
        assert_eq!(
            err.to_string(),
            "prefix \"ab\" is ambiguous, matches: abandon, ability"
        );
    }

    #[test]
    fn out_of_range_names_bound() {
        let err = Error::IndexOutOfRange {
            name: "address offset + number",
            value: 4_294_967_296,
            max: u64::from(u32::MAX),
        };
        assert!(err.to_string().contains("exceeds 4294967295"));
    }
}
