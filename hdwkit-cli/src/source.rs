//! Key source options shared by every subcommand.

use clap::{Args, ValueEnum};
use hdwkit::encoding::hex_decode;
use hdwkit::{Error, Language, Zeroizing, mnemonic};

/// Where the wallet comes from. Without any of these a random wallet is made.
#[derive(Args)]
pub struct SourceArgs {
    /// Wallet name written into the output.
    #[arg(short, long, default_value = "my_wallet")]
    pub name: String,

    /// Mnemonic phrase.
    #[arg(short, long, group = "source")]
    mnemonic: Option<String>,

    /// Seed bytes, hex.
    #[arg(long, group = "source")]
    seed: Option<String>,

    /// Serialized extended key.
    #[arg(long = "ex-key", group = "source")]
    ex_key: Option<String>,

    /// Raw private key, hex.
    #[arg(long = "priv-key", group = "source")]
    priv_key: Option<String>,

    /// Raw public key, hex. Builds a watch-only wallet.
    #[arg(long = "pub-key", group = "source")]
    pub_key: Option<String>,
}

/// A decoded key source.
pub enum Source {
    Random,
    Mnemonic(Zeroizing<String>),
    Seed(Zeroizing<Vec<u8>>),
    ExtendedKey(Zeroizing<String>),
    PrivateKey(Zeroizing<Vec<u8>>),
    PublicKey(Vec<u8>),
}

impl Source {
    /// Flag name, for error messages.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Mnemonic(_) => "--mnemonic",
            Self::Seed(_) => "--seed",
            Self::ExtendedKey(_) => "--ex-key",
            Self::PrivateKey(_) => "--priv-key",
            Self::PublicKey(_) => "--pub-key",
        }
    }

    /// Error for a source the scheme cannot start from.
    pub fn unsupported(&self, scheme: &str) -> Error {
        Error::unsupported("key source", format!("{} for {scheme}", self.flag()))
    }
}

impl SourceArgs {
    /// Decode the selected source; hex inputs may carry a `0x` prefix.
    pub fn source(&self) -> hdwkit::Result<Source> {
        if let Some(phrase) = &self.mnemonic {
            return Ok(Source::Mnemonic(Zeroizing::new(phrase.clone())));
        }
        if let Some(seed) = &self.seed {
            return Ok(Source::Seed(Zeroizing::new(hex_decode(seed)?)));
        }
        if let Some(key) = &self.ex_key {
            return Ok(Source::ExtendedKey(Zeroizing::new(key.clone())));
        }
        if let Some(key) = &self.priv_key {
            return Ok(Source::PrivateKey(Zeroizing::new(hex_decode(key)?)));
        }
        if let Some(key) = &self.pub_key {
            return Ok(Source::PublicKey(hex_decode(key)?));
        }
        Ok(Source::Random)
    }
}

/// Spell out abbreviated BIP-39 words, e.g. `aban` for `abandon`.
pub fn expand_mnemonic(phrase: &str, lang: CliLanguage) -> hdwkit::Result<Zeroizing<String>> {
    mnemonic::expand_in(lang.into(), phrase).map(Zeroizing::new)
}

/// BIP-39 wordlist language.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum CliLanguage {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Spanish,
}

impl From<CliLanguage> for Language {
    fn from(val: CliLanguage) -> Self {
        match val {
            CliLanguage::English => Self::English,
            CliLanguage::ChineseSimplified => Self::SimplifiedChinese,
            CliLanguage::ChineseTraditional => Self::TraditionalChinese,
            CliLanguage::Czech => Self::Czech,
            CliLanguage::French => Self::French,
            CliLanguage::Italian => Self::Italian,
            CliLanguage::Japanese => Self::Japanese,
            CliLanguage::Korean => Self::Korean,
            CliLanguage::Portuguese => Self::Portuguese,
            CliLanguage::Spanish => Self::Spanish,
        }
    }
}
