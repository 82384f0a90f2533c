//! BIP-44/49/84/86 command.

use clap::Args;
use hdwkit::{HdWallet, WordCount};
use hdwkit_bip::{Bip, BipParams, BipWalletFactory, Coin};

use super::RangeArgs;
use crate::output::Output;
use crate::source::{CliLanguage, Source, SourceArgs, expand_mnemonic};

/// BIP-44/49/84/86 wallet generation.
#[derive(Args)]
pub struct BipCommand {
    /// Purpose scheme: bip44, bip49, bip84 or bip86.
    #[arg(long, default_value = "bip44")]
    scheme: Bip,

    /// Coin, e.g. bitcoin, litecoin, ethereum, solana.
    #[arg(short, long, default_value = "bitcoin")]
    coin: Coin,

    #[command(flatten)]
    source: SourceArgs,

    /// BIP-39 passphrase.
    #[arg(short, long, env = "HDWKIT_PASSPHRASE")]
    passphrase: Option<String>,

    /// Words of a random mnemonic (12, 15, 18, 21 or 24).
    #[arg(short, long, default_value = "12")]
    words: WordCount,

    /// Wordlist of a random mnemonic, and of abbreviated `--mnemonic` words.
    #[arg(long, value_enum, default_value = "english")]
    lang: CliLanguage,

    #[command(flatten)]
    range: RangeArgs,
}

impl BipCommand {
    /// Execute the BIP command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = BipWalletFactory::new(self.scheme, self.coin)?;
        let name = &self.source.name;
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name, self.words, self.lang.into())?,
            Source::Mnemonic(phrase) => {
                let phrase = expand_mnemonic(&phrase, self.lang)?;
                factory.create_from_mnemonic(name, &phrase, self.passphrase.as_deref())?
            }
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::ExtendedKey(key) => factory.create_from_extended_key(name, &key)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(key) => factory.create_from_public_key(name, &key)?,
        };
        wallet.generate(&BipParams {
            account_idx: self.range.account,
            change: self.range.change,
            addr_num: self.range.addr_num,
            addr_off: self.range.addr_off,
        })?;
        out.emit(&wallet)?;
        Ok(())
    }
}
