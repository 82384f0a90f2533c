//! Cardano Shelley command.

use clap::Args;
use hdwkit::{HdWallet, WordCount};
use hdwkit_cardano::{CardanoCoin, CardanoParams, CardanoWalletFactory};

use super::RangeArgs;
use crate::output::Output;
use crate::source::{CliLanguage, Source, SourceArgs, expand_mnemonic};

/// Cardano Shelley wallet generation.
#[derive(Args)]
pub struct CardanoCommand {
    /// Master key style and network: icarus, icarus-testnet, ledger, ledger-testnet.
    #[arg(short, long, default_value = "icarus")]
    coin: CardanoCoin,

    #[command(flatten)]
    source: SourceArgs,

    /// Mnemonic passphrase.
    #[arg(short, long, env = "HDWKIT_PASSPHRASE")]
    passphrase: Option<String>,

    /// Words of a random mnemonic; 15 for Icarus and 24 for Ledger when omitted.
    #[arg(short, long)]
    words: Option<WordCount>,

    /// Wordlist of a random mnemonic, and of abbreviated `--mnemonic` words.
    #[arg(long, value_enum, default_value = "english")]
    lang: CliLanguage,

    #[command(flatten)]
    range: RangeArgs,
}

impl CardanoCommand {
    /// Execute the Cardano command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = CardanoWalletFactory::new(self.coin);
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
        wallet.generate(&CardanoParams {
            account_idx: self.range.account,
            change: self.range.change,
            addr_num: self.range.addr_num,
            addr_off: self.range.addr_off,
        })?;
        out.emit(&wallet)?;
        Ok(())
    }
}
