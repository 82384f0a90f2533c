//! Substrate command.

use clap::Args;
use hdwkit::{HdWallet, WordCount};
use hdwkit_substrate::{SubstrateCoin, SubstrateParams, SubstrateWalletFactory};

use crate::output::Output;
use crate::source::{CliLanguage, Source, SourceArgs, expand_mnemonic};

/// Substrate sr25519 wallet generation.
#[derive(Args)]
pub struct SubstrateCommand {
    /// Network: polkadot, kusama, acala or substrate.
    #[arg(short, long, default_value = "polkadot")]
    coin: SubstrateCoin,

    #[command(flatten)]
    source: SourceArgs,

    /// Mnemonic passphrase.
    #[arg(short, long, env = "HDWKIT_PASSPHRASE")]
    passphrase: Option<String>,

    /// Words of a random mnemonic (12, 15, 18, 21 or 24).
    #[arg(short, long, default_value = "12")]
    words: WordCount,

    /// Wordlist of a random mnemonic, and of abbreviated `--mnemonic` words.
    #[arg(long, value_enum, default_value = "english")]
    lang: CliLanguage,

    /// Derivation path, e.g. `//Alice` or `//hard/soft`.
    #[arg(long, default_value = "")]
    path: String,
}

impl SubstrateCommand {
    /// Execute the Substrate command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = SubstrateWalletFactory::new(self.coin);
        let name = &self.source.name;
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name, self.words, self.lang.into())?,
            Source::Mnemonic(phrase) => {
                let phrase = expand_mnemonic(&phrase, self.lang)?;
                factory.create_from_mnemonic(name, &phrase, self.passphrase.as_deref())?
            }
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(key) => factory.create_from_public_key(name, &key)?,
            other @ Source::ExtendedKey(_) => return Err(other.unsupported("Substrate").into()),
        };
        wallet.generate(&SubstrateParams::with_path(self.path))?;
        out.emit(&wallet)?;
        Ok(())
    }
}
