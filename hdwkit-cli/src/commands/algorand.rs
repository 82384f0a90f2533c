//! Algorand command.

use clap::Args;
use hdwkit::HdWallet;
use hdwkit_algorand::{AlgorandParams, AlgorandWalletFactory};

use crate::output::Output;
use crate::source::{Source, SourceArgs};

/// Algorand wallet generation.
#[derive(Args)]
pub struct AlgorandCommand {
    #[command(flatten)]
    source: SourceArgs,
}

impl AlgorandCommand {
    /// Execute the Algorand command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = AlgorandWalletFactory::new();
        let name = &self.source.name;
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name)?,
            Source::Mnemonic(phrase) => factory.create_from_mnemonic(name, &phrase)?,
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(key) => factory.create_from_public_key(name, &key)?,
            other @ Source::ExtendedKey(_) => return Err(other.unsupported("Algorand").into()),
        };
        wallet.generate(&AlgorandParams)?;
        out.emit(&wallet)?;
        Ok(())
    }
}
