//! Electrum V1 and V2 commands.

use clap::Args;
use hdwkit::HdWallet;
use hdwkit_electrum::{
    ElectrumParams, ElectrumV1WalletFactory, ElectrumV2WalletFactory, MnemonicType,
};

use crate::output::Output;
use crate::source::{Source, SourceArgs};

/// Change chain and address range of Electrum wallets.
#[derive(Args)]
struct ElectrumRangeArgs {
    /// Change chain index (0 receiving, 1 change).
    #[arg(long = "change-idx", default_value_t = 0)]
    change_idx: u32,

    /// Number of addresses to derive.
    #[arg(long = "addr-num", default_value_t = 20)]
    addr_num: u32,

    /// Index of the first address.
    #[arg(long = "addr-off", default_value_t = 0)]
    addr_off: u32,
}

impl ElectrumRangeArgs {
    fn params(&self) -> ElectrumParams {
        ElectrumParams {
            change_idx: self.change_idx,
            addr_num: self.addr_num,
            addr_off: self.addr_off,
        }
    }
}

/// Electrum old-seed wallet generation.
#[derive(Args)]
pub struct ElectrumV1Command {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    range: ElectrumRangeArgs,
}

impl ElectrumV1Command {
    /// Execute the Electrum V1 command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = ElectrumV1WalletFactory::new();
        let name = &self.source.name;
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name)?,
            Source::Mnemonic(phrase) => factory.create_from_mnemonic(name, &phrase)?,
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(key) => factory.create_from_public_key(name, &key)?,
            other @ Source::ExtendedKey(_) => return Err(other.unsupported("Electrum V1").into()),
        };
        wallet.generate(&self.range.params())?;
        out.emit(&wallet)?;
        Ok(())
    }
}

/// Electrum V2 wallet generation.
#[derive(Args)]
pub struct ElectrumV2Command {
    /// Mnemonic type: standard or segwit.
    #[arg(short = 't', long = "type", default_value = "standard")]
    mnemonic_type: MnemonicType,

    #[command(flatten)]
    source: SourceArgs,

    /// Seed extension.
    #[arg(short, long, env = "HDWKIT_PASSPHRASE")]
    passphrase: Option<String>,

    /// Words of a random mnemonic (12 or 24).
    #[arg(short, long, default_value_t = 12)]
    words: usize,

    #[command(flatten)]
    range: ElectrumRangeArgs,
}

impl ElectrumV2Command {
    /// Execute the Electrum V2 command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = ElectrumV2WalletFactory::new(self.mnemonic_type);
        let name = &self.source.name;
        let passphrase = self.passphrase.as_deref();
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name, self.words, passphrase)?,
            Source::Mnemonic(phrase) => factory.create_from_mnemonic(name, &phrase, passphrase)?,
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::ExtendedKey(key) => factory.create_from_extended_key(name, &key)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(key) => factory.create_from_public_key(name, &key)?,
        };
        wallet.generate(&self.range.params())?;
        out.emit(&wallet)?;
        Ok(())
    }
}
