//! Monero command.

use clap::Args;
use hdwkit::encoding::hex_decode;
use hdwkit::{Error, HdWallet, Zeroizing};
use hdwkit_monero::{MoneroNetwork, MoneroParams, MoneroWalletFactory};

use crate::output::Output;
use crate::source::{Source, SourceArgs};

/// Monero wallet generation.
///
/// `--priv-key` is the private spend key. A watch-only wallet takes the
/// public spend key (`--pub-key`) together with the private view key
/// (`--view-key`).
#[derive(Args)]
pub struct MoneroCommand {
    /// Network: mainnet, stagenet or testnet.
    #[arg(long, default_value = "mainnet")]
    network: MoneroNetwork,

    #[command(flatten)]
    source: SourceArgs,

    /// Private view key, hex; required with --pub-key.
    #[arg(long = "view-key", requires = "pub_key")]
    view_key: Option<String>,

    /// Account (major index) of the subaddresses.
    #[arg(long, default_value_t = 0)]
    account: u32,

    /// Number of subaddresses; 0 derives none.
    #[arg(long = "subaddr-num", default_value_t = 0)]
    subaddr_num: u32,

    /// Minor index of the first subaddress.
    #[arg(long = "subaddr-off", default_value_t = 0)]
    subaddr_off: u32,

    /// 8-byte payment ID, hex, for an integrated address.
    #[arg(long = "payment-id")]
    payment_id: Option<String>,
}

fn parse_payment_id(text: &str) -> hdwkit::Result<[u8; 8]> {
    let bytes = hex_decode(text)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::encoding(text, "payment ID must be 8 bytes"))
}

impl MoneroCommand {
    /// Execute the Monero command.
    pub fn execute(self, out: &Output) -> Result<(), Box<dyn std::error::Error>> {
        let factory = MoneroWalletFactory::new(self.network);
        let name = &self.source.name;
        let payment_id = self.payment_id.as_deref().map(parse_payment_id).transpose()?;
        let mut wallet = match self.source.source()? {
            Source::Random => factory.create_random(name)?,
            Source::Mnemonic(phrase) => factory.create_from_mnemonic(name, &phrase)?,
            Source::Seed(seed) => factory.create_from_seed(name, &seed)?,
            Source::PrivateKey(key) => factory.create_from_private_key(name, &key)?,
            Source::PublicKey(pub_spend) => {
                let view = self
                    .view_key
                    .as_deref()
                    .ok_or_else(|| Error::unsupported("key source", "--pub-key without --view-key"))?;
                let view = Zeroizing::new(hex_decode(view)?);
                factory.create_watch_only(name, &view, &pub_spend)?
            }
            other @ Source::ExtendedKey(_) => return Err(other.unsupported("Monero").into()),
        };
        wallet.generate(&MoneroParams {
            account_idx: self.account,
            subaddr_num: self.subaddr_num,
            subaddr_off: self.subaddr_off,
            payment_id,
        })?;
        out.emit(&wallet)?;
        Ok(())
    }
}
