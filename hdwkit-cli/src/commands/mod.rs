//! CLI command definitions and handlers.

mod algorand;
mod bip;
mod cardano;
mod electrum;
mod monero;
mod substrate;

use std::path::PathBuf;

pub use algorand::AlgorandCommand;
pub use bip::BipCommand;
pub use cardano::CardanoCommand;
use clap::{Args, Parser, Subcommand};
pub use electrum::{ElectrumV1Command, ElectrumV2Command};
use hdwkit::Chain;
pub use monero::MoneroCommand;
pub use substrate::SubstrateCommand;

/// hdwkit - generate HD wallets and print them as JSON.
#[derive(Parser)]
#[command(name = "hdwkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON indentation; 0 prints one line.
    #[arg(long, global = true, default_value_t = 2)]
    pub indent: usize,

    /// Also save the wallet JSON to this file (overwritten if present).
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Log derivation steps to stderr (overrides HDWKIT_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available wallet schemes.
#[derive(Subcommand)]
pub enum Commands {
    /// BIP-44/49/84/86 wallets.
    Bip(BipCommand),

    /// Cardano Shelley (CIP-1852) wallets.
    #[command(alias = "ada")]
    Cardano(CardanoCommand),

    /// Electrum old-seed (V1) wallets.
    #[command(name = "electrum-v1")]
    ElectrumV1(ElectrumV1Command),

    /// Electrum standard and segwit (V2) wallets.
    #[command(name = "electrum-v2", alias = "electrum")]
    ElectrumV2(ElectrumV2Command),

    /// Monero wallets with subaddresses.
    #[command(alias = "xmr")]
    Monero(MoneroCommand),

    /// Substrate sr25519 wallets (Polkadot, Kusama, ...).
    #[command(alias = "dot")]
    Substrate(SubstrateCommand),

    /// Algorand wallets.
    #[command(alias = "algo")]
    Algorand(AlgorandCommand),
}

/// Account, chain and address range of BIP-style walks.
#[derive(Args)]
pub struct RangeArgs {
    /// Account index (hardened).
    #[arg(long, default_value_t = 0)]
    pub account: u32,

    /// Change chain: external (0) or internal (1).
    #[arg(long, default_value = "external")]
    pub change: Chain,

    /// Number of addresses to derive.
    #[arg(long = "addr-num", default_value_t = 20)]
    pub addr_num: u32,

    /// Index of the first address.
    #[arg(long = "addr-off", default_value_t = 0)]
    pub addr_off: u32,
}
