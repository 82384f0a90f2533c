//! hdwkit - a hierarchical-deterministic wallet generator.
//!
//! Derives keys and addresses for BIP-44/49/84/86 coins, Cardano Shelley,
//! Electrum, Monero, Substrate and Algorand, and prints them as JSON.

mod commands;
mod output;
mod source;

use clap::Parser;
use colored::Colorize;
use commands::{Cli, Commands};
use output::Output;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HDWKIT_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let out = Output::new(cli.indent, cli.output);
    match cli.command {
        Commands::Bip(cmd) => cmd.execute(&out)?,
        Commands::Cardano(cmd) => cmd.execute(&out)?,
        Commands::ElectrumV1(cmd) => cmd.execute(&out)?,
        Commands::ElectrumV2(cmd) => cmd.execute(&out)?,
        Commands::Monero(cmd) => cmd.execute(&out)?,
        Commands::Substrate(cmd) => cmd.execute(&out)?,
        Commands::Algorand(cmd) => cmd.execute(&out)?,
    }
    Ok(())
}
