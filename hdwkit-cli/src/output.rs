//! Printing and saving generated wallets.

use std::path::PathBuf;

use colored::Colorize;
use hdwkit::{HdWallet, save_to_file};
use tracing::debug;

/// Where a generated wallet goes: always stdout, optionally a file too.
pub struct Output {
    indent: usize,
    path: Option<PathBuf>,
}

impl Output {
    /// Create an output with the given JSON indentation.
    pub fn new(indent: usize, path: Option<PathBuf>) -> Self {
        Self { indent, path }
    }

    /// Print `wallet` as JSON and write it to the output file, if any.
    pub fn emit<W: HdWallet>(&self, wallet: &W) -> hdwkit::Result<()> {
        println!("{}", wallet.to_json(self.indent)?);
        if let Some(path) = &self.path {
            save_to_file(wallet, path, self.indent)?;
            debug!(path = %path.display(), "wallet saved");
            eprintln!("{} {}", "Saved".green().bold(), path.display());
        }
        Ok(())
    }
}
