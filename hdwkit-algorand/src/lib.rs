//! # hdwkit-algorand - Algorand Wallets
//!
//! Algorand has no derivation tree: a wallet is one ed25519 key, its 25-word
//! mnemonic and its base32 address.
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_algorand::{AlgorandDataKind, AlgorandParams, AlgorandWalletFactory};
//!
//! let mut wallet = AlgorandWalletFactory::new().create_random("demo").unwrap();
//! wallet.generate(&AlgorandParams).unwrap();
//! assert!(wallet.has_data(AlgorandDataKind::Key));
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

mod factory;
mod key;
mod kind;
pub mod mnemonic;
mod wallet;

pub use factory::AlgorandWalletFactory;
pub use kind::{AlgorandDataKind, AlgorandKeyKind, ParseKindError};
pub use wallet::{AlgorandParams, AlgorandWallet};

pub use hdwkit::{Error, Result};
