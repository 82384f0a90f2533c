//! # hdwkit-bip - BIP-44/49/84/86 Wallets
//!
//! Purpose-scheme wallets on top of BIP-32 (secp256k1) and SLIP-10 (ed25519).
//!
//! ## Features
//!
//! - **Four schemes**: legacy, nested segwit, native segwit and taproot
//! - **Multi-coin**: Bitcoin, Litecoin, Dogecoin, Dash, EVM chains, Tron,
//!   Cosmos and Solana
//! - **Any entry level**: start from a mnemonic, a seed, an extended key at any
//!   depth, or a raw key
//! - **Watch-only**: public roots never produce private fields
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_bip::{Bip, BipDataKind, BipKeyKind, BipParams, BipWalletFactory, Coin};
//!
//! let factory = BipWalletFactory::new(Bip::Bip84, Coin::Bitcoin).unwrap();
//! let mut wallet = factory
//!     .create_from_mnemonic(
//!         "demo",
//!         "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!         None,
//!     )
//!     .unwrap();
//! wallet.generate(&BipParams { addr_num: 1, ..BipParams::default() }).unwrap();
//!
//! let first = wallet
//!     .get_data(BipDataKind::Addresses)
//!     .and_then(|d| d.as_key_collection())
//!     .and_then(|c| c.get(0))
//!     .and_then(|r| r.get(BipKeyKind::Address))
//!     .unwrap();
//! assert_eq!(first, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
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
    clippy::cast_possible_truncation,
    clippy::similar_names
)]
#![forbid(unsafe_code)]

mod address;
mod bip;
mod coin;
mod extended_key;
mod factory;
mod kind;
mod node;
mod slip10;
mod wallet;

pub use bip::{Bip, KeyVersions, ParseBipError, ScriptKind};
pub use coin::{AddressStyle, Coin, Curve, ParseCoinError};
pub use factory::BipWalletFactory;
pub use kind::{BipDataKind, BipKeyKind, ParseKindError};
pub use wallet::{BipParams, BipWallet};

pub use hdwkit::{Error, Result};
