//! # hdwkit-monero - Monero Wallets
//!
//! Spend/view key sets, 25-word mnemonics, primary, integrated and
//! subaddresses for mainnet, stagenet and testnet.
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_monero::{MoneroDataKind, MoneroNetwork, MoneroParams, MoneroWalletFactory};
//!
//! let factory = MoneroWalletFactory::new(MoneroNetwork::Mainnet);
//! let mut wallet = factory.create_random("savings").unwrap();
//! wallet
//!     .generate(&MoneroParams {
//!         subaddr_num: 5,
//!         ..MoneroParams::default()
//!     })
//!     .unwrap();
//!
//! let subaddresses = wallet
//!     .get_data(MoneroDataKind::Subaddresses)
//!     .and_then(|d| d.as_address_list())
//!     .unwrap();
//! assert_eq!(subaddresses.count(), 5);
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
mod network;
mod wallet;

pub use factory::MoneroWalletFactory;
pub use kind::{MoneroDataKind, MoneroKeyKind, ParseKindError};
pub use network::{AddressPrefixes, MoneroNetwork, ParseNetworkError};
pub use wallet::{MoneroParams, MoneroWallet};

pub use hdwkit::{Error, Result};
