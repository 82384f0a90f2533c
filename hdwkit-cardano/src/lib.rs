//! # hdwkit-cardano - Cardano Shelley Wallets
//!
//! CIP-1852 wallets on BIP32-Ed25519: Icarus and Ledger master keys, base
//! addresses bound to the account staking key, and the reward address.
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_cardano::{
//!     CardanoCoin, CardanoDataKind, CardanoKeyKind, CardanoParams, CardanoWalletFactory,
//! };
//!
//! let factory = CardanoWalletFactory::new(CardanoCoin::Icarus);
//! let mut wallet = factory
//!     .create_from_mnemonic(
//!         "demo",
//!         "eight country switch draw meat scout mystery blade tip drift useless good keep usage title",
//!         None,
//!     )
//!     .unwrap();
//! wallet.generate(&CardanoParams { addr_num: 1, ..CardanoParams::default() }).unwrap();
//!
//! let reward = wallet
//!     .get_data(CardanoDataKind::StakingKey)
//!     .and_then(|d| d.as_keys())
//!     .and_then(|r| r.get(CardanoKeyKind::Address))
//!     .unwrap();
//! assert_eq!(reward, "stake1ux2436tfe25727kul3qtnyr7k72rvw6ep7h59ll53suwhzq05v5j9");
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

mod address;
mod coin;
mod factory;
mod kind;
mod node;
mod wallet;

pub use coin::{CardanoCoin, MasterKeyStyle, ParseCoinError};
pub use factory::CardanoWalletFactory;
pub use kind::{CardanoDataKind, CardanoKeyKind, ParseKindError};
pub use node::{PRIVATE_VERSION, PUBLIC_VERSION};
pub use wallet::{CardanoParams, CardanoWallet};

pub use hdwkit::{Error, Result};
