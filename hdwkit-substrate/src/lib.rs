//! # hdwkit-substrate - Substrate Wallets
//!
//! sr25519 keys derived along `//hard/soft` paths and rendered as SS58
//! addresses for Polkadot, Kusama, Acala or the generic Substrate format.
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_substrate::{
//!     SubstrateCoin, SubstrateDataKind, SubstrateKeyKind, SubstrateParams,
//!     SubstrateWalletFactory,
//! };
//!
//! let factory = SubstrateWalletFactory::new(SubstrateCoin::Generic);
//! let mut wallet = factory
//!     .create_from_mnemonic(
//!         "dev",
//!         "bottom drive obey lake curtain smoke basket hold race lonely fit walk",
//!         None,
//!     )
//!     .unwrap();
//! wallet.generate(&SubstrateParams::with_path("//Alice")).unwrap();
//!
//! let address = wallet
//!     .get_data(SubstrateDataKind::Key)
//!     .and_then(|d| d.as_keys())
//!     .and_then(|k| k.get(SubstrateKeyKind::Address))
//!     .unwrap();
//! assert_eq!(address, "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
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

mod coin;
mod factory;
mod key;
mod kind;
pub mod path;
mod wallet;

pub use coin::{ParseCoinError, SubstrateCoin};
pub use factory::SubstrateWalletFactory;
pub use kind::{ParseKindError, SubstrateDataKind, SubstrateKeyKind};
pub use wallet::{SubstrateParams, SubstrateWallet};

pub use hdwkit::{Error, Result};
