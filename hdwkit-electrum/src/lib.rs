//! # hdwkit-electrum - Electrum Wallets
//!
//! Both generations of Electrum's deterministic wallets:
//!
//! - **V1**: "old" 1626-word mnemonics, a stretched master key and
//!   uncompressed P2PKH addresses
//! - **V2**: seed-versioned mnemonics over the BIP-39 English list, with
//!   standard (P2PKH, `m/c/i`) and segwit (P2WPKH, `m/0'/c/i`) flavors
//!
//! ## Example
//!
//! ```
//! use hdwkit::HdWallet;
//! use hdwkit_electrum::{
//!     ElectrumDataKind, ElectrumKeyKind, ElectrumParams, ElectrumV2WalletFactory, MnemonicType,
//! };
//!
//! let factory = ElectrumV2WalletFactory::new(MnemonicType::Standard);
//! let mut wallet = factory
//!     .create_from_mnemonic(
//!         "std",
//!         "cycle rocket west magnet parrot shuffle foot correct salt library feed song",
//!         None,
//!     )
//!     .unwrap();
//! wallet.generate(&ElectrumParams::default()).unwrap();
//!
//! let first = wallet
//!     .get_data(ElectrumDataKind::Addresses)
//!     .and_then(|d| d.as_key_collection())
//!     .and_then(|c| c.get(0))
//!     .and_then(|r| r.get(ElectrumKeyKind::Address))
//!     .unwrap();
//! assert_eq!(first, "1NNkttn1YvVGdqBW4PR6zvc3Zx3H5owKRf");
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

mod kind;
pub mod old_mnemonic;
mod v1;
mod v2;
pub mod v2_mnemonic;
mod wallet;

pub use kind::{ElectrumDataKind, ElectrumKeyKind, ParseKindError};
pub use v1::{ElectrumV1Wallet, ElectrumV1WalletFactory};
pub use v2::{ElectrumV2Wallet, ElectrumV2WalletFactory};
pub use v2_mnemonic::{MnemonicType, ParseMnemonicTypeError};
pub use wallet::ElectrumParams;

pub use hdwkit::{Error, Result};
