//! # hdwkit - Hierarchical-Deterministic Wallet Core
//!
//! Shared building blocks for the per-scheme wallet crates of the `hdwkit`
//! workspace.
//!
//! ## Features
//!
//! - **Typed records**: [`KeyRecord`] and [`AddressCollection`] keyed by closed
//!   per-scheme enums, serialized in declaration order
//! - **One wallet contract**: every scheme implements [`HdWallet`]
//! - **Structural absence**: a field missing from a wallet is missing from its JSON
//! - **Secrets zeroized**: mnemonics, seeds and private keys live in [`zeroize::Zeroizing`]
//!
//! ## Example
//!
//! ```
//! use hdwkit::{KeyKind, KeyRecord};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Kind {
//!     Pub,
//!     Address,
//! }
//!
//! impl KeyKind for Kind {
//!     const ALL: &'static [Self] = &[Self::Pub, Self::Address];
//!
//!     fn name(self) -> &'static str {
//!         match self {
//!             Self::Pub => "pub",
//!             Self::Address => "address",
//!         }
//!     }
//!
//!     fn is_private(self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut record = KeyRecord::new();
//! record.insert(Kind::Address, "addr1");
//! record.insert(Kind::Pub, "02ab");
//! assert_eq!(record.to_json(0).unwrap(), r#"{"pub":"02ab","address":"addr1"}"#);
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

pub mod collection;
pub mod encoding;
pub mod entropy;
pub mod error;
pub mod hash;
pub mod hdpath;
pub mod mnemonic;
pub mod params;
pub mod persist;
pub mod record;
pub mod wallet;

pub use collection::{AddressCollection, KeyFormat};
pub use error::{Error, Result};
pub use hdpath::{ChildIndex, Level};
pub use mnemonic::WordCount;
pub use params::{Chain, ParseChainError, validate_range};
pub use persist::save_to_file;
pub use record::{KeyKind, KeyRecord};
pub use wallet::{DataKind, DataValue, HdWallet};

// Re-exported so scheme crates and callers agree on one wordlist type.
pub use bip39::Language;
pub use zeroize::Zeroizing;
