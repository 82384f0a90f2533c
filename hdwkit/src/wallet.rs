//! The contract every wallet scheme implements.

use core::fmt;

use serde::Serialize;
use serde::ser::Serializer;
use serde_json::{Map, Value};

use crate::collection::AddressCollection;
use crate::record::{KeyKind, KeyRecord};
use crate::Result;

/// The closed set of top-level fields a wallet scheme reports.
///
/// Declaration order in [`DataKind::ALL`] is the serialization order.
pub trait DataKind: Copy + Eq + fmt::Debug + 'static {
    /// Every kind, in serialization order.
    const ALL: &'static [Self];

    /// Dictionary key used in serialized output.
    fn name(self) -> &'static str;

    /// Look a kind up by its dictionary key.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// A borrowed view of one wallet field.
#[derive(Debug, Clone, Copy)]
pub enum DataValue<'a, K: KeyKind> {
    /// Names, mnemonics, passphrases, hex seeds, paths.
    Text(&'a str),
    /// Account, change and offset indices.
    Index(u32),
    /// A single key node.
    Keys(&'a KeyRecord<K>),
    /// Derived key nodes, one per address index.
    KeyCollection(&'a AddressCollection<KeyRecord<K>>),
    /// Plain address strings, one per index.
    AddressList(&'a AddressCollection<String>),
}

impl<'a, K: KeyKind> DataValue<'a, K> {
    /// The text, if this is a text field.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The index, if this is a numeric field.
    pub fn as_index(&self) -> Option<u32> {
        match self {
            Self::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// The key record, if this is a single key node.
    pub fn as_keys(&self) -> Option<&'a KeyRecord<K>> {
        match self {
            Self::Keys(keys) => Some(keys),
            _ => None,
        }
    }

    /// The key collection, if this is a list of derived key nodes.
    pub fn as_key_collection(&self) -> Option<&'a AddressCollection<KeyRecord<K>>> {
        match self {
            Self::KeyCollection(collection) => Some(collection),
            _ => None,
        }
    }

    /// The address list, if this is a list of plain addresses.
    pub fn as_address_list(&self) -> Option<&'a AddressCollection<String>> {
        match self {
            Self::AddressList(list) => Some(list),
            _ => None,
        }
    }
}

impl<K: KeyKind> Serialize for DataValue<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Index(index) => serializer.serialize_u32(*index),
            Self::Keys(keys) => keys.serialize(serializer),
            Self::KeyCollection(collection) => collection.serialize(serializer),
            Self::AddressList(list) => list.serialize(serializer),
        }
    }
}

/// A wallet built by a scheme factory and filled in by [`HdWallet::generate`].
///
/// Implementors only answer [`HdWallet::get_data`]; presence checks and
/// serialization are derived from it so that a field is reported exactly
/// when it holds a value.
pub trait HdWallet {
    /// Key encodings this scheme emits.
    type KeyKind: KeyKind;
    /// Top-level fields this scheme reports.
    type DataKind: DataKind;
    /// Generation parameters, with documented defaults.
    type Params: Default;

    /// Derive every level reachable from the root key.
    ///
    /// Parameters are validated before anything is derived; on error the
    /// wallet is left exactly as it was.
    fn generate(&mut self, params: &Self::Params) -> Result<()>;

    /// Whether the root key has no private component.
    fn is_watch_only(&self) -> bool;

    /// Value of `kind`, or `None` when it was not set.
    fn get_data(&self, kind: Self::DataKind) -> Option<DataValue<'_, Self::KeyKind>>;

    /// Whether `kind` holds a value.
    fn has_data(&self, kind: Self::DataKind) -> bool {
        self.get_data(kind).is_some()
    }

    /// Ordered map of every present field.
    fn to_map(&self) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        for &kind in Self::DataKind::ALL {
            if let Some(value) = self.get_data(kind) {
                map.insert(kind.name().to_owned(), serde_json::to_value(value)?);
            }
        }
        Ok(map)
    }

    /// Serialize to JSON; `indent == 0` produces compact output.
    fn to_json(&self, indent: usize) -> Result<String> {
        to_json_string(&self.to_map()?, indent)
    }
}

/// Serialize `value` as JSON, pretty-printed with `indent` spaces.
///
/// An indent of zero yields compact single-line output.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }
    let pad = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
