//! Offset-aware collections of derived addresses.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::wallet::to_json_string;
use crate::Result;

/// How entries of a collection are named when serialized.
///
/// Entry `i` of a collection with offset `o` is reported under
/// `"{prefix}_{i + o + base}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFormat {
    /// Name stem, e.g. `"address"`.
    pub prefix: &'static str,
    /// Added to the derivation index when reporting (1 for 1-based numbering).
    pub base: u32,
}

impl KeyFormat {
    /// `address_1`, `address_2`, ... numbering used by BIP, Cardano and Electrum.
    pub const ADDRESS: Self = Self {
        prefix: "address",
        base: 1,
    };

    /// `subaddress_<index>` numbering used by Monero, reporting the index itself.
    pub const SUBADDRESS: Self = Self {
        prefix: "subaddress",
        base: 0,
    };

    /// Dictionary key for derivation index `index`.
    pub fn key(self, index: u32) -> String {
        format!("{}_{}", self.prefix, u64::from(index) + u64::from(self.base))
    }
}

/// Derived entries in derivation order; entry `i` belongs to index `offset + i`.
///
/// Indexing is zero-based regardless of the offset; the offset only shows up
/// in the reported dictionary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCollection<T> {
    entries: Vec<T>,
    offset: u32,
    format: KeyFormat,
}

impl<T> AddressCollection<T> {
    /// Create an empty collection whose first entry will sit at `offset`.
    pub fn new(offset: u32, format: KeyFormat) -> Self {
        Self {
            entries: Vec::new(),
            offset,
            format,
        }
    }

    /// Create a collection from entries already in derivation order.
    pub fn from_entries(entries: Vec<T>, offset: u32, format: KeyFormat) -> Self {
        Self {
            entries,
            offset,
            format,
        }
    }

    /// Append the entry for the next derivation index.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Entry at collection position `i`.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.entries.get(i)
    }

    /// Iterate entries in derivation order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derivation index of the first entry.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Naming format of the serialized keys.
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    /// Derivation index of collection position `i`.
    pub fn index_of(&self, i: usize) -> u32 {
        self.offset + i as u32
    }

    /// Dictionary key of collection position `i`.
    pub fn key_of(&self, i: usize) -> String {
        self.format.key(self.index_of(i))
    }
}

impl<T: Serialize> AddressCollection<T> {
    /// Ordered map of dictionary key to serialized entry.
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        self.iter()
            .enumerate()
            .map(|(i, entry)| Ok((self.key_of(i), serde_json::to_value(entry)?)))
            .collect()
    }

    /// Serialize to JSON; `indent == 0` produces compact output.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        to_json_string(self, indent)
    }
}

impl<'a, T> IntoIterator for &'a AddressCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for AddressCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.count()))?;
        for (i, entry) in self.iter().enumerate() {
            map.serialize_entry(&self.key_of(i), entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_changes_keys_not_indexing() {
        let collection = AddressCollection::from_entries(
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            20,
            KeyFormat::ADDRESS,
        );
        assert_eq!(collection.count(), 3);
        assert_eq!(collection.get(0).map(String::as_str), Some("a"));
        assert_eq!(collection.index_of(2), 22);
        let keys: Vec<_> = collection.to_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["address_21", "address_22", "address_23"]);
    }

    #[test]
    fn subaddress_keys_report_index() {
        let mut collection = AddressCollection::new(5, KeyFormat::SUBADDRESS);
        collection.push("x".to_owned());
        assert_eq!(collection.key_of(0), "subaddress_5");
        assert_eq!(collection.to_json(0).unwrap(), r#"{"subaddress_5":"x"}"#);
    }

    #[test]
    fn top_index_does_not_overflow_key() {
        assert_eq!(KeyFormat::ADDRESS.key(u32::MAX), "address_4294967296");
    }
}
