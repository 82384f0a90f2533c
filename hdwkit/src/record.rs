//! Key records: one key node rendered in every encoding a scheme defines.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::wallet::to_json_string;
use crate::Result;

/// The closed set of key encodings a scheme emits.
///
/// Variant declaration order is the serialization order, so implementors
/// derive `Ord` and list variants the way they should appear in output.
pub trait KeyKind: Copy + Ord + fmt::Debug + 'static {
    /// Every kind, in declaration order.
    const ALL: &'static [Self];

    /// Dictionary key used in serialized output.
    fn name(self) -> &'static str;

    /// Whether this kind carries private key material.
    fn is_private(self) -> bool;

    /// Look a kind up by its dictionary key.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

/// Encodings of a single key node, keyed by kind.
///
/// Built once by a derivation engine and read-only afterwards: wallets only
/// hand out shared references.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyRecord<K: KeyKind> {
    values: BTreeMap<K, Zeroizing<String>>,
}

impl<K: KeyKind> KeyRecord<K> {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set the encoding for `kind`, replacing any previous value.
    pub fn insert(&mut self, kind: K, value: impl Into<String>) {
        self.values.insert(kind, Zeroizing::new(value.into()));
    }

    /// Whether `kind` was derived for this node.
    pub fn has(&self, kind: K) -> bool {
        self.values.contains_key(&kind)
    }

    /// Encoding for `kind`, if it was derived.
    pub fn get(&self, kind: K) -> Option<&str> {
        self.values.get(&kind).map(|v| v.as_str())
    }

    /// Number of encodings present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no encodings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether any private-key encoding is present.
    pub fn has_private(&self) -> bool {
        self.values.keys().any(|kind| kind.is_private())
    }

    /// Iterate `(kind, value)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.values.iter().map(|(kind, v)| (*kind, v.as_str()))
    }

    /// Ordered map of dictionary key to value.
    pub fn to_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(kind, v)| (kind.name().to_owned(), Value::String(v.to_owned())))
            .collect()
    }

    /// Serialize to JSON; `indent == 0` produces compact output.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        to_json_string(self, indent)
    }
}

impl<K: KeyKind> Default for KeyRecord<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyKind> fmt::Debug for KeyRecord<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, value) in self.iter() {
            if kind.is_private() {
                map.entry(&kind.name(), &"<redacted>");
            } else {
                map.entry(&kind.name(), &value);
            }
        }
        map.finish()
    }
}

impl<K: KeyKind> Serialize for KeyRecord<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub(crate) enum TestKind {
        Pub,
        Priv,
        Address,
    }

    impl KeyKind for TestKind {
        const ALL: &'static [Self] = &[Self::Pub, Self::Priv, Self::Address];

        fn name(self) -> &'static str {
            match self {
                Self::Pub => "pub",
                Self::Priv => "priv",
                Self::Address => "address",
            }
        }

        fn is_private(self) -> bool {
            matches!(self, Self::Priv)
        }
    }

    #[test]
    fn serializes_in_declaration_order() {
        let mut record = KeyRecord::new();
        record.insert(TestKind::Address, "a1");
        record.insert(TestKind::Priv, "p1");
        record.insert(TestKind::Pub, "k1");
        assert_eq!(
            record.to_json(0).unwrap(),
            r#"{"pub":"k1","priv":"p1","address":"a1"}"#
        );
        let keys: Vec<_> = record.to_map().keys().cloned().collect();
        assert_eq!(keys, ["pub", "priv", "address"]);
    }

    #[test]
    fn absent_kind_is_none() {
        let mut record = KeyRecord::new();
        record.insert(TestKind::Pub, "k1");
        assert!(record.has(TestKind::Pub));
        assert!(!record.has(TestKind::Priv));
        assert_eq!(record.get(TestKind::Priv), None);
        assert!(!record.has_private());
    }

    #[test]
    fn debug_redacts_private_values() {
        let mut record = KeyRecord::new();
        record.insert(TestKind::Priv, "secret");
        let rendered = format!("{record:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn kind_from_name() {
        assert_eq!(TestKind::from_name("address"), Some(TestKind::Address));
        assert_eq!(TestKind::from_name("wif"), None);
    }
}
