use crate::{slip44, CoinTypeEntry, ConfigError, RegistryError, UnknownCoinType};
use serde::ser::SerializeSeq;
use std::{borrow::Cow, collections::HashSet};

/// An immutable table of coin type names and their SLIP-0044 indices.
///
/// The published table is available as [`crate::SLIP44`]. Custom tables can
/// be built once at startup with [`CoinTypeRegistry::from_entries`] or
/// [`CoinTypeRegistry::from_json`]; a registry has no mutating methods, so it
/// can be shared freely between threads.
///
/// Names are matched ignoring ASCII case and surrounding whitespace. Several
/// names may share an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTypeRegistry {
    entries: Cow<'static, [CoinTypeEntry]>,
}

impl Default for CoinTypeRegistry {
    fn default() -> Self {
        Self::slip44()
    }
}

impl CoinTypeRegistry {
    /// Get the published SLIP-0044 table.
    pub const fn slip44() -> Self {
        Self { entries: Cow::Borrowed(slip44::ENTRIES) }
    }

    /// Build a registry from caller-supplied entries.
    ///
    /// Fails if any name is blank, or if two names are equal ignoring case
    /// and surrounding whitespace.
    pub fn from_entries(entries: Vec<CoinTypeEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            let key = entry.name().trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(RegistryError::EmptyName(entry.index()));
            }
            if !seen.insert(key) {
                return Err(RegistryError::DuplicateName(entry.name().to_string()));
            }
        }
        Ok(Self { entries: Cow::Owned(entries) })
    }

    /// Load a registry from a JSON array of `{"name": .., "index": ..}`
    /// objects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CoinTypeEntry> = serde_json::from_str(json)?;
        let registry = Self::from_entries(entries)?;
        tracing::debug!(entries = registry.len(), "loaded coin type registry");
        Ok(registry)
    }

    /// Get the index registered for `name`.
    pub fn get(&self, name: &str) -> Result<u32, UnknownCoinType> {
        self.entry(name).map(CoinTypeEntry::index).ok_or_else(|| {
            tracing::debug!(name, "unknown coin type");
            UnknownCoinType(name.trim().to_string())
        })
    }

    /// Get the entry registered for `name`, if any.
    pub fn entry(&self, name: &str) -> Option<&CoinTypeEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Get every name registered at `index`, in table order.
    pub fn names_for(&self, index: u32) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(move |entry| entry.index() == index).map(CoinTypeEntry::name)
    }

    /// Get an iterator over the entries, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CoinTypeEntry> {
        self.entries.iter()
    }

    /// Get a slice of the entries, in table order.
    pub fn entries(&self) -> &[CoinTypeEntry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CoinTypeRegistry {
    type Item = &'a CoinTypeEntry;
    type IntoIter = std::slice::Iter<'a, CoinTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl serde::Serialize for CoinTypeRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;

        for entry in self.iter() {
            seq.serialize_element(entry)?;
        }

        seq.end()
    }
}

impl<'de> serde::Deserialize<'de> for CoinTypeRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<CoinTypeEntry> = Vec::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
