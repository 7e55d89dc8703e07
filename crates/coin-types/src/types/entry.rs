use std::{borrow::Cow, fmt};

/// A single registered coin type: a human-readable name and its SLIP-0044
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct CoinTypeEntry {
    /// Name of the coin, e.g. `"Bitcoin"`.
    name: Cow<'static, str>,
    /// Registered coin type index.
    index: u32,
}

impl CoinTypeEntry {
    /// Create a new entry.
    pub const fn new(name: Cow<'static, str>, index: u32) -> Self {
        Self { name, index }
    }

    /// Create a new entry from a static name.
    pub const fn from_static(name: &'static str, index: u32) -> Self {
        Self::new(Cow::Borrowed(name), index)
    }

    /// Get the name of the coin.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the registered coin type index.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// True if `name` refers to this entry.
    pub fn matches(&self, name: &str) -> bool {
        super::names_match(&self.name, name)
    }
}

impl fmt::Display for CoinTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}
