mod error;
pub use error::{ConfigError, RegistryError, UnknownCoinType};

mod entry;
pub use entry::CoinTypeEntry;

mod coin;
pub use coin::CoinType;

mod registry;
pub use registry::CoinTypeRegistry;

/// Compare two coin names the way every lookup in this crate does: ASCII
/// case-insensitive, ignoring surrounding whitespace.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
