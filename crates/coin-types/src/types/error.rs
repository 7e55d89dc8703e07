/// Error returned when a name has no registered coin type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown coin type {0:?}")]
pub struct UnknownCoinType(pub String);

impl UnknownCoinType {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Error building a [`crate::CoinTypeRegistry`] from caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An entry has an empty (or all-whitespace) name.
    #[error("coin type entry with index {0} has an empty name")]
    EmptyName(u32),
    /// Two entries share a name.
    #[error("duplicate coin type name {0:?}")]
    DuplicateName(String),
}

/// Errors loading coin types from the environment or other configuration
/// sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// The configured coin type is not known.
    #[error(transparent)]
    CoinType(#[from] UnknownCoinType),
    /// The configured registry is invalid.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Error parsing JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
