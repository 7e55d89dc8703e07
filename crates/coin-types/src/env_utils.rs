use crate::{CoinType, ConfigError};
use std::env;

/// Load a [`CoinType`] from the environment variable `key`.
///
/// The value may be a coin name, registry alias, or ticker symbol, e.g.
/// `COIN_TYPE=solana`.
pub fn load_coin_type(key: &str) -> Result<CoinType, ConfigError> {
    let val = env::var(key).map_err(|_| ConfigError::missing(key))?;
    val.parse().map_err(Into::into)
}

/// Load a [`CoinType`] from the environment variable `key`. `None` if the
/// variable is unset or does not name a supported coin.
pub fn load_coin_type_opt(key: &str) -> Option<CoinType> {
    env::var(key).ok()?.parse().ok()
}
