//! SLIP-0044 coin types.
//!
//! This crate contains the registered [SLIP-0044] coin type indices for
//! well-known cryptocurrencies, as used in the `coin_type'` level of BIP-44
//! derivation paths. The indices are available three ways:
//!
//! - as bare `u32` constants in the [`slip44`] module,
//! - as the typed [`CoinType`] enum,
//! - through the name-keyed [`CoinTypeRegistry`], whose published table is
//!   the process-wide [`SLIP44`] static.
//!
//! ```
//! use slip44_coin_types::{slip44, CoinType, SLIP44};
//!
//! assert_eq!(slip44::SOLANA, 501);
//! assert_eq!("btc".parse::<CoinType>().unwrap().index(), 0);
//! assert_eq!(SLIP44.get("Ethereum Classic").unwrap(), 61);
//! assert!(SLIP44.get("Not A Coin").is_err());
//! ```
//!
//! [SLIP-0044]: https://github.com/satoshilabs/slips/blob/master/slip-0044.md

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod slip44;
pub use slip44::SLIP44;

mod env_utils;
pub use env_utils::{load_coin_type, load_coin_type_opt};

mod types;
pub use types::{
    CoinType, CoinTypeEntry, CoinTypeRegistry, ConfigError, RegistryError, UnknownCoinType,
};

/// Look up the SLIP-0044 index for `name` in the published table.
///
/// Shorthand for [`SLIP44.get(name)`](CoinTypeRegistry::get).
pub fn get(name: &str) -> Result<u32, UnknownCoinType> {
    SLIP44.get(name)
}
