//! Environment loading. Kept in its own test binary with a single test so
//! that `set_var` never races another thread reading the environment.

use slip44_coin_types::{load_coin_type, load_coin_type_opt, CoinType, ConfigError};
use std::env;

#[test]
fn load_coin_type_from_env() {
    env::set_var("SLIP44_COIN_TYPE", "Polkadot");
    assert_eq!(load_coin_type("SLIP44_COIN_TYPE").unwrap(), CoinType::Polkadot);
    assert_eq!(load_coin_type_opt("SLIP44_COIN_TYPE"), Some(CoinType::Polkadot));

    env::set_var("SLIP44_COIN_TYPE", " sol ");
    assert_eq!(load_coin_type("SLIP44_COIN_TYPE").unwrap(), CoinType::Solana);

    env::set_var("SLIP44_COIN_TYPE", "notacoin");
    let err = load_coin_type("SLIP44_COIN_TYPE").unwrap_err();
    assert!(matches!(err, ConfigError::CoinType(ref e) if e.name() == "notacoin"));
    assert_eq!(load_coin_type_opt("SLIP44_COIN_TYPE"), None);

    env::remove_var("SLIP44_COIN_TYPE");
    let err = load_coin_type("SLIP44_COIN_TYPE").unwrap_err();
    assert!(matches!(err, ConfigError::Var(ref key) if key == "SLIP44_COIN_TYPE"));
    assert_eq!(load_coin_type_opt("SLIP44_COIN_TYPE"), None);
}
