use proptest::prelude::*;
use slip44_coin_types::{CoinTypeRegistry, SLIP44};
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn repeated_reads_are_stable() {
    init_tracing();

    let first = serde_json::to_vec(&SLIP44).unwrap();
    let lookups: Vec<_> = SLIP44.iter().map(|e| SLIP44.get(e.name())).collect();

    for _ in 0..100 {
        assert_eq!(serde_json::to_vec(&SLIP44).unwrap(), first);
        let again: Vec<_> = SLIP44.iter().map(|e| SLIP44.get(e.name())).collect();
        assert_eq!(again, lookups);
    }
}

#[test]
fn concurrent_readers() {
    init_tracing();

    let expected = serde_json::to_vec(&SLIP44).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        assert_eq!(SLIP44.get("Solana"), Ok(501));
                        assert_eq!(SLIP44.get("Bitcoin"), Ok(0));
                        assert!(SLIP44.get("Not A Coin").is_err());
                    }
                    serde_json::to_vec(&SLIP44).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn custom_registry_from_json() {
    init_tracing();

    let registry = CoinTypeRegistry::from_json(
        r#"[
            {"name": "Bitcoin", "index": 0},
            {"name": "Zcash", "index": 133},
            {"name": "Zcash (ZEC)", "index": 133}
        ]"#,
    )
    .unwrap();

    assert_eq!(registry.get("zcash"), Ok(133));
    assert_eq!(registry.names_for(133).collect::<Vec<_>>(), ["Zcash", "Zcash (ZEC)"]);
    assert!(registry.get("Solana").is_err());

    let json = serde_json::to_string(&registry).unwrap();
    assert_eq!(CoinTypeRegistry::from_json(&json).unwrap(), registry);
}

fn flip_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    #[test]
    fn lookup_ignores_case(idx in 0..SLIP44.len(), mask in prop::collection::vec(any::<bool>(), 1..16)) {
        let entry = &SLIP44.entries()[idx];
        let name = flip_case(entry.name(), &mask);
        prop_assert_eq!(SLIP44.get(&name), Ok(entry.index()));
    }

    #[test]
    fn unknown_names_never_resolve(name in "[a-z]{1,12}[0-9]{1,3}") {
        // No published name contains a digit.
        prop_assert!(SLIP44.get(&name).is_err());
        prop_assert!(name.parse::<slip44_coin_types::CoinType>().is_err());
    }
}
