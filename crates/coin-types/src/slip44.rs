//! Registered SLIP-0044 coin type indices.
//!
//! Values follow the published registry at
//! <https://github.com/satoshilabs/slips/blob/master/slip-0044.md>.

use crate::{CoinTypeEntry, CoinTypeRegistry};

/// Bit set on a BIP-32 child index to mark it as hardened. The `coin_type'`
/// level of a BIP-44 path is always hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Bitcoin.
pub const BITCOIN: u32 = 0;
/// Testnet (all coins).
pub const TESTNET: u32 = 1;
/// Litecoin.
pub const LITECOIN: u32 = 2;
/// Dogecoin.
pub const DOGECOIN: u32 = 3;
/// Ether, the native asset of Ethereum.
pub const ETHER: u32 = 60;
/// Ether Classic, the native asset of Ethereum Classic.
pub const ETHER_CLASSIC: u32 = 61;
/// Atom, the native asset of the Cosmos Hub.
pub const ATOM: u32 = 118;
/// Monero.
pub const MONERO: u32 = 128;
/// XRP.
pub const XRP: u32 = 144;
/// Bitcoin Cash.
pub const BITCOIN_CASH: u32 = 145;
/// Stellar Lumens.
pub const STELLAR_LUMENS: u32 = 148;
/// EOS.
pub const EOS: u32 = 194;
/// Tron.
pub const TRON: u32 = 195;
/// Algorand.
pub const ALGORAND: u32 = 283;
/// Polkadot.
pub const POLKADOT: u32 = 354;
/// Filecoin.
pub const FILECOIN: u32 = 461;
/// Solana.
pub const SOLANA: u32 = 501;
/// Binance.
pub const BINANCE: u32 = 714;
/// Neo.
pub const NEO: u32 = 888;
/// Tezos.
pub const TEZOS: u32 = 1729;
/// Cardano.
pub const CARDANO: u32 = 1815;

/// The published table, in index order.
///
/// "Ether", "Ether Classic" and "Cosmos (Atom)" are the registry's own
/// labels and are kept next to the descriptive chain names. Several names
/// share an index.
pub const ENTRIES: &[CoinTypeEntry] = &[
    CoinTypeEntry::from_static("Bitcoin", BITCOIN),
    CoinTypeEntry::from_static("Testnet", TESTNET),
    CoinTypeEntry::from_static("Litecoin", LITECOIN),
    CoinTypeEntry::from_static("Dogecoin", DOGECOIN),
    CoinTypeEntry::from_static("Ethereum", ETHER),
    CoinTypeEntry::from_static("Ether", ETHER),
    CoinTypeEntry::from_static("Ethereum Classic", ETHER_CLASSIC),
    CoinTypeEntry::from_static("Ether Classic", ETHER_CLASSIC),
    CoinTypeEntry::from_static("Cosmos", ATOM),
    CoinTypeEntry::from_static("Cosmos (Atom)", ATOM),
    CoinTypeEntry::from_static("Monero", MONERO),
    CoinTypeEntry::from_static("XRP", XRP),
    CoinTypeEntry::from_static("Bitcoin Cash", BITCOIN_CASH),
    CoinTypeEntry::from_static("Stellar Lumens", STELLAR_LUMENS),
    CoinTypeEntry::from_static("EOS", EOS),
    CoinTypeEntry::from_static("Tron", TRON),
    CoinTypeEntry::from_static("Algorand", ALGORAND),
    CoinTypeEntry::from_static("Polkadot", POLKADOT),
    CoinTypeEntry::from_static("Filecoin", FILECOIN),
    CoinTypeEntry::from_static("Solana", SOLANA),
    CoinTypeEntry::from_static("Binance", BINANCE),
    CoinTypeEntry::from_static("Neo", NEO),
    CoinTypeEntry::from_static("Tezos", TEZOS),
    CoinTypeEntry::from_static("Cardano", CARDANO),
];

/// The published SLIP-0044 registry.
pub static SLIP44: CoinTypeRegistry = CoinTypeRegistry::slip44();
