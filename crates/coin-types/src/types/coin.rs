use crate::{slip44, CoinTypeEntry, UnknownCoinType};
use core::fmt;
use std::str::FromStr;

/// Coins with a registered SLIP-0044 coin type.
///
/// Parses from the coin's name, its registry alias, or its ticker symbol,
/// ignoring case:
///
/// ```
/// # use slip44_coin_types::CoinType;
/// assert_eq!("Ether Classic".parse::<CoinType>(), Ok(CoinType::EthereumClassic));
/// assert_eq!("etc".parse::<CoinType>(), Ok(CoinType::EthereumClassic));
/// assert_eq!(CoinType::EthereumClassic.index(), 61);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum CoinType {
    /// Bitcoin.
    Bitcoin,
    /// Testnet (all coins).
    Testnet,
    /// Litecoin.
    Litecoin,
    /// Dogecoin.
    Dogecoin,
    /// Ethereum.
    Ethereum,
    /// Ethereum Classic.
    EthereumClassic,
    /// Cosmos Hub.
    Cosmos,
    /// Monero.
    Monero,
    /// XRP Ledger.
    Xrp,
    /// Bitcoin Cash.
    BitcoinCash,
    /// Stellar.
    StellarLumens,
    /// EOS.
    Eos,
    /// Tron.
    Tron,
    /// Algorand.
    Algorand,
    /// Polkadot.
    Polkadot,
    /// Filecoin.
    Filecoin,
    /// Solana.
    Solana,
    /// Binance.
    Binance,
    /// Neo.
    Neo,
    /// Tezos.
    Tezos,
    /// Cardano.
    Cardano,
}

impl CoinType {
    /// Every supported coin, in index order.
    pub const ALL: [CoinType; 21] = [
        Self::Bitcoin,
        Self::Testnet,
        Self::Litecoin,
        Self::Dogecoin,
        Self::Ethereum,
        Self::EthereumClassic,
        Self::Cosmos,
        Self::Monero,
        Self::Xrp,
        Self::BitcoinCash,
        Self::StellarLumens,
        Self::Eos,
        Self::Tron,
        Self::Algorand,
        Self::Polkadot,
        Self::Filecoin,
        Self::Solana,
        Self::Binance,
        Self::Neo,
        Self::Tezos,
        Self::Cardano,
    ];

    /// Get the registered SLIP-0044 index.
    pub const fn index(self) -> u32 {
        match self {
            Self::Bitcoin => slip44::BITCOIN,
            Self::Testnet => slip44::TESTNET,
            Self::Litecoin => slip44::LITECOIN,
            Self::Dogecoin => slip44::DOGECOIN,
            Self::Ethereum => slip44::ETHER,
            Self::EthereumClassic => slip44::ETHER_CLASSIC,
            Self::Cosmos => slip44::ATOM,
            Self::Monero => slip44::MONERO,
            Self::Xrp => slip44::XRP,
            Self::BitcoinCash => slip44::BITCOIN_CASH,
            Self::StellarLumens => slip44::STELLAR_LUMENS,
            Self::Eos => slip44::EOS,
            Self::Tron => slip44::TRON,
            Self::Algorand => slip44::ALGORAND,
            Self::Polkadot => slip44::POLKADOT,
            Self::Filecoin => slip44::FILECOIN,
            Self::Solana => slip44::SOLANA,
            Self::Binance => slip44::BINANCE,
            Self::Neo => slip44::NEO,
            Self::Tezos => slip44::TEZOS,
            Self::Cardano => slip44::CARDANO,
        }
    }

    /// Get the index with the hardened bit set, as it appears in the
    /// `coin_type'` level of a BIP-44 path.
    pub const fn hardened_index(self) -> u32 {
        self.index() | slip44::HARDENED_OFFSET
    }

    /// Get the human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Testnet => "Testnet",
            Self::Litecoin => "Litecoin",
            Self::Dogecoin => "Dogecoin",
            Self::Ethereum => "Ethereum",
            Self::EthereumClassic => "Ethereum Classic",
            Self::Cosmos => "Cosmos",
            Self::Monero => "Monero",
            Self::Xrp => "XRP",
            Self::BitcoinCash => "Bitcoin Cash",
            Self::StellarLumens => "Stellar Lumens",
            Self::Eos => "EOS",
            Self::Tron => "Tron",
            Self::Algorand => "Algorand",
            Self::Polkadot => "Polkadot",
            Self::Filecoin => "Filecoin",
            Self::Solana => "Solana",
            Self::Binance => "Binance",
            Self::Neo => "Neo",
            Self::Tezos => "Tezos",
            Self::Cardano => "Cardano",
        }
    }

    /// Get the ticker symbol listed in the registry. `None` for
    /// [`CoinType::Testnet`], which has no symbol of its own.
    pub const fn symbol(self) -> Option<&'static str> {
        Some(match self {
            Self::Bitcoin => "BTC",
            Self::Testnet => return None,
            Self::Litecoin => "LTC",
            Self::Dogecoin => "DOGE",
            Self::Ethereum => "ETH",
            Self::EthereumClassic => "ETC",
            Self::Cosmos => "ATOM",
            Self::Monero => "XMR",
            Self::Xrp => "XRP",
            Self::BitcoinCash => "BCH",
            Self::StellarLumens => "XLM",
            Self::Eos => "EOS",
            Self::Tron => "TRX",
            Self::Algorand => "ALGO",
            Self::Polkadot => "DOT",
            Self::Filecoin => "FIL",
            Self::Solana => "SOL",
            Self::Binance => "BNB",
            Self::Neo => "NEO",
            Self::Tezos => "XTZ",
            Self::Cardano => "ADA",
        })
    }

    /// Get the coin registered at `index`, if it is supported.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|coin| coin.index() == index)
    }

    /// Get the registry entry for this coin.
    pub const fn entry(self) -> CoinTypeEntry {
        CoinTypeEntry::from_static(self.name(), self.index())
    }
}

impl From<CoinType> for u32 {
    fn from(coin: CoinType) -> Self {
        coin.index()
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoinType {
    type Err = UnknownCoinType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(Self::Bitcoin),
            "testnet" => Ok(Self::Testnet),
            "litecoin" | "ltc" => Ok(Self::Litecoin),
            "dogecoin" | "doge" => Ok(Self::Dogecoin),
            "ethereum" | "ether" | "eth" => Ok(Self::Ethereum),
            "ethereum classic" | "ether classic" | "etc" => Ok(Self::EthereumClassic),
            "cosmos" | "cosmos (atom)" | "atom" => Ok(Self::Cosmos),
            "monero" | "xmr" => Ok(Self::Monero),
            "xrp" => Ok(Self::Xrp),
            "bitcoin cash" | "bch" => Ok(Self::BitcoinCash),
            "stellar lumens" | "stellar" | "xlm" => Ok(Self::StellarLumens),
            "eos" => Ok(Self::Eos),
            "tron" | "trx" => Ok(Self::Tron),
            "algorand" | "algo" => Ok(Self::Algorand),
            "polkadot" | "dot" => Ok(Self::Polkadot),
            "filecoin" | "fil" => Ok(Self::Filecoin),
            "solana" | "sol" => Ok(Self::Solana),
            "binance" | "bnb" => Ok(Self::Binance),
            "neo" => Ok(Self::Neo),
            "tezos" | "xtz" => Ok(Self::Tezos),
            "cardano" | "ada" => Ok(Self::Cardano),
            _ => {
                tracing::debug!(name = %s, "unknown coin type");
                Err(UnknownCoinType(s.to_string()))
            }
        }
    }
}

impl serde::Serialize for CoinType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for CoinType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
