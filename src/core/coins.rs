//! Static registry of supported coins and their identifiers across data
//! sources. CoinGecko uses slug ids, Yahoo Finance uses `XXX-USD` tickers.

#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub name: &'static str,
    pub coingecko_id: &'static str,
    pub yahoo_ticker: &'static str,
    pub symbol: &'static str,
}

pub const COINS: &[Coin] = &[
    Coin {
        name: "Bitcoin",
        coingecko_id: "bitcoin",
        yahoo_ticker: "BTC-USD",
        symbol: "₿",
    },
    Coin {
        name: "Ethereum",
        coingecko_id: "ethereum",
        yahoo_ticker: "ETH-USD",
        symbol: "Ξ",
    },
    Coin {
        name: "Tether",
        coingecko_id: "tether",
        yahoo_ticker: "USDT-USD",
        symbol: "$",
    },
    Coin {
        name: "BNB",
        coingecko_id: "binancecoin",
        yahoo_ticker: "BNB-USD",
        symbol: "BNB",
    },
    Coin {
        name: "Solana",
        coingecko_id: "solana",
        yahoo_ticker: "SOL-USD",
        symbol: "◎",
    },
    Coin {
        name: "XRP",
        coingecko_id: "ripple",
        yahoo_ticker: "XRP-USD",
        symbol: "XRP",
    },
    Coin {
        name: "USDC",
        coingecko_id: "usd-coin",
        yahoo_ticker: "USDC-USD",
        symbol: "$",
    },
    Coin {
        name: "Dogecoin",
        coingecko_id: "dogecoin",
        yahoo_ticker: "DOGE-USD",
        symbol: "Ð",
    },
    Coin {
        name: "Cardano",
        coingecko_id: "cardano",
        yahoo_ticker: "ADA-USD",
        symbol: "₳",
    },
    Coin {
        name: "Avalanche",
        coingecko_id: "avalanche-2",
        yahoo_ticker: "AVAX-USD",
        symbol: "AVAX",
    },
    Coin {
        name: "Shiba Inu",
        coingecko_id: "shiba-inu",
        yahoo_ticker: "SHIB-USD",
        symbol: "SHIB",
    },
    Coin {
        name: "TRON",
        coingecko_id: "tron",
        yahoo_ticker: "TRX-USD",
        symbol: "TRX",
    },
    Coin {
        name: "Polkadot",
        coingecko_id: "polkadot",
        yahoo_ticker: "DOT-USD",
        symbol: "DOT",
    },
    Coin {
        name: "Chainlink",
        coingecko_id: "chainlink",
        yahoo_ticker: "LINK-USD",
        symbol: "LINK",
    },
    Coin {
        name: "Polygon",
        coingecko_id: "matic-network",
        yahoo_ticker: "MATIC-USD",
        symbol: "MATIC",
    },
    Coin {
        name: "Litecoin",
        coingecko_id: "litecoin",
        yahoo_ticker: "LTC-USD",
        symbol: "Ł",
    },
    Coin {
        name: "Bitcoin Cash",
        coingecko_id: "bitcoin-cash",
        yahoo_ticker: "BCH-USD",
        symbol: "BCH",
    },
    Coin {
        name: "Uniswap",
        coingecko_id: "uniswap",
        yahoo_ticker: "UNI1-USD",
        symbol: "UNI",
    },
    Coin {
        name: "Internet Computer",
        coingecko_id: "internet-computer",
        yahoo_ticker: "ICP-USD",
        symbol: "ICP",
    },
    Coin {
        name: "Stellar",
        coingecko_id: "stellar",
        yahoo_ticker: "XLM-USD",
        symbol: "XLM",
    },
    Coin {
        name: "OKB",
        coingecko_id: "okb",
        yahoo_ticker: "OKB-USD",
        symbol: "OKB",
    },
    Coin {
        name: "Monero",
        coingecko_id: "monero",
        yahoo_ticker: "XMR-USD",
        symbol: "XMR",
    },
    Coin {
        name: "Ethereum Classic",
        coingecko_id: "ethereum-classic",
        yahoo_ticker: "ETC-USD",
        symbol: "ETC",
    },
    Coin {
        name: "Cosmos",
        coingecko_id: "cosmos",
        yahoo_ticker: "ATOM-USD",
        symbol: "ATOM",
    },
    Coin {
        name: "Filecoin",
        coingecko_id: "filecoin",
        yahoo_ticker: "FIL-USD",
        symbol: "FIL",
    },
    Coin {
        name: "Aptos",
        coingecko_id: "aptos",
        yahoo_ticker: "APT-USD",
        symbol: "APT",
    },
    Coin {
        name: "Lido DAO",
        coingecko_id: "lido-dao",
        yahoo_ticker: "LDO-USD",
        symbol: "LDO",
    },
    Coin {
        name: "Hedera",
        coingecko_id: "hedera-hashgraph",
        yahoo_ticker: "HBAR-USD",
        symbol: "HBAR",
    },
    Coin {
        name: "Arbitrum",
        coingecko_id: "arbitrum",
        yahoo_ticker: "ARB-USD",
        symbol: "ARB",
    },
    Coin {
        name: "VeChain",
        coingecko_id: "vechain",
        yahoo_ticker: "VET-USD",
        symbol: "VET",
    },
    Coin {
        name: "Maker",
        coingecko_id: "maker",
        yahoo_ticker: "MKR-USD",
        symbol: "MKR",
    },
    Coin {
        name: "Optimism",
        coingecko_id: "optimism",
        yahoo_ticker: "OP-USD",
        symbol: "OP",
    },
];

/// Looks up a coin by display name, CoinGecko id, or Yahoo ticker,
/// case-insensitively.
pub fn find(query: &str) -> Option<&'static Coin> {
    let query = query.trim();
    COINS.iter().find(|c| {
        c.name.eq_ignore_ascii_case(query)
            || c.coingecko_id.eq_ignore_ascii_case(query)
            || c.yahoo_ticker.eq_ignore_ascii_case(query)
    })
}
