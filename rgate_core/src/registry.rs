use std::collections::HashMap;

/// Canonical market-data identity of a token contract known to the
/// gateway: the CoinGecko id used for price lookups, the display symbol,
/// and the ERC-20 decimal precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub coingecko_id: &'static str,
    pub symbol: &'static str,
    pub decimals: u32,
}

/// Static registry of well-known Base mainnet tokens, keyed by
/// lower-cased contract address. Built once at startup; lookups for
/// unregistered contracts are a normal outcome, not an error.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<&'static str, TokenDescriptor>,
}

const BASE_TOKENS: &[(&str, &str, &str, u32)] = &[
    (
        "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
        "usd-coin",
        "USDC",
        6,
    ),
    (
        "0x4200000000000000000000000000000000000006",
        "weth",
        "WETH",
        18,
    ),
    (
        "0x4ed4e862860bed51a9570b96d89af5e1b0efefed",
        "degen-base",
        "DEGEN",
        18,
    ),
    (
        "0x940181a94a35a4569e4529a3cdfb74e38fd98631",
        "aerodrome-finance",
        "AERO",
        18,
    ),
    (
        "0x2ae3f1ec7f1f5012cfeab0185bfc7aa3cf0dec22",
        "coinbase-wrapped-staked-eth",
        "cbETH",
        18,
    ),
    (
        "0xcbb7c0000ab88b473b1f5afd9ef808440eed33bf",
        "coinbase-wrapped-btc",
        "cbBTC",
        8,
    ),
    (
        "0x50c5725949a6f0c72e6c4a641f24049a917db0cb",
        "dai",
        "DAI",
        18,
    ),
];

impl TokenRegistry {
    /// The built-in Base mainnet registry.
    pub fn base() -> Self {
        let tokens = BASE_TOKENS
            .iter()
            .map(|(address, id, symbol, decimals)| {
                (
                    *address,
                    TokenDescriptor {
                        coingecko_id: id,
                        symbol,
                        decimals: *decimals,
                    },
                )
            })
            .collect();

        Self { tokens }
    }

    /// Case-insensitive lookup. `None` means the contract is simply not
    /// pre-registered.
    pub fn resolve(&self, address: &str) -> Option<&TokenDescriptor> {
        self.tokens.get(address.to_ascii_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
