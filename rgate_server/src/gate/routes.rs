use rgate_core::helpers::{dto::App, utils::price_to_atomic_usdc};

use crate::gate::dto::{PaymentRequirements, SETTLEMENT_ASSET};

/// One field of a JSON request body, declared alongside the route's
/// price so clients can discover the input shape from the 402/docs.
#[derive(Debug, Clone, Copy)]
pub struct BodyField {
    pub name: &'static str,
    pub ty: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Declarative metadata for one priced route: the single source of truth
/// consumed by the payment gate, the health route list, and the 402
/// payment-requirements body.
#[derive(Debug, Clone, Copy)]
pub struct RouteMeta {
    pub method: &'static str,
    pub path: &'static str,
    pub price: &'static str,
    pub network: &'static str,
    pub description: &'static str,
    pub app: Option<App>,
    pub body: Option<&'static [BodyField]>,
}

const ANALYZE_BODY: &[BodyField] = &[
    BodyField {
        name: "token",
        ty: "string",
        required: true,
        description: "Token contract address",
    },
    BodyField {
        name: "depth",
        ty: "string",
        required: false,
        description: "\"basic\" (default) or \"deep\"",
    },
];

pub const PRICED_ROUTES: &[RouteMeta] = &[
    RouteMeta {
        method: "GET",
        path: "/api/v1/dex/quote",
        price: "$0.003",
        network: "base",
        description: "Indicative swap quote between two Base tokens",
        app: Some(App::Exchange),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/dex/pools",
        price: "$0.002",
        network: "base",
        description: "Liquidity pools for a Base token",
        app: Some(App::Exchange),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/dex/gas",
        price: "$0.001",
        network: "base",
        description: "Current Base gas price with slow/standard/fast tiers",
        app: Some(App::Exchange),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/watch/balance",
        price: "$0.002",
        network: "base",
        description: "Native and token balances for any address on Base",
        app: Some(App::Watch),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/watch/history",
        price: "$0.003",
        network: "base",
        description: "Recent transactions for any address on Base",
        app: Some(App::Watch),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/watch/token-holders",
        price: "$0.005",
        network: "base",
        description: "Top holders of a Base token (percentages are relative \
                      to the largest holder, not total supply)",
        app: Some(App::Watch),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/ai/metrics",
        price: "$0.005",
        network: "base",
        description: "On-chain activity metrics and scores for a Base token",
        app: Some(App::Intelligence),
        body: None,
    },
    RouteMeta {
        method: "POST",
        path: "/api/v1/ai/analyze",
        price: "$0.01",
        network: "base",
        description: "AI-powered token analysis",
        app: Some(App::Intelligence),
        body: Some(ANALYZE_BODY),
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/ai/trending",
        price: "$0.002",
        network: "base",
        description: "Trending tokens on Base right now",
        app: Some(App::Intelligence),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/v1/ai/security",
        price: "$0.01",
        network: "base",
        description: "Security screening for a Base token",
        app: Some(App::Intelligence),
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/price/{token}",
        price: "$0.001",
        network: "base",
        description: "Get current token price on Base (from CoinGecko)",
        app: None,
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/portfolio/{address}",
        price: "$0.005",
        network: "base",
        description: "Get portfolio holdings for any address on Base",
        app: None,
        body: None,
    },
    RouteMeta {
        method: "GET",
        path: "/api/search",
        price: "$0.002",
        network: "base",
        description: "Search tokens by name or symbol",
        app: None,
        body: None,
    },
];

/// Look a route up by its registered (pattern) path.
pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    PRICED_ROUTES.iter().find(|meta| meta.path == path)
}

impl RouteMeta {
    /// The x402 requirements a caller must satisfy for this route.
    pub fn requirements(&self, pay_to: &str) -> PaymentRequirements {
        PaymentRequirements {
            scheme: "exact".to_string(),
            network: self.network.to_string(),
            max_amount_required: price_to_atomic_usdc(self.price)
                .unwrap_or_default()
                .to_string(),
            resource: self.path.to_string(),
            description: self.description.to_string(),
            mime_type: "application/json".to_string(),
            pay_to: pay_to.to_string(),
            max_timeout_seconds: 60,
            asset: SETTLEMENT_ASSET.to_string(),
        }
    }
}
