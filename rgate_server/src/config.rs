use std::env;

use rgate_core::helpers::address::Address;

pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_BASESCAN_URL: &str = "https://api.basescan.org/api";
pub const DEFAULT_BASE_RPC_URL: &str = "https://mainnet.base.org";

/// Process-wide configuration, resolved once at startup. Required
/// variables fail fast here; there are deliberately no baked-in fallback
/// keys or payment addresses.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub pay_to: Address,
    pub basescan_api_key: String,
    pub coingecko_api_key: Option<String>,
    pub coingecko_url: String,
    pub basescan_url: String,
    pub base_rpc_url: String,
    pub facilitator_url: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let pay_to = env::var("PAY_TO_ADDRESS")
            .expect("PAY_TO_ADDRESS environment variable not set")
            .parse::<Address>()
            .expect("PAY_TO_ADDRESS is not a valid address");

        let basescan_api_key =
            env::var("BASESCAN_API_KEY").expect("BASESCAN_API_KEY environment variable not set");

        Self {
            pay_to,
            basescan_api_key,
            coingecko_api_key: env::var("COINGECKO_API_KEY").ok(),
            coingecko_url: env::var("COINGECKO_URL")
                .unwrap_or_else(|_| DEFAULT_COINGECKO_URL.to_string()),
            basescan_url: env::var("BASESCAN_URL")
                .unwrap_or_else(|_| DEFAULT_BASESCAN_URL.to_string()),
            base_rpc_url: env::var("BASE_RPC_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_RPC_URL.to_string()),
            facilitator_url: env::var("FACILITATOR_URL").ok(),
        }
    }
}
