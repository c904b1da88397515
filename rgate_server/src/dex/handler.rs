use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use log::warn;
use rgate_core::{
    helpers::{
        address::Address,
        dto::{App, DataSource},
        utils::now_millis,
    },
    synthetic,
};

use crate::{
    dex::dto::{GasResponse, Pool, PoolsQuery, PoolsResponse, QuoteQuery, QuoteResponse},
    error::ApiError,
    state::ServerState,
};

/// Used when `eth_gasPrice` is unreachable; 0.05 gwei is a typical Base
/// base fee.
pub const FALLBACK_GAS_PRICE_WEI: u64 = 50_000_000;

const LIQUIDITY_SOURCES: &[&str] = &["Uniswap V3", "Aerodrome", "BaseSwap"];

/// Indicative rates for the pairs the gateway quotes deterministically.
/// Everything else falls through to the labeled synthetic generator.
const STATIC_RATES: &[(&str, &str, f64)] = &[
    ("ETH", "USDC", 3245.50),
    ("WETH", "USDC", 3245.50),
    ("USDC", "ETH", 0.000308),
    ("ETH", "DEGEN", 264_000.0),
    ("DEGEN", "USDC", 0.0123),
    ("AERO", "USDC", 1.27),
    ("CBETH", "USDC", 3498.25),
    ("USDC", "DAI", 0.9998),
];

fn static_rate(from: &str, to: &str) -> Option<f64> {
    let from = from.to_ascii_uppercase();
    let to = to.to_ascii_uppercase();
    STATIC_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
}

pub fn gas_tiers(base_fee_wei: u64) -> (f64, f64, f64) {
    let standard = base_fee_wei as f64 / 1e9;
    (standard * 0.8, standard, standard * 1.5)
}

#[utoipa::path(
    get,
    path = "/api/v1/dex/quote",
    description = "Indicative swap quote between two Base tokens",
    responses(
        (status = 200, description = "Success", body = QuoteResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn quote(Query(query): Query<QuoteQuery>) -> Result<Json<QuoteResponse>, ApiError> {
    const USAGE: &str = "/api/v1/dex/quote?from=ETH&to=USDC&amount=1";

    let from = query
        .from
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing 'from' parameter", Some(USAGE)))?;
    let to = query
        .to
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing 'to' parameter", Some(USAGE)))?;
    let amount_in = query
        .amount
        .as_deref()
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|amount| *amount > 0.0 && amount.is_finite())
        .ok_or_else(|| ApiError::bad_request("'amount' must be a positive number", Some(USAGE)))?;

    let (rate, data_source) = match static_rate(&from, &to) {
        Some(rate) => (rate, DataSource::StaticTable),
        None => (synthetic::fallback_rate(), DataSource::Synthetic),
    };

    Ok(Json(QuoteResponse {
        app: App::Exchange,
        from: from.to_ascii_uppercase(),
        to: to.to_ascii_uppercase(),
        amount_in,
        rate,
        amount_out: amount_in * rate,
        price_impact_pct: synthetic::price_impact(amount_in),
        estimated_gas: synthetic::swap_gas_estimate(),
        sources: LIQUIDITY_SOURCES.iter().map(|s| s.to_string()).collect(),
        data_source,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/dex/pools",
    description = "Liquidity pools for a Base token",
    responses(
        (status = 200, description = "Success", body = PoolsResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn pools(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PoolsQuery>,
) -> Result<Json<PoolsResponse>, ApiError> {
    const USAGE: &str = "/api/v1/dex/pools?token=0x...";

    let symbol = match &query.token {
        Some(raw) => {
            let token = Address::parse(raw)
                .ok_or_else(|| ApiError::bad_request("invalid token address", Some(USAGE)))?;
            state
                .registry()
                .resolve(token.as_str())
                .map(|descriptor| descriptor.symbol.to_string())
                .unwrap_or_else(|| "TOKEN".to_string())
        }
        None => "WETH".to_string(),
    };

    let pools = LIQUIDITY_SOURCES
        .iter()
        .map(|dex| Pool {
            dex: dex.to_string(),
            pair: format!("{symbol}/USDC"),
            tvl_usd: synthetic::pool_tvl_usd(),
            volume_24h_usd: synthetic::pool_volume_usd(),
            apr_pct: synthetic::pool_apr(),
        })
        .collect();

    Ok(Json(PoolsResponse {
        app: App::Exchange,
        token: query.token,
        pools,
        data_source: DataSource::Synthetic,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/dex/gas",
    description = "Current Base gas price with slow/standard/fast tiers",
    responses(
        (status = 200, description = "Success", body = GasResponse),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn gas(State(state): State<Arc<ServerState>>) -> Json<GasResponse> {
    let base_fee_wei = match state.rpc().gas_price_wei().await {
        Ok(wei) => wei,
        Err(e) => {
            warn!("eth_gasPrice failed, using fallback: {e}");
            FALLBACK_GAS_PRICE_WEI
        }
    };

    let (slow_gwei, standard_gwei, fast_gwei) = gas_tiers(base_fee_wei);

    Json(GasResponse {
        app: App::Exchange,
        base_fee_wei,
        slow_gwei,
        standard_gwei,
        fast_gwei,
        timestamp: now_millis(),
    })
}
