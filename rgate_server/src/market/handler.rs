use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use log::warn;
use rgate_core::helpers::{address::Address, utils::now_millis};

use crate::{
    error::ApiError,
    market::dto::{PortfolioResponse, PriceResponse, SearchQuery, SearchResponse, SearchResult},
    state::ServerState,
    upstream::or_default,
    watch::handler::aggregate_portfolio,
};

const SEARCH_LIMIT: usize = 10;

#[utoipa::path(
    get,
    path = "/api/price/{token}",
    description = "Get current token price on Base (from CoinGecko)",
    responses(
        (status = 200, description = "Success", body = PriceResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn price(
    State(state): State<Arc<ServerState>>,
    Path(token): Path<String>,
) -> Result<Json<PriceResponse>, ApiError> {
    let token = Address::parse(&token).ok_or_else(|| {
        ApiError::bad_request("invalid token address", Some("/api/price/0x..."))
    })?;

    // Not pre-registered is a normal outcome, not an error.
    let Some(descriptor) = state.registry().resolve(token.as_str()) else {
        return Ok(Json(PriceResponse {
            token: token.to_string(),
            symbol: None,
            price: None,
            note: Some("unknown token".to_string()),
            timestamp: now_millis(),
        }));
    };

    let price = match state.coingecko().price(descriptor.coingecko_id).await {
        Ok(quote) => quote.usd,
        Err(e) => {
            warn!("price lookup failed for {}: {e}", descriptor.coingecko_id);
            None
        }
    };

    Ok(Json(PriceResponse {
        token: token.to_string(),
        symbol: Some(descriptor.symbol.to_string()),
        price,
        note: None,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{address}",
    description = "Get portfolio holdings for any address on Base",
    responses(
        (status = 200, description = "Success", body = PortfolioResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn portfolio(
    State(state): State<Arc<ServerState>>,
    Path(address): Path<String>,
) -> Result<Json<PortfolioResponse>, ApiError> {
    let address = Address::parse(&address).ok_or_else(|| {
        ApiError::bad_request("invalid address", Some("/api/portfolio/0x..."))
    })?;

    let (native_balance_eth, holdings, total_value_usd) =
        aggregate_portfolio(&state, &address).await;

    Ok(Json(PortfolioResponse {
        address: address.to_string(),
        native_balance_eth,
        holdings,
        total_value_usd,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/search",
    description = "Search tokens by name or symbol",
    responses(
        (status = 200, description = "Success", body = SearchResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let q = query
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("missing 'q' parameter", Some("/api/search?q=degen")))?;

    let coins = or_default(state.coingecko().search(&q).await, "coin search");

    let results = coins
        .into_iter()
        .take(SEARCH_LIMIT)
        .map(|coin| SearchResult {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            market_cap_rank: coin.market_cap_rank,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: q,
        results,
        timestamp: now_millis(),
    }))
}
