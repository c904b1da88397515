use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use log::info;
use rgate_core::{
    helpers::{
        address::Address,
        dto::{App, DataSource, PayerContext},
        utils::now_millis,
    },
    scoring::{ScoreSet, risk_level},
    synthetic,
};

use crate::{
    error::ApiError,
    intelligence::dto::{
        AnalyzeRequest, AnalyzeResponse, MetricsQuery, MetricsResponse, SecurityChecks,
        SecurityQuery, SecurityResponse, TrendingResponse, TrendingToken,
    },
    state::ServerState,
    upstream::{coingecko::TrendingCoin, or_default},
    watch::handler::rank_holders,
};

const HOLDER_SAMPLE_LIMIT: u32 = 1000;
const TX_SAMPLE_LIMIT: u32 = 100;
const TRENDING_LIMIT: usize = 7;

/// Symbol/name substrings that mark a trending entry as Base-relevant.
const BASE_ALLOW_LIST: &[&str] = &[
    "degen", "brett", "aero", "base", "toshi", "mochi", "bald", "higher", "doginme", "keycat",
];

/// Raw upstream signals the scoring heuristics run on. Each branch is
/// fetched concurrently and degrades to zero on failure.
async fn fetch_signals(state: &ServerState, token: &Address) -> (u64, u64, f64) {
    let volume = async {
        match state.registry().resolve(token.as_str()) {
            Some(descriptor) => state
                .coingecko()
                .price(descriptor.coingecko_id)
                .await
                .map(|quote| quote.volume_24h_usd.unwrap_or(0.0)),
            None => Ok(0.0),
        }
    };

    let (holders, txs, volume) = tokio::join!(
        state
            .basescan()
            .token_holders(token.as_str(), HOLDER_SAMPLE_LIMIT),
        state.basescan().tx_list(token.as_str(), TX_SAMPLE_LIMIT),
        volume,
    );

    let holder_count = or_default(holders, "token holders").len() as u64;
    let tx_count = or_default(txs, "transaction list").len() as u64;
    let volume_24h_usd = or_default(volume, "24h volume");

    (holder_count, tx_count, volume_24h_usd)
}

fn parse_token(raw: Option<&str>, usage: &'static str) -> Result<Address, ApiError> {
    raw.and_then(Address::parse)
        .ok_or_else(|| ApiError::bad_request("invalid or missing 'token'", Some(usage)))
}

#[utoipa::path(
    get,
    path = "/api/v1/ai/metrics",
    description = "On-chain activity metrics and scores for a Base token",
    responses(
        (status = 200, description = "Success", body = MetricsResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn metrics(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let token = parse_token(query.token.as_deref(), "/api/v1/ai/metrics?token=0x...")?;

    let (holder_count, tx_count, volume_24h_usd) = fetch_signals(&state, &token).await;
    let scores = ScoreSet::from_signals(holder_count, tx_count, volume_24h_usd);

    Ok(Json(MetricsResponse {
        app: App::Intelligence,
        token: token.to_string(),
        holder_count,
        tx_count,
        volume_24h_usd,
        overall: scores.overall(),
        scores,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/ai/analyze",
    request_body = AnalyzeRequest,
    description = "AI-powered token analysis",
    responses(
        (status = 200, description = "Success", body = AnalyzeResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn analyze(
    State(state): State<Arc<ServerState>>,
    Extension(payer): Extension<PayerContext>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let token = parse_token(
        request.token.as_deref(),
        "POST /api/v1/ai/analyze {\"token\": \"0x...\", \"depth\": \"deep\"}",
    )?;

    info!("analysis of {} requested by {}", token, payer.payer);

    let deep = request.depth.as_deref() == Some("deep");

    let (holder_count, tx_count, volume_24h_usd) = fetch_signals(&state, &token).await;
    let scores = ScoreSet::from_signals(holder_count, tx_count, volume_24h_usd);
    let overall = scores.overall();

    let top_holders = if deep {
        let holders = or_default(
            state.basescan().token_holders(token.as_str(), 5).await,
            "token holders",
        );
        Some(rank_holders(&holders))
    } else {
        None
    };

    Ok(Json(AnalyzeResponse {
        app: App::Intelligence,
        token: token.to_string(),
        overall,
        sentiment: scores.sentiment(),
        confidence: overall as f64 / 100.0,
        recommendation: scores.recommendation().to_string(),
        depth: if deep { "deep" } else { "basic" }.to_string(),
        scores: deep.then_some(scores),
        top_holders,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/ai/security",
    description = "Security screening for a Base token",
    responses(
        (status = 200, description = "Success", body = SecurityResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn security(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SecurityQuery>,
) -> Result<Json<SecurityResponse>, ApiError> {
    let token = parse_token(query.token.as_deref(), "/api/v1/ai/security?token=0x...")?;

    let (holders, txs, source) = tokio::join!(
        state
            .basescan()
            .token_holders(token.as_str(), HOLDER_SAMPLE_LIMIT),
        state.basescan().tx_list(token.as_str(), TX_SAMPLE_LIMIT),
        state.basescan().contract_source(token.as_str()),
    );

    let source = or_default(source, "contract source");
    let checks = SecurityChecks {
        verified: source.as_ref().map(|s| s.is_verified()).unwrap_or(false),
        has_source: source
            .as_ref()
            .map(|s| !s.source_code.is_empty())
            .unwrap_or(false),
        has_holders: !or_default(holders, "token holders").is_empty(),
        has_transactions: !or_default(txs, "transaction list").is_empty(),
    };

    let false_checks = [
        checks.verified,
        checks.has_source,
        checks.has_holders,
        checks.has_transactions,
    ]
    .iter()
    .filter(|check| !**check)
    .count();

    Ok(Json(SecurityResponse {
        app: App::Intelligence,
        token: token.to_string(),
        checks,
        risk_level: risk_level(false_checks),
        ownership_concentration_pct: synthetic::ownership_concentration(),
        concentration_source: DataSource::Synthetic,
        timestamp: now_millis(),
    }))
}

/// Keep the entries whose symbol or name matches the Base allow-list.
pub fn filter_base_relevant(coins: Vec<TrendingCoin>) -> Vec<TrendingCoin> {
    coins
        .into_iter()
        .filter(|coin| {
            let symbol = coin.symbol.to_ascii_lowercase();
            let name = coin.name.to_ascii_lowercase();
            BASE_ALLOW_LIST
                .iter()
                .any(|needle| symbol.contains(needle) || name.contains(needle))
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/ai/trending",
    description = "Trending tokens on Base right now",
    responses(
        (status = 200, description = "Success", body = TrendingResponse),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn trending(State(state): State<Arc<ServerState>>) -> Json<TrendingResponse> {
    let feed = or_default(state.coingecko().trending().await, "trending feed");

    let tokens = filter_base_relevant(feed)
        .into_iter()
        .take(TRENDING_LIMIT)
        .map(|coin| TrendingToken {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            market_cap_rank: coin.market_cap_rank,
            ai_score: synthetic::ai_score(),
        })
        .collect();

    Json(TrendingResponse {
        app: App::Intelligence,
        tokens,
        ai_score_source: DataSource::Synthetic,
        timestamp: now_millis(),
    })
}
