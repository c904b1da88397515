use rgate_core::{
    helpers::dto::{App, DataSource, Holding},
    scoring::{RiskLevel, ScoreSet, Sentiment},
};
use utoipa::OpenApi;

use crate::{dex, gate, health, intelligence, market, watch};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::health,
        dex::handler::quote,
        dex::handler::pools,
        dex::handler::gas,
        watch::handler::balance,
        watch::handler::history,
        watch::handler::token_holders,
        intelligence::handler::metrics,
        intelligence::handler::analyze,
        intelligence::handler::trending,
        intelligence::handler::security,
        market::handler::price,
        market::handler::portfolio,
        market::handler::search,
    ),
    components(schemas(
        App,
        DataSource,
        Holding,
        ScoreSet,
        Sentiment,
        RiskLevel,
        health::dto::Health,
        health::dto::RouteInfo,
        dex::dto::QuoteResponse,
        dex::dto::Pool,
        dex::dto::PoolsResponse,
        dex::dto::GasResponse,
        watch::dto::BalanceResponse,
        watch::dto::TxRecord,
        watch::dto::HistoryResponse,
        watch::dto::HolderEntry,
        watch::dto::HoldersResponse,
        intelligence::dto::MetricsResponse,
        intelligence::dto::AnalyzeRequest,
        intelligence::dto::AnalyzeResponse,
        intelligence::dto::SecurityChecks,
        intelligence::dto::SecurityResponse,
        intelligence::dto::TrendingToken,
        intelligence::dto::TrendingResponse,
        market::dto::PriceResponse,
        market::dto::PortfolioResponse,
        market::dto::SearchResult,
        market::dto::SearchResponse,
        gate::dto::PaymentRequirements,
    ))
)]
pub struct ApiDoc;
