use rgate_core::{
    helpers::dto::{App, DataSource},
    scoring::{RiskLevel, ScoreSet, Sentiment},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::watch::dto::HolderEntry;

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub app: App,
    pub token: String,
    pub holder_count: u64,
    pub tx_count: u64,
    pub volume_24h_usd: f64,
    pub scores: ScoreSet,
    pub overall: u8,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Token contract address.
    pub token: Option<String>,
    /// "basic" (default) or "deep".
    pub depth: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub app: App,
    pub token: String,
    pub overall: u8,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub recommendation: String,
    pub depth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_holders: Option<Vec<HolderEntry>>,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub struct SecurityQuery {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityChecks {
    pub verified: bool,
    pub has_source: bool,
    pub has_holders: bool,
    pub has_transactions: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityResponse {
    pub app: App,
    pub token: String,
    pub checks: SecurityChecks,
    pub risk_level: RiskLevel,
    /// Estimated share of supply in the top wallets; synthetic figure.
    pub ownership_concentration_pct: f64,
    pub concentration_source: DataSource,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendingToken {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub ai_score: u8,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendingResponse {
    pub app: App,
    pub tokens: Vec<TrendingToken>,
    pub ai_score_source: DataSource,
    pub timestamp: i64,
}
