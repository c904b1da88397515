use rgate_core::helpers::dto::{App, DataSource};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub app: App,
    pub from: String,
    pub to: String,
    pub amount_in: f64,
    pub rate: f64,
    pub amount_out: f64,
    pub price_impact_pct: f64,
    pub estimated_gas: u64,
    pub sources: Vec<String>,
    pub data_source: DataSource,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub struct PoolsQuery {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub dex: String,
    pub pair: String,
    pub tvl_usd: f64,
    pub volume_24h_usd: f64,
    pub apr_pct: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoolsResponse {
    pub app: App,
    pub token: Option<String>,
    pub pools: Vec<Pool>,
    pub data_source: DataSource,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GasResponse {
    pub app: App,
    pub base_fee_wei: u64,
    pub slow_gwei: f64,
    pub standard_gwei: f64,
    pub fast_gwei: f64,
    pub timestamp: i64,
}
