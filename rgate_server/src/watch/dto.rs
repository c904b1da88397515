use rgate_core::helpers::dto::{App, Holding};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub address: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub app: App,
    pub address: String,
    pub native_balance_eth: f64,
    pub holdings: Vec<Holding>,
    pub total_value_usd: f64,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub address: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TxRecord {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value_eth: f64,
    pub gas_price_gwei: f64,
    pub block_number: String,
    pub time_stamp: String,
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub app: App,
    pub address: String,
    pub transactions: Vec<TxRecord>,
    pub timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub struct HoldersQuery {
    pub token: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HolderEntry {
    pub rank: usize,
    pub address: String,
    pub balance: String,
    /// Share of the largest holder's balance, not of total supply.
    pub percent_of_top_holder: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldersResponse {
    pub app: App,
    pub token: String,
    pub holders: Vec<HolderEntry>,
    pub timestamp: i64,
}
