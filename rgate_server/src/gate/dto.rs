use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};

/// USDC contract on Base mainnet, the settlement asset for every route.
pub const SETTLEMENT_ASSET: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";

pub const X402_VERSION: u8 = 1;

/// Declarative payment terms for one route, in the x402 wire shape. Built
/// from the route-metadata table; the facilitator receives the same
/// object it would have advertised.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub scheme: String,
    pub network: String,
    /// Price in atomic USDC units (6 decimals), as a decimal string.
    pub max_amount_required: String,
    pub resource: String,
    pub description: String,
    pub mime_type: String,
    pub pay_to: String,
    pub max_timeout_seconds: u64,
    pub asset: String,
}

/// 402 body: the gate's reject outcome. Lists what the caller must pay
/// to retry.
#[derive(Debug, Serialize, ToResponse)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequired {
    pub x402_version: u8,
    pub error: String,
    pub accepts: Vec<PaymentRequirements>,
}

impl PaymentRequired {
    pub fn new(error: &str, accepts: Vec<PaymentRequirements>) -> Self {
        Self {
            x402_version: X402_VERSION,
            error: error.to_string(),
            accepts,
        }
    }
}

impl IntoResponse for PaymentRequired {
    fn into_response(self) -> Response {
        (StatusCode::PAYMENT_REQUIRED, Json(self)).into_response()
    }
}
