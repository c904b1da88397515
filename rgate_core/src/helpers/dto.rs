use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Logical sub-product a v1 route belongs to. Serialized into the `app`
/// field of every versioned response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum App {
    #[serde(rename = "rExchange")]
    Exchange,
    #[serde(rename = "rWatch")]
    Watch,
    #[serde(rename = "rIntelligence")]
    Intelligence,
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            App::Exchange => write!(f, "rExchange"),
            App::Watch => write!(f, "rWatch"),
            App::Intelligence => write!(f, "rIntelligence"),
        }
    }
}

/// Where the numbers in a response came from. Synthetic figures are
/// deliberately labeled so a live source can replace the generator without
/// touching the handler contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    Live,
    StaticTable,
    Synthetic,
}

/// Per-request payer identity established by the payment gate before the
/// handler runs. `payer` is `"demo"` for bypassed requests.
#[derive(Debug, Clone)]
pub struct PayerContext {
    pub payer: String,
    pub paid: bool,
}

impl PayerContext {
    pub fn demo() -> Self {
        Self {
            payer: "demo".to_string(),
            paid: false,
        }
    }

    pub fn paid(payer: String) -> Self {
        Self { payer, paid: true }
    }
}

/// One aggregated token position inside a portfolio response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub contract: String,
    pub symbol: String,
    pub balance: f64,
    pub usd_value: f64,
}
