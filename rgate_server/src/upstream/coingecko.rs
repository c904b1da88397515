use std::collections::HashMap;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

/// CoinGecko market-data client. Price lookups go by coin id (resolved
/// through the token registry), discovery endpoints return the global
/// feeds that the handlers filter down.
#[derive(Clone)]
pub struct CoinGecko {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceQuote {
    #[serde(rename = "usd")]
    pub usd: Option<f64>,
    #[serde(rename = "usd_24h_vol")]
    pub volume_24h_usd: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TrendingEntry {
    item: TrendingCoin,
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    coins: Vec<TrendingCoin>,
}

impl CoinGecko {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let req = self.client.get(format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(key) => req.header("x-cg-demo-api-key", key),
            None => req,
        }
    }

    /// Spot price and 24h volume for one coin id.
    pub async fn price(&self, coingecko_id: &str) -> Result<PriceQuote> {
        let response = self
            .get("/simple/price")
            .query(&[
                ("ids", coingecko_id),
                ("vs_currencies", "usd"),
                ("include_24hr_vol", "true"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let mut body = response.json::<HashMap<String, PriceQuote>>().await?;

        Ok(body.remove(coingecko_id).unwrap_or_default())
    }

    /// Spot prices for several coin ids at once.
    pub async fn prices(&self, coingecko_ids: &[&str]) -> Result<HashMap<String, PriceQuote>> {
        if coingecko_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let response = self
            .get("/simple/price")
            .query(&[
                ("ids", coingecko_ids.join(",").as_str()),
                ("vs_currencies", "usd"),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<HashMap<String, PriceQuote>>().await?)
    }

    /// Global trending feed.
    pub async fn trending(&self) -> Result<Vec<TrendingCoin>> {
        let response = self
            .get("/search/trending")
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<TrendingResponse>().await?;

        Ok(body.coins.into_iter().map(|entry| entry.item).collect())
    }

    /// Coin search by free-text query.
    pub async fn search(&self, query: &str) -> Result<Vec<TrendingCoin>> {
        let response = self
            .get("/search")
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<SearchResponse>().await?;

        Ok(body.coins)
    }
}
