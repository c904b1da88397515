use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Minimal JSON-RPC client against a Base execution node.
#[derive(Clone)]
pub struct BaseRpc {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<serde_json::Value>,
}

impl BaseRpc {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    async fn call(&self, rpc_method: &str, params: serde_json::Value) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "jsonrpc": "2.0",
                "method": rpc_method,
                "params": params,
                "id": 1,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<RpcResponse>().await?;

        if let Some(error) = body.error {
            return Err(anyhow!("rpc error from {}: {}", rpc_method, error));
        }

        body.result
            .ok_or_else(|| anyhow!("rpc {} returned no result", rpc_method))
    }

    /// Current gas price in wei via `eth_gasPrice`.
    pub async fn gas_price_wei(&self) -> Result<u64> {
        let hex = self.call("eth_gasPrice", json!([])).await?;
        parse_hex_quantity(&hex).context("eth_gasPrice result")
    }
}

fn parse_hex_quantity(hex: &str) -> Result<u64> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| anyhow!("quantity missing 0x prefix: {hex}"))?;
    Ok(u64::from_str_radix(digits, 16)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x2faf080").unwrap(), 50_000_000);
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert!(parse_hex_quantity("2faf080").is_err());
        assert!(parse_hex_quantity("0xzz").is_err());
    }

    #[tokio::test]
    async fn test_gas_price_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(
                serde_json::json!({ "method": "eth_gasPrice" }),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0", "id": 1, "result": "0x2faf080"
            })))
            .mount(&server)
            .await;

        let rpc = BaseRpc::new(server.uri());
        assert_eq!(rpc.gas_price_wei().await.unwrap(), 50_000_000);
    }

    #[tokio::test]
    async fn test_rpc_error_surfaces() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jsonrpc": "2.0", "id": 1,
                "error": { "code": -32601, "message": "method not found" }
            })))
            .mount(&server)
            .await;

        let rpc = BaseRpc::new(server.uri());
        assert!(rpc.gas_price_wei().await.is_err());
    }
}
