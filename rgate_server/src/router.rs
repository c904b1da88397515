use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    config::GatewayConfig,
    dex,
    docs::{dto::ApiDoc, handler::api_docs},
    gate::handler::paywall,
    health::handler::health,
    intelligence, market,
    state::ServerState,
    upstream::{basescan::Basescan, coingecko::CoinGecko, facilitator::Facilitator, rpc::BaseRpc},
    watch,
};

pub async fn router() -> Router {
    let config = GatewayConfig::from_env();

    let coingecko = CoinGecko::new(
        config.coingecko_url.clone(),
        config.coingecko_api_key.clone(),
    );
    let basescan = Basescan::new(config.basescan_url.clone(), config.basescan_api_key.clone());
    let rpc = BaseRpc::new(config.base_rpc_url.clone());
    let facilitator = Facilitator::new(config.facilitator_url.clone());

    let state = Arc::new(ServerState::from((
        config,
        coingecko,
        basescan,
        rpc,
        facilitator,
    )));

    router_with_state(state)
}

pub fn router_with_state(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    let priced = Router::new()
        .route("/api/v1/dex/quote", get(dex::handler::quote))
        .route("/api/v1/dex/pools", get(dex::handler::pools))
        .route("/api/v1/dex/gas", get(dex::handler::gas))
        .route("/api/v1/watch/balance", get(watch::handler::balance))
        .route("/api/v1/watch/history", get(watch::handler::history))
        .route(
            "/api/v1/watch/token-holders",
            get(watch::handler::token_holders),
        )
        .route("/api/v1/ai/metrics", get(intelligence::handler::metrics))
        .route("/api/v1/ai/analyze", post(intelligence::handler::analyze))
        .route("/api/v1/ai/trending", get(intelligence::handler::trending))
        .route("/api/v1/ai/security", get(intelligence::handler::security))
        .route("/api/price/{token}", get(market::handler::price))
        .route("/api/portfolio/{address}", get(market::handler::portfolio))
        .route("/api/search", get(market::handler::search))
        .route_layer(middleware::from_fn_with_state(state.clone(), paywall));

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .merge(priced)
        .route("/health", get(health))
        .route("/docs", get(api_docs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::util::ServiceExt;

    // Upstream URLs point at an unroutable port, so every upstream branch
    // fails and exercises the fallback path.
    fn test_state() -> Arc<ServerState> {
        let config = GatewayConfig {
            pay_to: "0xdeb4f464d46b1a3cdb4a29c41c6e908378993914"
                .parse()
                .unwrap(),
            basescan_api_key: "test-key".to_string(),
            coingecko_api_key: None,
            coingecko_url: "http://127.0.0.1:1".to_string(),
            basescan_url: "http://127.0.0.1:1".to_string(),
            base_rpc_url: "http://127.0.0.1:1".to_string(),
            facilitator_url: None,
        };

        let coingecko = CoinGecko::new(config.coingecko_url.clone(), None);
        let basescan = Basescan::new(config.basescan_url.clone(), config.basescan_api_key.clone());
        let rpc = BaseRpc::new(config.base_rpc_url.clone());
        let facilitator = Facilitator::new(None);

        Arc::new(ServerState::from((
            config,
            coingecko,
            basescan,
            rpc,
            facilitator,
        )))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router_with_state(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_free_and_lists_routes() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "rGate API");
        assert!(body["routes"].as_array().unwrap().len() >= 13);
    }

    #[tokio::test]
    async fn test_priced_route_without_payment_is_402() {
        let (status, body) = send(get_req("/api/v1/dex/quote?from=ETH&to=USDC&amount=1")).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["x402Version"], 1);
        let accepts = &body["accepts"][0];
        assert_eq!(accepts["maxAmountRequired"], "3000");
        assert_eq!(accepts["network"], "base");
        assert_eq!(
            accepts["payTo"],
            "0xdeb4f464d46b1a3cdb4a29c41c6e908378993914"
        );
    }

    #[tokio::test]
    async fn test_demo_query_bypasses_payment() {
        for uri in [
            "/api/v1/dex/quote?from=ETH&to=USDC&amount=1&demo=1",
            "/api/v1/dex/quote?from=ETH&to=USDC&amount=1&demo=true",
        ] {
            let (status, body) = send(get_req(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["rate"], 3245.5);
            assert_eq!(body["amountOut"], 3245.5);
            assert_eq!(body["app"], "rExchange");
            assert_eq!(body["dataSource"], "static-table");
        }
    }

    #[tokio::test]
    async fn test_no_payment_header_bypasses() {
        let request = Request::builder()
            .uri("/api/v1/dex/gas")
            .header("x-payment", "false")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        // RPC is unreachable in tests, so the fixed fallback shows through.
        assert_eq!(body["baseFeeWei"], 50_000_000);
        assert_eq!(body["standardGwei"], 0.05);
        assert_eq!(body["slowGwei"], 0.04);
        assert_eq!(body["fastGwei"], 0.075);
    }

    #[tokio::test]
    async fn test_payment_sender_assertion_admits() {
        let request = Request::builder()
            .uri("/api/v1/dex/quote?from=ETH&to=USDC&amount=1")
            .header(
                "x-payment-sender",
                "0xAAA0000000000000000000000000000000000001",
            )
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_sender_header_does_not_admit() {
        let request = Request::builder()
            .uri("/api/v1/dex/quote?from=ETH&to=USDC&amount=1")
            .header("x-payment-sender", "not-an-address")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn test_payment_payload_without_facilitator_is_402() {
        let request = Request::builder()
            .uri("/api/v1/dex/quote?from=ETH&to=USDC&amount=1")
            .header("x-payment", "eyJzb21lIjoicGF5bG9hZCJ9")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error"], "payment could not be verified");
    }

    #[tokio::test]
    async fn test_invalid_address_is_400_with_usage() {
        let (status, body) = send(get_req("/api/v1/watch/balance?address=0x123&demo=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("address"));
        assert!(body["usage"].is_string());
    }

    #[tokio::test]
    async fn test_balance_degrades_to_empty_portfolio() {
        let (status, body) = send(get_req(
            "/api/v1/watch/balance?address=0xaaa0000000000000000000000000000000000001&demo=1",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nativeBalanceEth"], 0.0);
        assert_eq!(body["holdings"].as_array().unwrap().len(), 0);
        assert_eq!(body["totalValueUsd"], 0.0);
        assert_eq!(body["app"], "rWatch");
    }

    #[tokio::test]
    async fn test_price_unknown_token_is_200_with_null() {
        let (status, body) = send(get_req(
            "/api/price/0x0000000000000000000000000000000000000001?demo=1",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["price"].is_null());
        assert_eq!(body["note"], "unknown token");
    }

    #[tokio::test]
    async fn test_price_invalid_token_is_400() {
        let (status, _) = send(get_req("/api/price/degen?demo=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_requires_token() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ai/analyze?demo=1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"depth":"deep"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["usage"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_degrades_to_dead_token_scores() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ai/analyze?demo=1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"token":"0xaaa0000000000000000000000000000000000001"}"#,
            ))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        // Every upstream branch failed; all signals are zero.
        assert_eq!(body["overall"], 31);
        assert_eq!(body["sentiment"], "bearish");
        assert_eq!(body["recommendation"], "avoid");
        assert_eq!(body["depth"], "basic");
    }

    #[tokio::test]
    async fn test_trending_degrades_to_empty_list() {
        let (status, body) = send(get_req("/api/v1/ai/trending?demo=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokens"].as_array().unwrap().len(), 0);
        assert_eq!(body["app"], "rIntelligence");
    }

    #[tokio::test]
    async fn test_docs_are_free() {
        let (status, body) = send(get_req("/docs")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["openapi"].is_string());
    }
}
