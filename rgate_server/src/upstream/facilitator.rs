use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::gate::dto::{PaymentRequirements, X402_VERSION};

/// Delegate for actual payment verification. The gateway never inspects
/// payment payloads itself; it forwards them, with the route's
/// requirements, to an external x402 facilitator.
#[derive(Clone)]
pub struct Facilitator {
    client: Client,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOutcome {
    pub is_valid: bool,
    pub payer: Option<String>,
    #[serde(default)]
    pub invalid_reason: Option<String>,
}

impl Facilitator {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Ask the facilitator whether a payment payload satisfies the
    /// route's requirements. An unconfigured facilitator rejects
    /// everything rather than admitting blindly.
    pub async fn verify(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<VerifyOutcome> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| anyhow!("facilitator not configured"))?;

        let response = self
            .client
            .post(format!("{url}/verify"))
            .json(&json!({
                "x402Version": X402_VERSION,
                "paymentHeader": payment_header,
                "paymentRequirements": requirements,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<VerifyOutcome>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn requirements() -> PaymentRequirements {
        PaymentRequirements {
            scheme: "exact".to_string(),
            network: "base".to_string(),
            max_amount_required: "1000".to_string(),
            resource: "/api/v1/dex/gas".to_string(),
            description: "gas".to_string(),
            mime_type: "application/json".to_string(),
            pay_to: "0xdeb4f464d46b1a3cdb4a29c41c6e908378993914".to_string(),
            max_timeout_seconds: 60,
            asset: crate::gate::dto::SETTLEMENT_ASSET.to_string(),
        }
    }

    #[tokio::test]
    async fn test_verify_parses_admit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/verify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "isValid": true,
                "payer": "0xabc0000000000000000000000000000000000001"
            })))
            .mount(&server)
            .await;

        let facilitator = Facilitator::new(Some(server.uri()));
        let outcome = facilitator.verify("payload", &requirements()).await.unwrap();
        assert!(outcome.is_valid);
        assert!(outcome.payer.is_some());
    }

    #[tokio::test]
    async fn test_unconfigured_facilitator_rejects() {
        let facilitator = Facilitator::new(None);
        assert!(
            facilitator
                .verify("payload", &requirements())
                .await
                .is_err()
        );
    }
}
