use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

/// Basescan (Etherscan-family) block-explorer client. All endpoints share
/// the `?module=&action=` query convention and the
/// `{status, message, result}` envelope.
#[derive(Clone)]
pub struct Basescan {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    status: String,
    #[allow(dead_code)]
    message: String,
    result: T,
}

/// One entry of the normal-transaction list.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalTx {
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Value in wei, decimal string.
    pub value: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
    #[serde(rename = "gasUsed")]
    pub gas_used: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    #[serde(rename = "blockNumber")]
    pub block_number: String,
    #[serde(rename = "isError")]
    pub is_error: String,
}

/// One ERC-20 transfer from the token-transfer feed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenTransfer {
    #[serde(rename = "contractAddress")]
    pub contract_address: String,
    pub from: String,
    pub to: String,
    /// Raw token amount, decimal string, not decimal-adjusted.
    pub value: String,
    #[serde(rename = "tokenSymbol")]
    pub token_symbol: String,
    #[serde(rename = "tokenDecimal")]
    pub token_decimal: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenHolder {
    #[serde(rename = "TokenHolderAddress")]
    pub address: String,
    #[serde(rename = "TokenHolderQuantity")]
    pub quantity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractSource {
    #[serde(rename = "ContractName")]
    pub contract_name: String,
    #[serde(rename = "SourceCode")]
    pub source_code: String,
    #[serde(rename = "ABI")]
    pub abi: String,
}

impl ContractSource {
    pub fn is_verified(&self) -> bool {
        !self.source_code.is_empty() && self.abi != "Contract source code not verified"
    }
}

impl Basescan {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    async fn call<T: serde::de::DeserializeOwned>(&self, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let envelope = response.json::<Envelope<T>>().await?;

        Ok(envelope.result)
    }

    /// Native ETH balance in wei, decimal string.
    pub async fn native_balance(&self, address: &str) -> Result<String> {
        self.call(&[
            ("module", "account"),
            ("action", "balance"),
            ("address", address),
            ("tag", "latest"),
        ])
        .await
    }

    /// Most recent normal transactions, newest first.
    pub async fn tx_list(&self, address: &str, limit: u32) -> Result<Vec<NormalTx>> {
        self.call(&[
            ("module", "account"),
            ("action", "txlist"),
            ("address", address),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("page", "1"),
            ("offset", &limit.to_string()),
            ("sort", "desc"),
        ])
        .await
    }

    /// Full ERC-20 transfer history for a wallet, oldest first, so signed
    /// deltas can be accumulated into per-contract balances.
    pub async fn token_transfers(&self, address: &str) -> Result<Vec<TokenTransfer>> {
        self.call(&[
            ("module", "account"),
            ("action", "tokentx"),
            ("address", address),
            ("startblock", "0"),
            ("endblock", "99999999"),
            ("sort", "asc"),
        ])
        .await
    }

    /// Holder list for a token contract, sorted by balance descending
    /// upstream.
    pub async fn token_holders(&self, token: &str, limit: u32) -> Result<Vec<TokenHolder>> {
        self.call(&[
            ("module", "token"),
            ("action", "tokenholderlist"),
            ("contractaddress", token),
            ("page", "1"),
            ("offset", &limit.to_string()),
        ])
        .await
    }

    /// Verified-source metadata for a contract. The API always returns a
    /// one-element list; an unverified contract has empty fields.
    pub async fn contract_source(&self, address: &str) -> Result<Option<ContractSource>> {
        let sources: Vec<ContractSource> = self
            .call(&[
                ("module", "contract"),
                ("action", "getsourcecode"),
                ("address", address),
            ])
            .await?;

        Ok(sources.into_iter().next())
    }
}
