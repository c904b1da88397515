use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rgate_core::helpers::{
    address::Address,
    dto::{App, Holding},
    utils::now_millis,
};

use crate::{
    error::ApiError,
    state::ServerState,
    upstream::{
        basescan::{TokenHolder, TokenTransfer},
        or_default,
    },
    watch::dto::{
        BalanceQuery, BalanceResponse, HistoryQuery, HistoryResponse, HolderEntry, HoldersQuery,
        HoldersResponse, TxRecord,
    },
};

const DEFAULT_HISTORY_LIMIT: u32 = 20;
const DEFAULT_HOLDERS_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 100;

/// A derived token position before pricing: the balance is still the raw
/// integer accumulator, so no float drift can creep in while transfers
/// are being summed.
#[derive(Debug)]
pub struct RawHolding {
    pub contract: String,
    pub symbol: String,
    pub decimals: u32,
    pub raw_balance: BigInt,
}

/// Sum signed transfer deltas per contract for one wallet. Incoming
/// transfers add, outgoing subtract; self-transfers cancel out. Dust and
/// fully-exited positions are dropped.
pub fn derive_holdings(transfers: &[TokenTransfer], wallet: &str) -> Vec<RawHolding> {
    let wallet = wallet.to_ascii_lowercase();
    let mut balances: HashMap<String, (String, u32, BigInt)> = HashMap::new();

    for transfer in transfers {
        let value: BigInt = transfer.value.parse().unwrap_or_else(|_| BigInt::zero());
        let contract = transfer.contract_address.to_ascii_lowercase();
        let decimals = transfer.token_decimal.parse().unwrap_or(18);

        let entry = balances
            .entry(contract)
            .or_insert_with(|| (transfer.token_symbol.clone(), decimals, BigInt::zero()));

        if transfer.to.eq_ignore_ascii_case(&wallet) {
            entry.2 += &value;
        }
        if transfer.from.eq_ignore_ascii_case(&wallet) {
            entry.2 -= &value;
        }
    }

    let mut holdings: Vec<RawHolding> = balances
        .into_iter()
        .filter(|(_, (_, _, balance))| balance.is_positive())
        .map(|(contract, (symbol, decimals, raw_balance))| RawHolding {
            contract,
            symbol,
            decimals,
            raw_balance,
        })
        .collect();

    holdings.sort_by(|a, b| a.contract.cmp(&b.contract));
    holdings
}

pub fn decimal_adjust(raw: &BigInt, decimals: u32) -> f64 {
    raw.to_f64().unwrap_or(0.0) / 10f64.powi(decimals as i32)
}

pub fn wei_to_eth(wei: &str) -> f64 {
    wei.parse::<u128>().unwrap_or(0) as f64 / 1e18
}

pub fn wei_to_gwei(wei: &str) -> f64 {
    wei.parse::<u128>().unwrap_or(0) as f64 / 1e9
}

/// Rank holders and express each balance as a share of the largest
/// holder's balance. Deliberately not percentage-of-total-supply; the
/// route description says so.
pub fn rank_holders(holders: &[TokenHolder]) -> Vec<HolderEntry> {
    let top = holders
        .first()
        .and_then(|h| h.quantity.parse::<f64>().ok())
        .filter(|q| *q > 0.0);

    holders
        .iter()
        .enumerate()
        .map(|(i, holder)| {
            let quantity = holder.quantity.parse::<f64>().unwrap_or(0.0);
            let percent = top
                .map(|top| (quantity / top * 10_000.0).round() / 100.0)
                .unwrap_or(0.0);
            HolderEntry {
                rank: i + 1,
                address: holder.address.clone(),
                balance: holder.quantity.clone(),
                percent_of_top_holder: percent,
            }
        })
        .collect()
}

/// Shared aggregation behind both `watch/balance` and the legacy
/// portfolio route: native balance and transfer history fetched
/// concurrently, holdings derived from signed deltas, unit prices only
/// for registry-recognized contracts.
pub async fn aggregate_portfolio(
    state: &ServerState,
    address: &Address,
) -> (f64, Vec<Holding>, f64) {
    let (native, transfers) = tokio::join!(
        state.basescan().native_balance(address.as_str()),
        state.basescan().token_transfers(address.as_str()),
    );

    let native_eth = wei_to_eth(&or_default(native, "native balance"));
    let transfers = or_default(transfers, "token transfers");

    let raw_holdings = derive_holdings(&transfers, address.as_str());

    let ids: Vec<&str> = raw_holdings
        .iter()
        .filter_map(|holding| state.registry().resolve(&holding.contract))
        .map(|descriptor| descriptor.coingecko_id)
        .collect();

    let prices = or_default(state.coingecko().prices(&ids).await, "token prices");

    let mut total_value_usd = 0.0;
    let holdings = raw_holdings
        .into_iter()
        .map(|holding| {
            let balance = decimal_adjust(&holding.raw_balance, holding.decimals);
            // Unrecognized contracts contribute 0 to the total.
            let unit_price = state
                .registry()
                .resolve(&holding.contract)
                .and_then(|descriptor| prices.get(descriptor.coingecko_id))
                .and_then(|quote| quote.usd)
                .unwrap_or(0.0);
            let usd_value = balance * unit_price;
            total_value_usd += usd_value;
            Holding {
                contract: holding.contract,
                symbol: holding.symbol,
                balance,
                usd_value,
            }
        })
        .collect();

    (native_eth, holdings, total_value_usd)
}

#[utoipa::path(
    get,
    path = "/api/v1/watch/balance",
    description = "Native and token balances for any address on Base",
    responses(
        (status = 200, description = "Success", body = BalanceResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn balance(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    const USAGE: &str = "/api/v1/watch/balance?address=0x...";

    let address = query
        .address
        .as_deref()
        .and_then(Address::parse)
        .ok_or_else(|| ApiError::bad_request("invalid or missing 'address'", Some(USAGE)))?;

    let (native_balance_eth, holdings, total_value_usd) =
        aggregate_portfolio(&state, &address).await;

    Ok(Json(BalanceResponse {
        app: App::Watch,
        address: address.to_string(),
        native_balance_eth,
        holdings,
        total_value_usd,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/watch/history",
    description = "Recent transactions for any address on Base",
    responses(
        (status = 200, description = "Success", body = HistoryResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn history(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    const USAGE: &str = "/api/v1/watch/history?address=0x...&limit=20";

    let address = query
        .address
        .as_deref()
        .and_then(Address::parse)
        .ok_or_else(|| ApiError::bad_request("invalid or missing 'address'", Some(USAGE)))?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_LIMIT);

    let txs = or_default(
        state.basescan().tx_list(address.as_str(), limit).await,
        "transaction list",
    );

    let transactions = txs
        .into_iter()
        .map(|tx| TxRecord {
            hash: tx.hash,
            from: tx.from,
            to: tx.to,
            value_eth: wei_to_eth(&tx.value),
            gas_price_gwei: wei_to_gwei(&tx.gas_price),
            block_number: tx.block_number,
            time_stamp: tx.time_stamp,
            success: tx.is_error == "0",
        })
        .collect();

    Ok(Json(HistoryResponse {
        app: App::Watch,
        address: address.to_string(),
        transactions,
        timestamp: now_millis(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/watch/token-holders",
    description = "Top holders of a Base token; percentages are relative to \
                   the largest holder, not total supply",
    responses(
        (status = 200, description = "Success", body = HoldersResponse),
        (status = 400, description = "Bad Request"),
        (status = 402, description = "Payment Required"),
    )
)]
pub async fn token_holders(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<HoldersQuery>,
) -> Result<Json<HoldersResponse>, ApiError> {
    const USAGE: &str = "/api/v1/watch/token-holders?token=0x...&limit=50";

    let token = query
        .token
        .as_deref()
        .and_then(Address::parse)
        .ok_or_else(|| ApiError::bad_request("invalid or missing 'token'", Some(USAGE)))?;

    let limit = query
        .limit
        .unwrap_or(DEFAULT_HOLDERS_LIMIT)
        .clamp(1, MAX_LIMIT);

    let holders = or_default(
        state.basescan().token_holders(token.as_str(), limit).await,
        "token holders",
    );

    Ok(Json(HoldersResponse {
        app: App::Watch,
        token: token.to_string(),
        holders: rank_holders(&holders),
        timestamp: now_millis(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(contract: &str, from: &str, to: &str, value: &str) -> TokenTransfer {
        TokenTransfer {
            contract_address: contract.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            value: value.to_string(),
            token_symbol: "TST".to_string(),
            token_decimal: "18".to_string(),
        }
    }

    const WALLET: &str = "0xaaa0000000000000000000000000000000000001";
    const OTHER: &str = "0xbbb0000000000000000000000000000000000002";
    const TOKEN: &str = "0xccc0000000000000000000000000000000000003";

    #[test]
    fn test_derive_holdings_sums_signed_deltas() {
        let transfers = vec![
            transfer(TOKEN, OTHER, WALLET, "3000000000000000000"),
            transfer(TOKEN, WALLET, OTHER, "1000000000000000000"),
        ];
        let holdings = derive_holdings(&transfers, WALLET);
        assert_eq!(holdings.len(), 1);
        assert_eq!(
            holdings[0].raw_balance,
            "2000000000000000000".parse::<BigInt>().unwrap()
        );
        assert_eq!(decimal_adjust(&holdings[0].raw_balance, 18), 2.0);
    }

    #[test]
    fn test_derive_holdings_drops_exited_positions() {
        let transfers = vec![
            transfer(TOKEN, OTHER, WALLET, "5"),
            transfer(TOKEN, WALLET, OTHER, "5"),
        ];
        assert!(derive_holdings(&transfers, WALLET).is_empty());
    }

    #[test]
    fn test_derive_holdings_self_transfer_is_neutral() {
        let transfers = vec![
            transfer(TOKEN, OTHER, WALLET, "7"),
            transfer(TOKEN, WALLET, WALLET, "100"),
        ];
        let holdings = derive_holdings(&transfers, WALLET);
        assert_eq!(holdings[0].raw_balance, BigInt::from(7));
    }

    #[test]
    fn test_derive_holdings_uses_integer_accumulator() {
        // Large values that would drift under f64 accumulation.
        let big = "123456789012345678901234567890";
        let transfers = vec![
            transfer(TOKEN, OTHER, WALLET, big),
            transfer(TOKEN, OTHER, WALLET, "1"),
            transfer(TOKEN, WALLET, OTHER, big),
        ];
        let holdings = derive_holdings(&transfers, WALLET);
        assert_eq!(holdings[0].raw_balance, BigInt::from(1));
    }

    #[test]
    fn test_rank_holders_percent_of_top() {
        let holders = vec![
            TokenHolder {
                address: "0x1".to_string(),
                quantity: "1000".to_string(),
            },
            TokenHolder {
                address: "0x2".to_string(),
                quantity: "500".to_string(),
            },
            TokenHolder {
                address: "0x3".to_string(),
                quantity: "100".to_string(),
            },
        ];
        let ranked = rank_holders(&holders);
        assert_eq!(
            ranked.iter().map(|h| h.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            ranked
                .iter()
                .map(|h| h.percent_of_top_holder)
                .collect::<Vec<_>>(),
            vec![100.0, 50.0, 10.0]
        );
    }

    #[test]
    fn test_rank_holders_empty() {
        assert!(rank_holders(&[]).is_empty());
    }

    #[test]
    fn test_wei_conversions() {
        assert_eq!(wei_to_eth("1000000000000000000"), 1.0);
        assert_eq!(wei_to_eth("garbage"), 0.0);
        assert_eq!(wei_to_gwei("50000000"), 0.05);
    }
}
