use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use log::{info, warn};
use rgate_core::helpers::{address::Address, dto::PayerContext};

use crate::{
    gate::{dto::PaymentRequired, routes::route_meta},
    state::ServerState,
};

/// Header a caller sets to explicitly decline payment (demo mode).
pub const PAYMENT_HEADER: &str = "x-payment";
/// Header carrying a claimed payer address. Declarative trust signal
/// only; settlement-grade verification belongs to the facilitator.
pub const PAYMENT_SENDER_HEADER: &str = "x-payment-sender";

/// Per-request access decision: demo bypass, payment assertion, or
/// delegation to the external facilitator. Exactly one outcome is
/// produced before the handler body runs; on reject the handler is never
/// reached.
pub async fn paywall(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, PaymentRequired> {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let Some(meta) = route_meta(&path) else {
        // Not in the price table: nothing to charge.
        return Ok(next.run(req).await);
    };

    // Demo bypass, query form first, then header form.
    let demo_query = has_demo_flag(req.uri().query());
    let demo_header = req
        .headers()
        .get(PAYMENT_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|v| v == "false")
        .unwrap_or(false);

    if demo_query || demo_header {
        req.extensions_mut().insert(PayerContext::demo());
        return Ok(next.run(req).await);
    }

    // Declarative payment assertion.
    if let Some(sender) = req
        .headers()
        .get(PAYMENT_SENDER_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(Address::parse)
    {
        info!("payment asserted by {} for {}", sender, meta.path);
        req.extensions_mut()
            .insert(PayerContext::paid(sender.to_string()));
        return Ok(next.run(req).await);
    }

    // Payment required: hand the payload (if any) to the facilitator.
    let requirements = meta.requirements(state.config().pay_to.as_str());

    let payment_header = req
        .headers()
        .get(PAYMENT_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    if let Some(payload) = payment_header {
        match state.facilitator().verify(&payload, &requirements).await {
            Ok(outcome) if outcome.is_valid => {
                let payer = outcome.payer.unwrap_or_else(|| "unknown".to_string());
                info!("payment verified for {} by {}", meta.path, payer);
                req.extensions_mut().insert(PayerContext::paid(payer));
                return Ok(next.run(req).await);
            }
            Ok(outcome) => {
                let reason = outcome
                    .invalid_reason
                    .unwrap_or_else(|| "payment rejected".to_string());
                return Err(PaymentRequired::new(&reason, vec![requirements]));
            }
            Err(e) => {
                warn!("facilitator verification failed for {}: {e}", meta.path);
                return Err(PaymentRequired::new(
                    "payment could not be verified",
                    vec![requirements],
                ));
            }
        }
    }

    Err(PaymentRequired::new(
        "X-PAYMENT header is required",
        vec![requirements],
    ))
}

fn has_demo_flag(query: Option<&str>) -> bool {
    query
        .map(|q| q.split('&').any(|p| p == "demo=1" || p == "demo=true"))
        .unwrap_or(false)
}
