use axum::Json;

use crate::{
    gate::routes::PRICED_ROUTES,
    health::dto::{Health, RouteInfo},
};

/// Free health check. Never gated, never calls upstream; advertises the
/// priced route table.
#[utoipa::path(
    get,
    path = "/health",
    description = "Service health and route listing",
    responses(
        (status = 200, description = "Success", body = Health),
    )
)]
pub async fn health() -> Json<Health> {
    let routes = PRICED_ROUTES
        .iter()
        .map(|meta| RouteInfo {
            method: meta.method.to_string(),
            path: meta.path.to_string(),
            price: meta.price.to_string(),
            description: meta.description.to_string(),
        })
        .collect();

    Json(Health {
        status: "ok".to_string(),
        service: "rGate API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes,
    })
}
