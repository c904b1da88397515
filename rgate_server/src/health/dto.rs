use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub version: String,
    pub routes: Vec<RouteInfo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub price: String,
    pub description: String,
}
