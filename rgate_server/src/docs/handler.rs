use axum::Json;
use utoipa::OpenApi;

use crate::docs::dto::ApiDoc;

/// Raw OpenAPI document; the rendered version lives at `/redoc`.
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
