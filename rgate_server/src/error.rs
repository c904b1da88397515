use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToResponse;

/// Uniform JSON error for every route: 400s carry a machine-readable
/// reason and, where useful, a usage hint; 500s carry a details string
/// drawn from the underlying failure.
#[derive(Debug, Serialize, ToResponse)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip)]
    pub status: u16,
}

impl ApiError {
    pub fn bad_request(error: &str, usage: Option<&str>) -> Self {
        Self {
            error: error.to_string(),
            usage: usage.map(str::to_string),
            details: None,
            status: StatusCode::BAD_REQUEST.into(),
        }
    }

    pub fn internal(error: &str, source: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
            usage: None,
            details: Some(source.to_string()),
            status: StatusCode::INTERNAL_SERVER_ERROR.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
