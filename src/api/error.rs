use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use crate::service::ServiceError;
use crate::validation::ValidationError;

const BACK_TO_ADDRESS_ENTRY: &str = "Return to address entry and try again";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid address format")]
    InvalidAddress,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    LedgerUnavailable(String),

    #[error("Service is shutting down")]
    ShuttingDown,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidAddress => (StatusCode::BAD_REQUEST, "Invalid Solana address format".to_string()),
            ApiError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::LedgerUnavailable(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ApiError::ShuttingDown => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "action": BACK_TO_ADDRESS_ENTRY,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidSolanaAddress(_) => ApiError::InvalidAddress,
            ValidationError::MissingParameter(param) =>
                ApiError::BadRequest(format!("Missing parameter: {}", param)),
            ValidationError::InvalidParameter(msg) =>
                ApiError::InvalidParameter(msg),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidAddress(_) => ApiError::InvalidAddress,
            ServiceError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
            // Upstream detail stays in the logs
            ServiceError::LedgerUnavailable(_) =>
                ApiError::LedgerUnavailable("Failed to fetch transactions".to_string()),
            ServiceError::BalanceFetchFailed(_) =>
                ApiError::LedgerUnavailable("Failed to fetch balance".to_string()),
            ServiceError::Cancelled => ApiError::ShuttingDown,
        }
    }
}
