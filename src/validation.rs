use crate::config::MAX_HISTORY_LIMIT;
use bs58;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid Solana address format: {0}")]
    InvalidSolanaAddress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub fn validate_solana_address(address: &str) -> Result<(), ValidationError> {
    // Check if address is empty
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    // Decode base58 string
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return Err(ValidationError::InvalidSolanaAddress(address.to_string())),
    };

    // Validate length (Solana addresses are 32 bytes)
    if decoded.len() != 32 {
        return Err(ValidationError::InvalidSolanaAddress(address.to_string()));
    }

    Ok(())
}

pub fn validate_history_limit(limit: usize) -> Result<usize, ValidationError> {
    if limit == 0 || limit > MAX_HISTORY_LIMIT {
        return Err(ValidationError::InvalidParameter(format!(
            "limit must be between 1 and {}",
            MAX_HISTORY_LIMIT
        )));
    }
    Ok(limit)
}

/// Parse an optional `limit` query value, falling back to `default`.
pub fn validate_limit(raw: Option<&str>, default: usize) -> Result<usize, ValidationError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => validate_history_limit(default),
        Some(value) => {
            let limit = value
                .parse::<usize>()
                .map_err(|_| ValidationError::InvalidParameter(format!("limit: {}", value)))?;
            validate_history_limit(limit)
        }
    }
}

/// Parse an optional `amount` query value. Any number is accepted here;
/// non-positive and non-finite amounts are dropped when the URI is built.
pub fn validate_amount(raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ValidationError::InvalidParameter(format!("amount: {}", value))),
    }
}
