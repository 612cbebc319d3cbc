pub mod api;
pub mod blockchain;
pub mod config;
pub mod models;
pub mod payment;
pub mod service;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::response::ApiResponse;
pub use api::route::create_router;
pub use blockchain::{classify, LedgerQueryService, MockDataSource, SolanaClient};
pub use config::{Config, DataMode};
pub use models::{ClassifiedTransaction, Dashboard, Direction, LedgerAccountSnapshot, SignatureInfo};
pub use payment::build_payment_request;
pub use service::{DashboardService, ServiceError};
pub use validation::validate_solana_address;
