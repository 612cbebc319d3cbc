use crate::blockchain::{
    classifier::lamports_to_sol, client::ClientError, history, LedgerQueryService,
    MockDataSource, SolanaClient,
};
use crate::config::{Config, DataMode};
use crate::models::{ClassifiedTransaction, Dashboard};
use crate::validation::{validate_history_limit, validate_solana_address, ValidationError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to fetch transactions: {0}")]
    LedgerUnavailable(ClientError),

    #[error("Failed to fetch balance: {0}")]
    BalanceFetchFailed(ClientError),

    #[error("Dashboard load was abandoned")]
    Cancelled,
}

impl ServiceError {
    /// Upstream outages may succeed on a later attempt; the rest never will.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceError::LedgerUnavailable(_) | ServiceError::BalanceFetchFailed(_)
        )
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidSolanaAddress(address) => ServiceError::InvalidAddress(address),
            ValidationError::MissingParameter(param) => {
                ServiceError::InvalidParameter(format!("missing {}", param))
            }
            ValidationError::InvalidParameter(msg) => ServiceError::InvalidParameter(msg),
        }
    }
}

enum DataSource {
    Live(Arc<dyn LedgerQueryService>),
    Mock(MockDataSource),
}

/// Balance and classified history for watched addresses, backed either by a
/// live ledger or by canned mock data.
pub struct DashboardService {
    source: DataSource,
    detail_timeout: Option<Duration>,
}

impl DashboardService {
    pub fn live(ledger: Arc<dyn LedgerQueryService>) -> Self {
        Self {
            source: DataSource::Live(ledger),
            detail_timeout: None,
        }
    }

    pub fn mock(mock: MockDataSource) -> Self {
        Self {
            source: DataSource::Mock(mock),
            detail_timeout: None,
        }
    }

    /// Build the service selected by `config.data_mode`.
    pub fn from_config(config: &Config) -> Self {
        let service = match config.data_mode {
            DataMode::Live => Self::live(Arc::new(SolanaClient::new(config))),
            DataMode::Mock => {
                info!("Using mock ledger data");
                Self::mock(MockDataSource::new(
                    config.mock_balance_delay,
                    config.mock_history_delay,
                ))
            }
        };
        service.with_detail_timeout(config.detail_timeout)
    }

    /// Treat a detail fetch that takes longer than `timeout` as failed.
    pub fn with_detail_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.detail_timeout = timeout;
        self
    }

    pub fn data_mode(&self) -> DataMode {
        match self.source {
            DataSource::Live(_) => DataMode::Live,
            DataSource::Mock(_) => DataMode::Mock,
        }
    }

    /// Current balance of `address` in SOL.
    pub async fn fetch_balance(&self, address: &str) -> Result<f64, ServiceError> {
        validate_solana_address(address)?;
        self.query_balance(address).await
    }

    /// Up to `limit` recent transactions of `address`, most recent first.
    pub async fn fetch_history(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<ClassifiedTransaction>, ServiceError> {
        validate_solana_address(address)?;
        let limit = validate_history_limit(limit)?;
        self.query_history(address, limit).await
    }

    /// Fetch balance and history together. Either hard failure fails the
    /// load, and firing `cancel` abandons both requests.
    pub async fn load_dashboard(
        &self,
        address: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Dashboard, ServiceError> {
        // Both checks run before either query starts
        validate_solana_address(address)?;
        let limit = validate_history_limit(limit)?;

        let load = async {
            tokio::try_join!(self.query_balance(address), self.query_history(address, limit))
        };

        let (balance, transactions) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Dashboard load for {} abandoned", address);
                return Err(ServiceError::Cancelled);
            }
            result = load => result?,
        };

        info!(
            "Loaded dashboard for {}: balance {} SOL, {} transactions",
            address,
            balance,
            transactions.len()
        );

        Ok(Dashboard {
            address: address.to_string(),
            balance,
            transactions,
        })
    }

    // Callers validate `address` and `limit` first
    async fn query_balance(&self, address: &str) -> Result<f64, ServiceError> {
        match &self.source {
            DataSource::Live(ledger) => {
                let lamports = ledger.get_balance(address).await.map_err(|e| {
                    error!("Error fetching balance for {}: {}", address, e);
                    ServiceError::BalanceFetchFailed(e)
                })?;
                Ok(lamports_to_sol(lamports))
            }
            DataSource::Mock(mock) => Ok(mock.balance().await),
        }
    }

    async fn query_history(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<ClassifiedTransaction>, ServiceError> {
        match &self.source {
            DataSource::Live(ledger) => {
                history::fetch_history(ledger.as_ref(), address, limit, self.detail_timeout)
                    .await
                    .map_err(|e| {
                        error!("Error fetching transactions for {}: {}", address, e);
                        ServiceError::LedgerUnavailable(e)
                    })
            }
            DataSource::Mock(mock) => Ok(mock.history(limit).await),
        }
    }
}
