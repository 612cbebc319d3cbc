use crate::blockchain::client::ClientError;
use crate::models::{LedgerAccountSnapshot, SignatureInfo};
use async_trait::async_trait;

/// Read-only view of the ledger needed to build a merchant feed.
#[async_trait]
pub trait LedgerQueryService: Send + Sync {
    /// Current balance in lamports
    async fn get_balance(&self, address: &str) -> Result<u64, ClientError>;

    /// Up to `limit` recent signatures for `address`, most recent first
    async fn get_signatures(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ClientError>;

    /// Account snapshot of one transaction; `Ok(None)` when the record exists
    /// but carries no usable balance metadata
    async fn get_transaction_detail(
        &self,
        signature: &str,
    ) -> Result<Option<LedgerAccountSnapshot>, ClientError>;
}
