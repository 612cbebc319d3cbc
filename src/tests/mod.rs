//! Crate-internal tests and the fake ledger they share.

mod history_tests;

use crate::blockchain::{client::ClientError, LedgerQueryService};
use crate::models::{LedgerAccountSnapshot, SignatureInfo};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

// Valid Solana addresses
pub const VALID_SOURCE_ADDRESS: &str = "9ii1FEiWSgDzXAbwj2oTmJXzkfCw78mnHwPQv9WQ5iTn";
pub const VALID_DEST_ADDRESS: &str = "AhAkbf3cGD6HkFod2rBEE8mie8ks9p7vuss6WGkUFAM9";
pub const VALID_SOURCE_ADDRESS_2: &str = "FwKc3s5x7SguXzNPPJP7AV2UUhCF4rnEQCFdA2Q8NGCi";

/// How the fake answers a detail request for one signature
#[derive(Clone)]
pub enum FakeDetail {
    Snapshot(LedgerAccountSnapshot, Duration),
    Empty,
    Fail,
    Hang,
}

/// In-memory ledger with scripted answers. `None` balance or signatures
/// make the corresponding call fail.
#[derive(Default)]
pub struct FakeLedger {
    balance: Option<u64>,
    balance_delay: Duration,
    signatures: Option<Vec<SignatureInfo>>,
    details: HashMap<String, FakeDetail>,
    calls: AtomicUsize,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, lamports: u64) -> Self {
        self.balance = Some(lamports);
        self
    }

    pub fn with_balance_delay(mut self, delay: Duration) -> Self {
        self.balance_delay = delay;
        self
    }

    pub fn with_signatures(mut self, signatures: Vec<SignatureInfo>) -> Self {
        self.signatures = Some(signatures);
        self
    }

    pub fn with_detail(mut self, signature: &str, detail: FakeDetail) -> Self {
        self.details.insert(signature.to_string(), detail);
        self
    }

    /// Total number of ledger calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerQueryService for FakeLedger {
    async fn get_balance(&self, address: &str) -> Result<u64, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.balance_delay).await;
        self.balance
            .ok_or_else(|| ClientError::NotFound(format!("balance for {}", address)))
    }

    async fn get_signatures(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.signatures {
            Some(signatures) => Ok(signatures.iter().take(limit).cloned().collect()),
            None => Err(ClientError::Timeout(format!("signatures for {}", address))),
        }
    }

    async fn get_transaction_detail(
        &self,
        signature: &str,
    ) -> Result<Option<LedgerAccountSnapshot>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.details.get(signature) {
            Some(FakeDetail::Snapshot(snapshot, delay)) => {
                sleep(*delay).await;
                Ok(Some(snapshot.clone()))
            }
            Some(FakeDetail::Empty) => Ok(None),
            Some(FakeDetail::Fail) | None => Err(ClientError::NotFound(signature.to_string())),
            Some(FakeDetail::Hang) => {
                std::future::pending::<Result<Option<LedgerAccountSnapshot>, ClientError>>().await
            }
        }
    }
}

/// Snapshot where `watched` moves from `pre` to `post` and a counterparty
/// absorbs the difference.
pub fn transfer_snapshot(watched: &str, pre: i64, post: i64) -> LedgerAccountSnapshot {
    LedgerAccountSnapshot::new(
        vec![watched.to_string(), VALID_DEST_ADDRESS.to_string()],
        vec![pre, 1_000_000_000],
        vec![post, 1_000_000_000 + (pre - post)],
    )
}

pub fn signature_infos(count: usize) -> Vec<SignatureInfo> {
    (0..count)
        .map(|i| SignatureInfo::new(format!("sig_{}", i), Some(1_700_000_000 - i as i64 * 60)))
        .collect()
}
