use crate::blockchain::classifier::classify;
use crate::blockchain::client::ClientError;
use crate::blockchain::ledger::LedgerQueryService;
use crate::models::{ClassifiedTransaction, Direction, SignatureInfo};
use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetch and classify the most recent transactions of `address`.
///
/// Fails only when the signature listing itself fails. Every listed signature
/// yields exactly one entry, in listing order; a detail that cannot be fetched
/// or parsed becomes an `unknown` entry instead of aborting the batch.
pub async fn fetch_history(
    ledger: &dyn LedgerQueryService,
    address: &str,
    limit: usize,
    detail_timeout: Option<Duration>,
) -> Result<Vec<ClassifiedTransaction>, ClientError> {
    let signatures = ledger.get_signatures(address, limit).await?;

    if signatures.is_empty() {
        debug!("No signatures found for {}", address);
        return Ok(Vec::new());
    }

    // join_all yields results in input order regardless of completion order
    let futures: Vec<_> = signatures
        .iter()
        .map(|info| classify_signature(ledger, address, info, detail_timeout))
        .collect();

    let transactions = join_all(futures).await;

    let unknown = transactions
        .iter()
        .filter(|tx| tx.direction == Direction::Unknown)
        .count();
    debug!(
        "Classified {} transactions for {} ({} unknown)",
        transactions.len(),
        address,
        unknown
    );

    Ok(transactions)
}

async fn classify_signature(
    ledger: &dyn LedgerQueryService,
    address: &str,
    info: &SignatureInfo,
    detail_timeout: Option<Duration>,
) -> ClassifiedTransaction {
    let fetch = ledger.get_transaction_detail(&info.signature);

    let result = match detail_timeout {
        Some(limit) => match tokio::time::timeout(limit, fetch).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(info.signature.clone())),
        },
        None => fetch.await,
    };

    match result {
        Ok(snapshot) => {
            if snapshot.is_none() {
                warn!("Transaction {} returned no usable balance data", info.signature);
            }
            let (direction, amount) = classify(snapshot.as_ref(), address);
            ClassifiedTransaction::new(info.signature.clone(), info.block_time, direction, amount)
        }
        Err(e) => {
            warn!("Failed to get transaction {}: {}", info.signature, e);
            ClassifiedTransaction::unknown(info)
        }
    }
}
