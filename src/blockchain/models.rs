use crate::models::LedgerAccountSnapshot;
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta, EncodedTransaction, UiMessage,
};
use tracing::warn;

/// Pull the account keys and lamport balances out of a fetched transaction.
///
/// Returns `None` when the record lacks metadata or uses an encoding that
/// carries no account list. Length consistency is left to the classifier.
pub fn extract_snapshot(
    signature: &str,
    tx_data: &EncodedConfirmedTransactionWithStatusMeta,
) -> Option<LedgerAccountSnapshot> {
    let transaction_with_meta = &tx_data.transaction;

    let transaction = match &transaction_with_meta.transaction {
        EncodedTransaction::Json(tx) => tx,
        _ => {
            warn!("Unsupported transaction encoding for {}", signature);
            return None;
        }
    };

    let meta = match &transaction_with_meta.meta {
        Some(meta) => meta,
        None => {
            warn!("Transaction {} has no metadata", signature);
            return None;
        }
    };

    let account_keys: Vec<String> = match &transaction.message {
        UiMessage::Parsed(message) => message
            .account_keys
            .iter()
            .map(|account| account.pubkey.clone())
            .collect(),
        UiMessage::Raw(message) => message.account_keys.clone(),
    };

    let pre_balances = to_signed(&meta.pre_balances);
    let post_balances = to_signed(&meta.post_balances);

    match (pre_balances, post_balances) {
        (Some(pre_balances), Some(post_balances)) => Some(LedgerAccountSnapshot::new(
            account_keys,
            pre_balances,
            post_balances,
        )),
        _ => {
            warn!("Transaction {} has balances outside the signed range", signature);
            None
        }
    }
}

fn to_signed(balances: &[u64]) -> Option<Vec<i64>> {
    balances
        .iter()
        .map(|lamports| i64::try_from(*lamports).ok())
        .collect()
}
