use crate::models::{Direction, LedgerAccountSnapshot};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Convert lamports to SOL without rounding
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Classify the net balance movement of `watched` inside one transaction.
///
/// Returns `(Unknown, None)` for a missing or malformed snapshot, when the
/// address is not among the account keys, and when its balance did not change.
/// Only the first occurrence of the address is considered.
pub fn classify(
    snapshot: Option<&LedgerAccountSnapshot>,
    watched: &str,
) -> (Direction, Option<f64>) {
    let snapshot = match snapshot {
        Some(snapshot) if snapshot.is_well_formed() => snapshot,
        _ => return (Direction::Unknown, None),
    };

    let index = match snapshot.position_of(watched) {
        Some(index) => index,
        None => return (Direction::Unknown, None),
    };

    let delta = snapshot.post_balances[index] as i128 - snapshot.pre_balances[index] as i128;

    let direction = match delta.signum() {
        1 => Direction::Incoming,
        -1 => Direction::Outgoing,
        _ => return (Direction::Unknown, None),
    };

    let amount = delta.unsigned_abs() as f64 / LAMPORTS_PER_SOL as f64;
    (direction, Some(amount))
}
