//! Canned balance and feed used when live ledger queries are disabled.

use crate::models::{ClassifiedTransaction, Direction};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

pub const MOCK_BALANCE_SOL: f64 = 42.5678;
pub const DEFAULT_BALANCE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_HISTORY_DELAY: Duration = Duration::from_millis(800);

/// (signature prefix, hours ago, direction, amount in SOL)
const MOCK_FEED: [(&str, i64, Direction, Option<f64>); 10] = [
    ("5J8W", 1, Direction::Incoming, Some(5.25)),
    ("3mK9", 2, Direction::Outgoing, Some(2.1)),
    ("8pL4", 3, Direction::Incoming, Some(10.5)),
    ("1nM2", 4, Direction::Outgoing, Some(3.75)),
    ("7qP6", 5, Direction::Incoming, Some(8.333)),
    ("2rN5", 6, Direction::Incoming, Some(15.0)),
    ("9sT8", 7, Direction::Outgoing, Some(1.25)),
    ("4tU7", 8, Direction::Incoming, Some(20.5)),
    ("6vW9", 9, Direction::Unknown, None),
    ("5wX1", 10, Direction::Outgoing, Some(0.5)),
];

#[derive(Debug, Clone)]
pub struct MockDataSource {
    balance_delay: Duration,
    history_delay: Duration,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE_DELAY, DEFAULT_HISTORY_DELAY)
    }
}

impl MockDataSource {
    pub fn new(balance_delay: Duration, history_delay: Duration) -> Self {
        Self {
            balance_delay,
            history_delay,
        }
    }

    /// Balance in SOL
    pub async fn balance(&self) -> f64 {
        sleep(self.balance_delay).await;
        MOCK_BALANCE_SOL
    }

    /// Up to `limit` pre-classified entries, most recent first.
    pub async fn history(&self, limit: usize) -> Vec<ClassifiedTransaction> {
        sleep(self.history_delay).await;

        let now = chrono::Utc::now().timestamp();
        MOCK_FEED
            .iter()
            .take(limit)
            .map(|(prefix, hours_ago, direction, amount)| {
                ClassifiedTransaction::new(
                    format!("{}...{}", prefix, random_suffix()),
                    Some(now - hours_ago * 3600),
                    *direction,
                    *amount,
                )
            })
            .collect()
    }
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect()
}
