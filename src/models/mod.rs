// Ledger records as the feed sees them
// Classified output rows
// API request/response models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of value flow relative to the watched address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
    Unknown,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
            Direction::Unknown => write!(f, "unknown"),
        }
    }
}

/// One entry from a signature listing, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    pub signature: String,
    /// `None` while the ledger has not recorded a block time yet
    pub block_time: Option<i64>,
}

impl SignatureInfo {
    pub fn new(signature: impl Into<String>, block_time: Option<i64>) -> Self {
        Self {
            signature: signature.into(),
            block_time,
        }
    }
}

/// Account keys paired by position with their lamport balances before and
/// after a transaction executed.
///
/// Balances are signed so that a record carrying a negative entry can be
/// represented and rejected by the classifier instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAccountSnapshot {
    pub account_keys: Vec<String>,
    pub pre_balances: Vec<i64>,
    pub post_balances: Vec<i64>,
}

impl LedgerAccountSnapshot {
    pub fn new(account_keys: Vec<String>, pre_balances: Vec<i64>, post_balances: Vec<i64>) -> Self {
        Self {
            account_keys,
            pre_balances,
            post_balances,
        }
    }

    /// True when the three sequences line up and no balance is negative.
    pub fn is_well_formed(&self) -> bool {
        let len = self.account_keys.len();
        self.pre_balances.len() == len
            && self.post_balances.len() == len
            && self
                .pre_balances
                .iter()
                .chain(self.post_balances.iter())
                .all(|balance| *balance >= 0)
    }

    /// Index of the first account equal to `address`.
    pub fn position_of(&self, address: &str) -> Option<usize> {
        self.account_keys.iter().position(|key| key == address)
    }
}

/// A transfer row in the merchant feed. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTransaction {
    pub signature: String,
    pub timestamp: Option<i64>,
    pub direction: Direction,
    /// SOL, full precision; `None` whenever `direction` is unknown
    pub amount: Option<f64>,
}

impl ClassifiedTransaction {
    pub fn new(
        signature: String,
        timestamp: Option<i64>,
        direction: Direction,
        amount: Option<f64>,
    ) -> Self {
        Self {
            signature,
            timestamp,
            direction,
            amount,
        }
    }

    /// Placeholder row for a signature whose detail could not be used.
    pub fn unknown(info: &SignatureInfo) -> Self {
        Self::new(info.signature.clone(), info.block_time, Direction::Unknown, None)
    }
}

/// Balance plus feed for one watched address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub address: String,
    pub balance: f64,
    pub transactions: Vec<ClassifiedTransaction>,
}
