//! Display shapes for the dashboard. Rounding happens here and nowhere else.

use crate::models::{ClassifiedTransaction, Dashboard, Direction};
use chrono::{DateTime, Utc};
use serde::Serialize;

const EXPLORER_TX_URL: &str = "https://solscan.io/tx/";

#[derive(Debug, Serialize)]
pub struct BalanceView {
    pub address: String,
    pub balance: f64,
    pub display: String,
}

impl BalanceView {
    pub fn new(address: &str, balance: f64, decimals: usize) -> Self {
        Self {
            address: address.to_string(),
            balance,
            display: format_sol(balance, decimals),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub signature: String,
    pub short_signature: String,
    pub timestamp: Option<i64>,
    pub time: Option<String>,
    pub direction: Direction,
    pub amount: Option<f64>,
    pub display_amount: Option<String>,
    pub explorer_url: String,
}

impl TransactionView {
    pub fn new(tx: &ClassifiedTransaction, decimals: usize) -> Self {
        Self {
            signature: tx.signature.clone(),
            short_signature: short_signature(&tx.signature),
            timestamp: tx.timestamp,
            time: tx.timestamp.and_then(format_time),
            direction: tx.direction,
            amount: tx.amount,
            display_amount: display_amount(tx.direction, tx.amount, decimals),
            explorer_url: format!("{}{}", EXPLORER_TX_URL, tx.signature),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub balance: BalanceView,
    pub transactions: Vec<TransactionView>,
    pub payment_request: String,
}

impl DashboardView {
    pub fn new(dashboard: &Dashboard, decimals: usize, payment_request: String) -> Self {
        Self {
            balance: BalanceView::new(&dashboard.address, dashboard.balance, decimals),
            transactions: transaction_views(&dashboard.transactions, decimals),
            payment_request,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentRequestView {
    pub uri: String,
}

pub fn transaction_views(transactions: &[ClassifiedTransaction], decimals: usize) -> Vec<TransactionView> {
    transactions
        .iter()
        .map(|tx| TransactionView::new(tx, decimals))
        .collect()
}

pub fn format_sol(amount: f64, decimals: usize) -> String {
    format!("{:.*} SOL", decimals, amount)
}

/// `+1.5000 SOL` for incoming, `-1.5000 SOL` for outgoing, nothing otherwise.
pub fn display_amount(direction: Direction, amount: Option<f64>, decimals: usize) -> Option<String> {
    let amount = amount?;
    match direction {
        Direction::Incoming => Some(format!("+{}", format_sol(amount, decimals))),
        Direction::Outgoing => Some(format!("-{}", format_sol(amount, decimals))),
        Direction::Unknown => None,
    }
}

/// First and last eight characters of a signature.
pub fn short_signature(signature: &str) -> String {
    let chars: Vec<char> = signature.chars().collect();
    if chars.len() <= 16 {
        return signature.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

fn format_time(timestamp: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|time| time.to_rfc3339())
}
