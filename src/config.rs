// Configuration structure for:
// - RPC endpoint URL, commitment, timeout and rate limit
// - Live or mock data mode
// - History size, detail timeout and caller retries
// - Server listening address/port
// - Presentation settings (display decimals, payment scheme)

use crate::blockchain::mock::{DEFAULT_BALANCE_DELAY, DEFAULT_HISTORY_DELAY};
use dotenv::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Where balance and history come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Live,
    Mock,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub solana_rpc_url: String,
    pub solana_commitment_level: String,
    pub rpc_timeout_secs: u64,
    pub rpc_rate_limit: Option<u32>,
    pub data_mode: DataMode,
    pub mock_balance_delay: Duration,
    pub mock_history_delay: Duration,
    pub history_limit: usize,
    pub detail_timeout: Option<Duration>,
    pub load_retries: usize,
    pub display_decimals: usize,
    pub payment_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            solana_rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            solana_commitment_level: "confirmed".to_string(),
            rpc_timeout_secs: 30,
            rpc_rate_limit: None,
            data_mode: DataMode::Live,
            mock_balance_delay: DEFAULT_BALANCE_DELAY,
            mock_history_delay: DEFAULT_HISTORY_DELAY,
            history_limit: DEFAULT_HISTORY_LIMIT,
            detail_timeout: None,
            load_retries: 0,
            display_decimals: 4,
            payment_scheme: "solana".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.server_port);
        let solana_rpc_url = env::var("SOLANA_RPC_URL").unwrap_or(defaults.solana_rpc_url);
        let solana_commitment_level =
            env::var("SOLANA_COMMITMENT_LEVEL").unwrap_or(defaults.solana_commitment_level);
        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .map(|v| v.parse().unwrap_or(defaults.rpc_timeout_secs))
            .unwrap_or(defaults.rpc_timeout_secs);
        let rpc_rate_limit = env::var("RPC_RATE_LIMIT")
            .map(|v| v.parse().ok())
            .unwrap_or(None);
        let data_mode = match env::var("USE_MOCK_DATA") {
            Ok(v) if v.eq_ignore_ascii_case("true") || v == "1" => DataMode::Mock,
            _ => DataMode::Live,
        };
        let mock_balance_delay = env::var("MOCK_BALANCE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.mock_balance_delay);
        let mock_history_delay = env::var("MOCK_HISTORY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.mock_history_delay);
        let history_limit = env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|limit| (1..=MAX_HISTORY_LIMIT).contains(limit))
            .unwrap_or(defaults.history_limit);
        let detail_timeout = env::var("DETAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs);
        let load_retries = env::var("LOAD_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.load_retries);
        let display_decimals = env::var("DISPLAY_DECIMALS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.display_decimals);
        let payment_scheme = env::var("PAYMENT_SCHEME").unwrap_or(defaults.payment_scheme);

        Self {
            server_host,
            server_port,
            solana_rpc_url,
            solana_commitment_level,
            rpc_timeout_secs,
            rpc_rate_limit,
            data_mode,
            mock_balance_delay,
            mock_history_delay,
            history_limit,
            detail_timeout,
            load_retries,
            display_decimals,
            payment_scheme,
        }
    }
}
