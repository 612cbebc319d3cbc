use crate::blockchain::ledger::LedgerQueryService;
use crate::blockchain::models::extract_snapshot;
use crate::config::Config;
use crate::models::{LedgerAccountSnapshot, SignatureInfo};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_transaction_status::UiTransactionEncoding;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC error: {0}")]
    RpcError(#[from] solana_client::client_error::ClientError),

    #[error("Invalid signature: {0}")]
    SignatureError(String),

    #[error("Invalid public key: {0}")]
    PubkeyError(String),

    #[error("Transaction not found: {0}")]
    NotFound(String),

    #[error("Timed out waiting for {0}")]
    Timeout(String),
}

pub struct SolanaClient {
    rpc_client: RpcClient,
    commitment: CommitmentConfig,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl SolanaClient {
    pub fn new(config: &Config) -> Self {
        let rpc_url = &config.solana_rpc_url;
        let timeout = Duration::from_secs(config.rpc_timeout_secs);

        // Use commitment level from config or default to "confirmed"
        let commitment = match config.solana_commitment_level.as_str() {
            "processed" => CommitmentConfig::processed(),
            "confirmed" => CommitmentConfig::confirmed(),
            "finalized" => CommitmentConfig::finalized(),
            _ => CommitmentConfig::confirmed(),
        };

        info!(
            "Initializing Solana client with RPC endpoint: {}, commitment: {:?}",
            rpc_url, commitment
        );

        let rpc_client =
            RpcClient::new_with_timeout_and_commitment(rpc_url.clone(), timeout, commitment);

        let rate_limiter = config
            .rpc_rate_limit
            .and_then(NonZeroU32::new)
            .map(|per_second| {
                info!("Limiting RPC requests to {} per second", per_second);
                RateLimiter::direct(Quota::per_second(per_second))
            });

        Self {
            rpc_client,
            commitment,
            rate_limiter,
        }
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }
    }

    fn parse_pubkey(address: &str) -> Result<Pubkey, ClientError> {
        Pubkey::from_str(address).map_err(|_| ClientError::PubkeyError(address.to_string()))
    }
}

#[async_trait]
impl LedgerQueryService for SolanaClient {
    async fn get_balance(&self, address: &str) -> Result<u64, ClientError> {
        let pubkey = Self::parse_pubkey(address)?;

        self.throttle().await;
        let response = self
            .rpc_client
            .get_balance_with_commitment(&pubkey, self.commitment)
            .await?;

        debug!("Balance for {} at slot {}: {} lamports", address, response.context.slot, response.value);
        Ok(response.value)
    }

    async fn get_signatures(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ClientError> {
        let pubkey = Self::parse_pubkey(address)?;

        self.throttle().await;
        let signatures = self
            .rpc_client
            .get_signatures_for_address_with_config(
                &pubkey,
                GetConfirmedSignaturesForAddress2Config {
                    before: None,
                    until: None,
                    limit: Some(limit),
                    commitment: Some(self.commitment),
                },
            )
            .await?;

        debug!("Retrieved {} signatures for {}", signatures.len(), address);

        Ok(signatures
            .into_iter()
            .map(|status| SignatureInfo::new(status.signature, status.block_time))
            .collect())
    }

    async fn get_transaction_detail(
        &self,
        signature_str: &str,
    ) -> Result<Option<LedgerAccountSnapshot>, ClientError> {
        let signature = Signature::from_str(signature_str)
            .map_err(|_| ClientError::SignatureError(signature_str.to_string()))?;

        // Parsed encoding lists lookup-table accounts alongside static keys
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::JsonParsed),
            commitment: Some(self.commitment),
            max_supported_transaction_version: Some(0),
        };

        self.throttle().await;
        let tx = self
            .rpc_client
            .get_transaction_with_config(&signature, config)
            .await?;

        Ok(extract_snapshot(signature_str, &tx))
    }
}
