use merchant_feed_service::{
    blockchain::{client::SolanaClient, LedgerQueryService},
    config::Config,
    payment::build_payment_request,
    service::DashboardService,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting ledger smoke test...");

    let config = Config::from_env();
    let test_address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "DrUdzADxrhtFVYG8BqazRsjsPaZbLmzE5EbtevnAB39i".to_string());

    // 1. Raw RPC calls
    let client = Arc::new(SolanaClient::new(&config));

    info!("Testing balance retrieval...");
    let lamports = client.get_balance(&test_address).await?;
    info!("✅ Balance: {} lamports", lamports);

    info!("Testing signature listing...");
    let signatures = client.get_signatures(&test_address, 5).await?;
    info!("✅ Retrieved {} signatures for {}", signatures.len(), test_address);

    if let Some(first) = signatures.first() {
        match client.get_transaction_detail(&first.signature).await {
            Ok(Some(snapshot)) => info!(
                "✅ Snapshot for {} lists {} accounts",
                first.signature,
                snapshot.account_keys.len()
            ),
            Ok(None) => error!("❌ Transaction {} had no usable balance data", first.signature),
            Err(e) => error!("❌ Failed to get transaction: {}", e),
        }
    }

    // 2. Full dashboard load through the service
    info!("Testing dashboard load...");
    let service = DashboardService::live(client).with_detail_timeout(config.detail_timeout);
    let dashboard = service
        .load_dashboard(&test_address, config.history_limit, &CancellationToken::new())
        .await?;

    info!("✅ Balance: {} SOL", dashboard.balance);
    for tx in &dashboard.transactions {
        info!(
            "   {} {:?} {} {:?}",
            tx.signature, tx.timestamp, tx.direction, tx.amount
        );
    }

    info!("Payment request: {}", build_payment_request(&test_address, Some(1.5)));
    info!("Ledger smoke test completed");

    Ok(())
}
