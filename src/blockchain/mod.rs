pub mod classifier;
pub mod client;
pub mod history;
pub mod ledger;
pub mod mock;
pub mod models;

// Re-exports for convenience
pub use classifier::classify;
pub use client::SolanaClient;
pub use history::fetch_history;
pub use ledger::LedgerQueryService;
pub use mock::MockDataSource;
