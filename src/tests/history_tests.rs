#[cfg(test)]
mod tests {
    use crate::blockchain::history::fetch_history;
    use crate::models::{Direction, SignatureInfo};
    use crate::tests::{
        signature_infos, transfer_snapshot, FakeDetail, FakeLedger, VALID_SOURCE_ADDRESS,
    };
    use std::time::Duration;
    use tokio::time::Instant;

    const WATCHED: &str = VALID_SOURCE_ADDRESS;

    /// Ten signatures; even ones incoming, odd ones outgoing, `sig_3` and
    /// `sig_7` failing.
    fn ledger_with_two_failures() -> FakeLedger {
        let mut ledger = FakeLedger::new().with_signatures(signature_infos(10));
        for i in 0..10 {
            let signature = format!("sig_{}", i);
            let detail = match i {
                3 | 7 => FakeDetail::Fail,
                _ if i % 2 == 0 => FakeDetail::Snapshot(
                    transfer_snapshot(WATCHED, 1_000_000_000, 1_000_000_000 + (i + 1) * 100_000_000),
                    Duration::ZERO,
                ),
                _ => FakeDetail::Snapshot(
                    transfer_snapshot(WATCHED, 1_000_000_000, 500_000_000),
                    Duration::ZERO,
                ),
            };
            ledger = ledger.with_detail(&signature, detail);
        }
        ledger
    }

    #[tokio::test]
    async fn test_partial_failures_degrade_to_unknown() {
        let ledger = ledger_with_two_failures();

        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert_eq!(history.len(), 10, "Every listed signature must yield an entry");
        let signatures: Vec<_> = history.iter().map(|tx| tx.signature.as_str()).collect();
        let expected: Vec<_> = (0..10).map(|i| format!("sig_{}", i)).collect();
        assert_eq!(signatures, expected.iter().map(String::as_str).collect::<Vec<_>>());

        let unknown: Vec<_> = history
            .iter()
            .filter(|tx| tx.direction == Direction::Unknown)
            .map(|tx| tx.signature.as_str())
            .collect();
        assert_eq!(unknown, vec!["sig_3", "sig_7"]);
        assert!(history
            .iter()
            .filter(|tx| tx.direction == Direction::Unknown)
            .all(|tx| tx.amount.is_none()));

        assert_eq!(history[0].direction, Direction::Incoming);
        assert_eq!(history[0].amount, Some(0.1));
        assert_eq!(history[1].direction, Direction::Outgoing);
        assert_eq!(history[1].amount, Some(0.5));
        assert_eq!(history[4].amount, Some(0.5));
    }

    #[tokio::test]
    async fn test_failed_entries_keep_listing_timestamp() {
        let ledger = FakeLedger::new()
            .with_signatures(vec![
                SignatureInfo::new("recent", None),
                SignatureInfo::new("older", Some(1_699_000_000)),
            ])
            .with_detail("recent", FakeDetail::Fail)
            .with_detail("older", FakeDetail::Fail);

        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp, None);
        assert_eq!(history[1].timestamp, Some(1_699_000_000));
        assert!(history.iter().all(|tx| tx.direction == Direction::Unknown));
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_preserved_when_completion_is_reversed() {
        // Earlier signatures take longer, so they complete last
        let mut ledger = FakeLedger::new().with_signatures(signature_infos(5));
        for i in 0..5u64 {
            ledger = ledger.with_detail(
                &format!("sig_{}", i),
                FakeDetail::Snapshot(
                    transfer_snapshot(WATCHED, 0, (i as i64 + 1) * 1_000),
                    Duration::from_millis(500 - i * 100),
                ),
            );
        }

        let history = fetch_history(&ledger, WATCHED, 5, None).await.unwrap();

        for (i, tx) in history.iter().enumerate() {
            assert_eq!(tx.signature, format!("sig_{}", i));
            assert_eq!(tx.timestamp, Some(1_700_000_000 - i as i64 * 60));
            assert_eq!(tx.amount, Some((i as f64 + 1.0) * 1_000.0 / 1_000_000_000.0));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_fetches_run_concurrently() {
        let mut ledger = FakeLedger::new().with_signatures(signature_infos(10));
        for i in 0..10 {
            ledger = ledger.with_detail(
                &format!("sig_{}", i),
                FakeDetail::Snapshot(transfer_snapshot(WATCHED, 10, 20), Duration::from_secs(1)),
            );
        }

        let started = Instant::now();
        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert_eq!(history.len(), 10);
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "Detail fetches should overlap, took {:?}",
            started.elapsed()
        );
    }

    #[tokio::test]
    async fn test_listing_failure_is_a_hard_error() {
        let ledger = FakeLedger::new();

        let result = fetch_history(&ledger, WATCHED, 10, None).await;

        assert!(result.is_err());
        assert_eq!(ledger.calls(), 1, "No detail fetch without a listing");
    }

    #[tokio::test]
    async fn test_empty_listing_is_empty_success() {
        let ledger = FakeLedger::new().with_signatures(Vec::new());

        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert!(history.is_empty());
        assert_eq!(ledger.calls(), 1);
    }

    #[tokio::test]
    async fn test_record_without_balance_data_is_unknown() {
        let ledger = FakeLedger::new()
            .with_signatures(signature_infos(1))
            .with_detail("sig_0", FakeDetail::Empty);

        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].direction, Direction::Unknown);
        assert_eq!(history[0].amount, None);
    }

    #[tokio::test]
    async fn test_transaction_not_touching_watched_address_is_unknown() {
        let ledger = FakeLedger::new()
            .with_signatures(signature_infos(1))
            .with_detail(
                "sig_0",
                FakeDetail::Snapshot(transfer_snapshot("someone-else", 10, 5), Duration::ZERO),
            );

        let history = fetch_history(&ledger, WATCHED, 10, None).await.unwrap();

        assert_eq!(history[0].direction, Direction::Unknown);
        assert_eq!(history[0].amount, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_timeout_counts_as_failure() {
        let ledger = FakeLedger::new()
            .with_signatures(signature_infos(3))
            .with_detail("sig_0", FakeDetail::Snapshot(transfer_snapshot(WATCHED, 0, 7), Duration::ZERO))
            .with_detail("sig_1", FakeDetail::Hang)
            .with_detail("sig_2", FakeDetail::Snapshot(transfer_snapshot(WATCHED, 7, 0), Duration::ZERO));

        let history = fetch_history(&ledger, WATCHED, 3, Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].direction, Direction::Incoming);
        assert_eq!(history[1].direction, Direction::Unknown);
        assert_eq!(history[1].amount, None);
        assert_eq!(history[2].direction, Direction::Outgoing);
    }

    #[tokio::test]
    async fn test_limit_bounds_the_listing() {
        let ledger = FakeLedger::new().with_signatures(signature_infos(10));

        let history = fetch_history(&ledger, WATCHED, 3, None).await.unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[2].signature, "sig_2");
    }
}
