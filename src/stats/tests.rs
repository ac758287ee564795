#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::stats::traits::stats_reporter::StatsReporter;

    #[test]
    fn test_new_records_start_time() {
        let stats = StatsAtomics::new();
        assert!(stats.get_stats().started > 0);
        assert_eq!(stats.get_stats().announces, 0);
    }

    #[test]
    fn test_update_adds_and_subtracts() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::Announces, 3);
        stats.update_stats(StatsEvent::Announces, -1);
        stats.update_stats(StatsEvent::PeersEvicted, 10);
        let snapshot = stats.get_stats();
        assert_eq!(snapshot.announces, 2);
        assert_eq!(snapshot.peers_evicted, 10);
        assert_eq!(snapshot.scrapes, 0);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::BadRequests, 5);
        stats.set_stats(StatsEvent::BadRequests, 1);
        assert_eq!(stats.get_stats().bad_requests, 1);
    }

    #[test]
    fn test_concurrent_updates() {
        let stats = Arc::new(StatsAtomics::new());
        let handles: Vec<_> = (0..8).map(|_| {
            let stats = stats.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    stats.update_stats(StatsEvent::Scrapes, 1);
                }
            })
        }).collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_stats().scrapes, 8000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::InternalErrors, 2);
        let json = serde_json::to_value(stats.get_stats()).unwrap();
        assert_eq!(json["internal_errors"], 2);
    }
}
