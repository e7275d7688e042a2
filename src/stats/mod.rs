use chrono::{DateTime, Utc};
use log::info;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::report::ProbeOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct DispatchStats {
    pub start_time: DateTime<Utc>,
    pub last_dispatch: Option<DateTime<Utc>>,
    pub dispatches: usize,
    pub total_probes: usize,
    pub responses: usize,
    pub failures: usize,
    pub status_codes: HashMap<u16, usize>,
}

/// Cumulative counters over every dispatch served by this process.
/// Observability only; nothing reads these to make decisions.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<DispatchStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(DispatchStats {
                start_time: Utc::now(),
                last_dispatch: None,
                dispatches: 0,
                total_probes: 0,
                responses: 0,
                failures: 0,
                status_codes: HashMap::new(),
            })),
        }
    }

    pub fn record_dispatch(&self) {
        let mut stats = self.stats.write();
        stats.dispatches += 1;
        stats.last_dispatch = Some(Utc::now());
    }

    pub fn record_outcome(&self, outcome: &ProbeOutcome) {
        let mut stats = self.stats.write();
        stats.total_probes += 1;

        match outcome.status() {
            Some(status) => {
                stats.responses += 1;
                *stats.status_codes.entry(status).or_insert(0) += 1;
            }
            None => stats.failures += 1,
        }
    }

    pub fn snapshot(&self) -> DispatchStats {
        self.stats.read().clone()
    }

    pub fn log_summary(&self) {
        let stats = self.stats.read();
        info!(
            "Dispatch summary: {} dispatches, {} probes, {} responses, {} failures",
            stats.dispatches, stats.total_probes, stats.responses, stats.failures
        );
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn counts_responses_and_failures_separately() {
        let tracker = StatsTracker::new();
        tracker.record_dispatch();
        tracker.record_outcome(&ProbeOutcome::response(url("https://a.example.com/"), 200));
        tracker.record_outcome(&ProbeOutcome::response(url("https://b.example.com/"), 503));
        tracker.record_outcome(&ProbeOutcome::failure(
            url("https://c.example.com/"),
            "connection failed: refused",
        ));

        let stats = tracker.snapshot();
        assert_eq!(stats.dispatches, 1);
        assert_eq!(stats.total_probes, 3);
        assert_eq!(stats.responses, 2);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.status_codes.get(&200), Some(&1));
        assert_eq!(stats.status_codes.get(&503), Some(&1));
        assert!(stats.last_dispatch.is_some());
    }

    #[test]
    fn clones_share_the_same_counters() {
        let tracker = StatsTracker::new();
        let clone = tracker.clone();
        clone.record_outcome(&ProbeOutcome::response(url("https://a.example.com/"), 200));

        assert_eq!(tracker.snapshot().total_probes, 1);
    }
}
