use futures::future::join_all;
use log::{debug, info, warn};
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

use crate::probers::Prober;
use crate::report::{ProbeOutcome, Report};
use crate::stats::StatsTracker;

/// Fans a single GET probe out to every configured target and aggregates the
/// per-target outcomes into an ordered report.
pub struct Dispatcher {
    prober: Box<dyn Prober>,
    stats: Arc<StatsTracker>,
}

impl Dispatcher {
    pub fn new(prober: Box<dyn Prober>) -> Self {
        info!("Initializing dispatcher");
        Self {
            prober,
            stats: Arc::new(StatsTracker::new()),
        }
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Probe every target once, all at the same time. The report is collected
    /// positionally, so its order matches `targets` regardless of which probe
    /// finishes first, and the call returns only once the slowest probe is
    /// done. A failing target contributes an error outcome instead of
    /// aborting the batch.
    pub async fn run(&self, targets: &[Url]) -> Report {
        let dispatch_id = Uuid::now_v7();
        info!("Dispatching {} probes ({})", targets.len(), dispatch_id);
        self.stats.record_dispatch();

        let handles: Vec<_> = targets
            .iter()
            .map(|url| {
                let prober = self.prober.box_clone();
                let url = url.clone();
                tokio::spawn(async move { prober.probe(&url).await })
            })
            .collect();

        let results = join_all(handles).await;

        let mut outcomes = Vec::with_capacity(targets.len());
        for (url, result) in targets.iter().zip(results) {
            let outcome = match result {
                Ok(Ok(status)) => {
                    debug!("Target {} answered {} ({})", url, status, dispatch_id);
                    ProbeOutcome::response(url.clone(), status)
                }
                Ok(Err(err)) => {
                    warn!("Probe failed for {}: {} ({})", url, err, dispatch_id);
                    ProbeOutcome::failure(url.clone(), err.to_string())
                }
                // A panicked probe task still owes its target an outcome.
                Err(err) => {
                    warn!("Probe task for {} aborted: {} ({})", url, err, dispatch_id);
                    ProbeOutcome::failure(url.clone(), format!("probe task aborted: {}", err))
                }
            };
            self.stats.record_outcome(&outcome);
            outcomes.push(outcome);
        }

        self.stats.log_summary();
        Report::new(outcomes)
    }
}
