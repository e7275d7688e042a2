use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use super::Prober;
use crate::core::{ProbeError, ProbeResult};

/// Scripted outcome for one target URL.
#[derive(Clone)]
pub struct MockProbe {
    outcome: Result<u16, String>,
    delay: Option<Duration>,
}

impl MockProbe {
    pub fn status(status: u16) -> Self {
        Self {
            outcome: Ok(status),
            delay: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Test prober answering from a fixed script keyed by URL.
#[derive(Clone)]
pub struct MockProber {
    probes: Arc<HashMap<String, MockProbe>>,
    calls: Arc<AtomicUsize>,
}

impl MockProber {
    pub fn new(probes: Vec<(Url, MockProbe)>) -> Self {
        Self {
            probes: Arc::new(
                probes
                    .into_iter()
                    .map(|(url, probe)| (url.to_string(), probe))
                    .collect(),
            ),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of probes issued across all clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for MockProber {
    async fn probe(&self, url: &Url) -> ProbeResult<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let probe = self
            .probes
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| MockProbe::error(format!("no scripted outcome for {}", url)));

        if let Some(delay) = probe.delay {
            sleep(delay).await;
        }

        match probe.outcome {
            Ok(status) => Ok(status),
            Err(message) => Err(ProbeError::Connect(message)),
        }
    }

    fn box_clone(&self) -> Box<dyn Prober> {
        Box::new(self.clone())
    }
}
