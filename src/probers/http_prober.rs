use async_trait::async_trait;
use log::debug;
use reqwest::{Client, ClientBuilder};
use url::Url;

use super::Prober;
use crate::core::ProbeResult;

const DEFAULT_USER_AGENT: &str = "marinesense-probe/0.1";

/// Probes targets with a shared reqwest client. No per-request timeout is
/// configured, so a hung target blocks only its own probe.
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> ProbeResult<Self> {
        let client = ClientBuilder::new().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Use a caller-configured client instead of the default one.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &Url) -> ProbeResult<u16> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        debug!("Probe for {} answered {}", url, status);
        Ok(status)
    }

    fn box_clone(&self) -> Box<dyn Prober> {
        Box::new(self.clone())
    }
}
