use crate::core::ProbeResult;
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait Prober: Send + Sync {
    /// Issue a single GET against `url` and return the observed status code.
    /// Any response counts, 4xx and 5xx included; `Err` means the request
    /// never produced a status line.
    async fn probe(&self, url: &Url) -> ProbeResult<u16>;

    fn box_clone(&self) -> Box<dyn Prober>;
}
