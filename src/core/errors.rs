use thiserror::Error;

/// Transport-level probe failures. An HTTP response with an error status is
/// not a `ProbeError`; only requests that never produced a status line end up
/// here.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type ProbeResult<T> = Result<T, ProbeError>;

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_connect() {
            ProbeError::Connect(root_cause(&err))
        } else {
            ProbeError::Transport(root_cause(&err))
        }
    }
}

/// The innermost cause carries the readable detail ("Connection refused",
/// "failed to lookup address"); reqwest's outer layers only say that a
/// request failed.
fn root_cause(err: &reqwest::Error) -> String {
    let mut source: &dyn std::error::Error = err;
    while let Some(cause) = source.source() {
        source = cause;
    }
    source.to_string()
}
