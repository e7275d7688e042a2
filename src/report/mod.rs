use serde::{Deserialize, Serialize};
use url::Url;

/// Outcome of a single probe. A target that answered at all is `Response`,
/// whatever its status code; `Failed` is reserved for transport-level
/// failures where no status line was ever observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeOutcome {
    Response { url: Url, status: u16 },
    Failed { url: Url, error: String },
}

impl ProbeOutcome {
    pub fn response(url: Url, status: u16) -> Self {
        Self::Response { url, status }
    }

    pub fn failure(url: Url, error: impl Into<String>) -> Self {
        Self::Failed {
            url,
            error: error.into(),
        }
    }

    pub fn url(&self) -> &Url {
        match self {
            Self::Response { url, .. } | Self::Failed { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Response { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

/// Ordered collection of per-target outcomes. Order matches the configured
/// target list, not completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    outcomes: Vec<ProbeOutcome>,
}

impl Report {
    pub fn new(outcomes: Vec<ProbeOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeOutcome> {
        self.outcomes.iter()
    }
}

impl IntoIterator for Report {
    type Item = ProbeOutcome;
    type IntoIter = std::vec::IntoIter<ProbeOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}
