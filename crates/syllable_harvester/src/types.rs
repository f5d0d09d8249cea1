use std::fmt;

use syllable_core::HarvestResultKind;
use thiserror::Error;

use crate::SitemapError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Why a harvest run was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarvestFailure {
    #[error("invalid site url {url}: {message}")]
    InvalidSite { url: String, message: String },
    #[error("fetching {url} failed: {source}")]
    Fetch { url: String, source: FetchError },
    #[error("sitemap {url}: {source}")]
    Sitemap { url: String, source: SitemapError },
    #[error("syllable store: {0}")]
    Store(String),
    #[error("harvest worker is not available")]
    WorkerUnavailable,
}

/// Terminal state of a harvest session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestOutcome {
    Completed,
    Cancelled,
    Failed(HarvestFailure),
}

impl HarvestOutcome {
    pub fn kind(&self) -> HarvestResultKind {
        match self {
            HarvestOutcome::Completed => HarvestResultKind::Completed,
            HarvestOutcome::Cancelled => HarvestResultKind::Cancelled,
            HarvestOutcome::Failed(_) => HarvestResultKind::Failed,
        }
    }
}
