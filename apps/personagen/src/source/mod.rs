//! Profile Source — the collaborator that turns a profile URL into a record.

pub mod page;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::profile::ProfileRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Profile page returned status {0}")]
    Status(u16),
}

/// Best-effort extraction of one profile per URL.
///
/// Implementations return partially-populated records — missing sections are
/// empty defaults, not errors. A `SourceError` means no data at all could be
/// obtained for the URL; the caller decides whether to skip or abort.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ProfileRecord, SourceError>;
}
