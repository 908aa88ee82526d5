use thiserror::Error;

use crate::llm_client::LlmError;
use crate::source::SourceError;

/// Application-level error type returned by the pipeline stages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Profile source error: {0}")]
    Source(#[from] SourceError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
