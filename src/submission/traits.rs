//! Trait abstraction for the application submission sink

use crate::state::{ApplicationDraft, SubmissionReceipt};
use async_trait::async_trait;

/// Errors a submission sink can report
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Application was rejected: {0}")]
    Rejected(String),

    #[error("Could not reach the application service: {0}")]
    Unavailable(String),

    #[error("Failed to encode application: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Submission was cancelled")]
    Cancelled,
}

/// Accepts a completed application, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Submit the assembled application
    async fn submit(&self, draft: ApplicationDraft) -> Result<SubmissionReceipt, SubmissionError>;
}
