//! Background submission that the UI loop polls without blocking

use super::traits::{SubmissionError, SubmissionSink};
use crate::state::{ApplicationDraft, SubmissionReceipt};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub type SubmissionResult = Result<SubmissionReceipt, SubmissionError>;

/// A submission running on the tokio runtime
pub struct SubmissionTask {
    handle: JoinHandle<SubmissionResult>,
}

impl SubmissionTask {
    pub fn spawn(sink: Arc<dyn SubmissionSink>, draft: ApplicationDraft) -> Self {
        let handle = tokio::spawn(async move { sink.submit(draft).await });
        Self { handle }
    }

    /// Outcome of the submission, or `None` while it is still running
    pub async fn poll(&mut self) -> Option<SubmissionResult> {
        if !self.handle.is_finished() {
            return None;
        }
        Some(match (&mut self.handle).await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SubmissionError::Cancelled),
            Err(e) => Err(SubmissionError::Unavailable(e.to_string())),
        })
    }

    /// Abort the in-flight submission; its outcome is discarded
    pub fn cancel(self) {
        self.handle.abort();
    }
}
