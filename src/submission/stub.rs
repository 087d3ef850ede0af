//! Stand-in submission sink
//!
//! Waits a fixed delay, logs the payload and always succeeds. It stands in
//! for the program's application service, which is not wired up yet.

use super::traits::{SubmissionError, SubmissionSink};
use crate::state::{ApplicationDraft, SubmissionReceipt};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round-trip time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

pub struct StubSubmissionSink {
    delay: Duration,
}

impl StubSubmissionSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionSink for StubSubmissionSink {
    async fn submit(&self, draft: ApplicationDraft) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(&draft)?;
        let receipt = SubmissionReceipt::new();
        tracing::info!(
            "Application {} submitted for {}: {payload}",
            receipt.reference(),
            draft.email
        );
        Ok(receipt)
    }
}
