//! Application submission: the sink seam and the background task that drives it

mod stub;
mod task;
mod traits;

pub use stub::{StubSubmissionSink, DEFAULT_DELAY};
pub use task::SubmissionTask;
pub use traits::{SubmissionError, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
