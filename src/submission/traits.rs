//! Trait abstraction for enrollment delivery to enable mocking in tests

use crate::state::enrollment::{EnrollmentPayload, SubmissionError, SubmissionReceipt};
use async_trait::async_trait;

/// Sends a registration to whatever records it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentSubmitter: Send + Sync {
    async fn submit(
        &self,
        payload: &EnrollmentPayload,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
