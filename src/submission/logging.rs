//! Submitter that records registrations in the log instead of a server

use super::traits::EnrollmentSubmitter;
use crate::state::enrollment::{EnrollmentPayload, SubmissionError, SubmissionReceipt};
use async_trait::async_trait;

/// Default base URL of the PPDB backend
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Logs each payload as JSON along with the endpoint it would be posted to
#[derive(Debug, Clone)]
pub struct LoggingSubmitter {
    endpoint: String,
}

impl LoggingSubmitter {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/ppdb/registrations", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for LoggingSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl EnrollmentSubmitter for LoggingSubmitter {
    async fn submit(
        &self,
        payload: &EnrollmentPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| SubmissionError::Unavailable(e.to_string()))?;
        let receipt = SubmissionReceipt::new();
        tracing::info!(
            endpoint = %self.endpoint,
            reference = %receipt.reference_id,
            documents = payload.documents.len(),
            %body,
            "POST registration"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::enrollment::EnrollmentForm;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            LoggingSubmitter::new("https://api.sekolah.id/").endpoint(),
            "https://api.sekolah.id/ppdb/registrations"
        );
        assert_eq!(
            LoggingSubmitter::default().endpoint(),
            "http://localhost:5001/ppdb/registrations"
        );
    }

    #[tokio::test]
    async fn test_submit_returns_fresh_receipts() {
        let submitter = LoggingSubmitter::default();
        let payload = EnrollmentPayload::from_form(&EnrollmentForm::new());
        let first = submitter.submit(&payload).await.unwrap();
        let second = submitter.submit(&payload).await.unwrap();
        assert_ne!(first.reference_id, second.reference_id);
    }
}
