//! Product Submission Service: the collaborator that sends the form to a backend.
//!
//! The form only ever looks at the status code, and a transport failure is an
//! outcome like any other. Implementations must not fail.

mod error;
mod http;

pub use error::ServiceError;
pub use http::HttpSubmissionService;

use async_trait::async_trait;

use crate::form::FormFields;

/// What came back from one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend answered with this HTTP status.
    Status(u16),
    /// No response: unreachable host, refused connection, timeout.
    NetworkError { reason: String },
}

impl SubmissionOutcome {
    pub fn network_error(reason: impl Into<String>) -> Self {
        SubmissionOutcome::NetworkError {
            reason: reason.into(),
        }
    }
}

#[async_trait]
pub trait SubmissionService: Send + Sync + 'static {
    async fn submit(&self, fields: &FormFields) -> SubmissionOutcome;
}
