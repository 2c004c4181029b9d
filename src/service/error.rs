use thiserror::Error;

/// Errors raised while setting up the HTTP submission service.
///
/// Submissions themselves never fail; see [`super::SubmissionOutcome`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid submission endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}
