use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::form::FormFields;

use super::error::ServiceError;
use super::{SubmissionOutcome, SubmissionService};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Posts the form as JSON to `{base_url}{path}`.
pub struct HttpSubmissionService {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let endpoint = config.endpoint();
        let url = reqwest::Url::parse(&endpoint).map_err(|e| ServiceError::InvalidEndpoint {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidEndpoint {
                url: endpoint,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|source| ServiceError::ClientBuild { source })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionService for HttpSubmissionService {
    async fn submit(&self, fields: &FormFields) -> SubmissionOutcome {
        let request_id = Uuid::new_v4().to_string();
        tracing::info!(
            request_id = %request_id,
            endpoint = %self.endpoint,
            "Submitting product"
        );

        let result = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, &request_id)
            .json(fields)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::info!(request_id = %request_id, status, "Backend responded");
                SubmissionOutcome::Status(status)
            }
            Err(err) => {
                let reason = if err.is_timeout() {
                    format!("request timed out: {err}")
                } else {
                    err.to_string()
                };
                tracing::warn!(request_id = %request_id, error = %reason, "Submission failed");
                SubmissionOutcome::NetworkError { reason }
            }
        }
    }
}
