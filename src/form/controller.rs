use std::sync::Arc;

use crate::mvi::Reducer;
use crate::service::{SubmissionOutcome, SubmissionService};

use super::intent::FormIntent;
use super::reducer::{classify, FormReducer, Resolution};
use super::state::{FormFields, FormState, Phase};
use super::validation::Field;

/// A submission that passed validation and is waiting for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub fields: FormFields,
}

/// One mounted product form: its state plus the service it submits to.
///
/// Presentation layers drive it through `edit`/`blur`/`submit`. Those that
/// run the request elsewhere (the terminal UI hands it to a worker) use
/// `begin_submit` and `settle` instead of `submit`.
pub struct ProductForm {
    state: FormState,
    service: Arc<dyn SubmissionService>,
}

impl ProductForm {
    pub fn new(service: Arc<dyn SubmissionService>) -> Self {
        Self {
            state: FormState::default(),
            service,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn service(&self) -> Arc<dyn SubmissionService> {
        Arc::clone(&self.service)
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.state.is_trigger_enabled()
    }

    fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormIntent::Edit {
            field,
            value: value.into(),
        });
    }

    pub fn blur(&mut self, field: Field) {
        self.dispatch(FormIntent::Blur { field });
    }

    pub fn reset(&mut self) {
        self.dispatch(FormIntent::Reset);
    }

    /// Runs validation and, if every field is filled, returns the request to send.
    ///
    /// Returns `None` when validation failed or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if self.state.is_sending() {
            tracing::debug!("Submit ignored, attempt {} still in flight", self.state.attempt);
            return None;
        }

        self.dispatch(FormIntent::Submit);
        self.dispatch(FormIntent::Validate);

        match self.state.phase {
            Phase::Sending => {
                tracing::info!(attempt = self.state.attempt, "Form valid, submitting");
                Some(PendingSubmission {
                    attempt: self.state.attempt,
                    fields: self.state.fields.clone(),
                })
            }
            _ => {
                let missing: Vec<_> = Field::ALL
                    .iter()
                    .filter(|field| self.state.errors.get(**field).is_some())
                    .map(|field| field.label())
                    .collect();
                tracing::debug!(?missing, "Form invalid, not submitting");
                None
            }
        }
    }

    /// Applies the service's answer for `attempt`. Stale answers are dropped.
    pub fn settle(&mut self, attempt: u64, outcome: SubmissionOutcome) {
        if self.state.in_flight_attempt() != Some(attempt) {
            tracing::debug!(attempt, "Discarding stale submission outcome");
            return;
        }

        match classify(&outcome) {
            Resolution::Saved => tracing::info!(attempt, "Product saved"),
            Resolution::Failed(error) => {
                tracing::info!(attempt, ?outcome, "Submission rejected: {error}")
            }
            Resolution::Unhandled(status) => {
                tracing::warn!(attempt, status, "Unhandled submission status, no message shown")
            }
        }

        self.dispatch(FormIntent::Settle { attempt, outcome });
    }

    /// Withdraws `attempt` when it could not be handed to the service.
    pub fn abandon(&mut self, attempt: u64) {
        self.dispatch(FormIntent::Abandon { attempt });
    }

    /// Validates, submits if valid, and waits for the outcome.
    pub async fn submit(&mut self) -> &FormState {
        if let Some(pending) = self.begin_submit() {
            let outcome = self.service.submit(&pending.fields).await;
            self.settle(pending.attempt, outcome);
        }
        &self.state
    }
}
