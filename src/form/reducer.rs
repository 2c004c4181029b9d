use crate::mvi::Reducer;
use crate::service::SubmissionOutcome;

use super::intent::FormIntent;
use super::state::{ApiError, FormFields, FormState, Notice, Phase};
use super::validation::{validate_all, validate_field};

/// How a submission outcome settles the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Saved,
    Failed(ApiError),
    /// A status the form has no message for. Settles silently.
    Unhandled(u16),
}

/// Maps a service outcome onto the form's three user-facing results.
pub fn classify(outcome: &SubmissionOutcome) -> Resolution {
    match outcome {
        SubmissionOutcome::Status(status) if (200..300).contains(status) => Resolution::Saved,
        SubmissionOutcome::Status(400) => Resolution::Failed(ApiError::InvalidRequest),
        SubmissionOutcome::Status(404 | 408) | SubmissionOutcome::NetworkError { .. } => {
            Resolution::Failed(ApiError::Connection)
        }
        SubmissionOutcome::Status(status) => Resolution::Unhandled(*status),
    }
}

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, value } => {
                let mut state = state;
                state.fields.set(field, value);
                state
            }

            FormIntent::Blur { field } => {
                let mut state = state;
                let error = validate_field(field, state.fields.get(field));
                state.errors.set(field, error);
                state
            }

            FormIntent::Submit => {
                if state.is_sending() {
                    return state;
                }
                FormState {
                    phase: Phase::Validating,
                    notice: None,
                    ..state
                }
            }

            FormIntent::Validate => {
                if state.phase != Phase::Validating {
                    return state;
                }
                let errors = validate_all(&state.fields);
                if errors.has_any() {
                    FormState {
                        phase: Phase::Settled,
                        errors,
                        ..state
                    }
                } else {
                    FormState {
                        phase: Phase::Sending,
                        errors,
                        attempt: state.attempt + 1,
                        ..state
                    }
                }
            }

            FormIntent::Settle { attempt, outcome } => {
                if state.in_flight_attempt() != Some(attempt) {
                    return state;
                }
                match classify(&outcome) {
                    Resolution::Saved => FormState {
                        phase: Phase::Settled,
                        fields: FormFields::default(),
                        notice: Some(Notice::Saved),
                        ..state
                    },
                    Resolution::Failed(error) => FormState {
                        phase: Phase::Settled,
                        notice: Some(Notice::Failed(error)),
                        ..state
                    },
                    Resolution::Unhandled(_) => FormState {
                        phase: Phase::Settled,
                        ..state
                    },
                }
            }

            FormIntent::Abandon { attempt } => {
                if state.in_flight_attempt() != Some(attempt) {
                    return state;
                }
                FormState {
                    phase: Phase::Idle,
                    ..state
                }
            }

            FormIntent::Reset => FormState {
                attempt: state.attempt + 1,
                ..FormState::default()
            },
        }
    }
}
