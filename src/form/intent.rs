use crate::mvi::Intent;
use crate::service::SubmissionOutcome;

use super::validation::Field;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace a field's value. Does not touch its error text.
    Edit { field: Field, value: String },
    /// The field lost focus: re-check only that field.
    Blur { field: Field },
    /// Submit trigger activated. Ignored while a submission is running.
    Submit,
    /// Validate every field and decide whether to hand off to the service.
    Validate,
    /// The submission service answered for `attempt`.
    Settle {
        attempt: u64,
        outcome: SubmissionOutcome,
    },
    /// `attempt` was never handed to the service. Back to idle, fields kept.
    Abandon { attempt: u64 },
    /// Back to a freshly mounted form. Any in-flight outcome becomes stale.
    Reset,
}

impl Intent for FormIntent {}
