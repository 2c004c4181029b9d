//! Non-interactive submission: fill the form from arguments, press Submit once.

use std::sync::Arc;

use crate::form::{Field, FormFields, FormState, ProductForm};
use crate::service::SubmissionService;

/// Runs one submission through the same state machine as the terminal form.
pub async fn submit_once(service: Arc<dyn SubmissionService>, fields: FormFields) -> FormState {
    let mut form = ProductForm::new(service);
    for field in Field::ALL {
        form.edit(field, fields.get(field));
    }
    form.submit().await.clone()
}

/// What the user sees after the attempt, one line per message.
pub fn summary_lines(state: &FormState) -> Vec<String> {
    let mut lines: Vec<String> = Field::ALL
        .iter()
        .filter_map(|field| {
            state
                .errors
                .get(*field)
                .map(|message| format!("{field}: {message}"))
        })
        .collect();
    if let Some(notice) = state.notice {
        lines.push(notice.message().to_string());
    }
    lines
}
