//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use product_form::form::FormFields;
use product_form::service::{SubmissionOutcome, SubmissionService};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The input used throughout the form tests.
pub fn valid_fields() -> FormFields {
    FormFields::new("nombre", "50", "electronic")
}

// -- Submission service mocks --------------------------------------------------

/// Replays queued outcomes and records every payload it receives.
///
/// Answers `Status(200)` once the queue is empty.
#[derive(Default)]
pub struct ScriptedService {
    outcomes: Mutex<VecDeque<SubmissionOutcome>>,
    calls: Mutex<Vec<FormFields>>,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answering(outcome: SubmissionOutcome) -> Arc<Self> {
        let service = Self::new();
        service.enqueue(outcome);
        service
    }

    pub fn enqueue(&self, outcome: SubmissionOutcome) {
        self.outcomes.lock().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<FormFields> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SubmissionService for ScriptedService {
    async fn submit(&self, fields: &FormFields) -> SubmissionOutcome {
        self.calls.lock().push(fields.clone());
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or(SubmissionOutcome::Status(200))
    }
}
