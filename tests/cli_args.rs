//! Tests for the command-line entry point, run against the built binary.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use std::process::{Command, Output};

fn product_form_cmd(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_product-form"));
    // Never pick up the developer's own config file.
    cmd.arg("--config").arg(config_dir.path().join("config.toml"));
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_submit_and_overrides() {
    let output = Command::new(env!("CARGO_BIN_EXE_product-form"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let text = stdout(&output);
    assert!(output.status.success());
    assert!(text.contains("submit"));
    assert!(text.contains("--base-url"));
    assert!(text.contains("--config"));
}

#[test]
fn test_submit_with_blank_fields_prints_required_messages() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = product_form_cmd(&dir)
        .args(["submit", "--name", "nombre"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(!text.contains("the field name is required"));
    assert!(text.contains("size: the field size is required"));
    assert!(text.contains("type: the field type is required"));
}

#[test]
fn test_submit_to_unreachable_backend_prints_connection_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = product_form_cmd(&dir)
        .args(["--base-url", &common::unreachable_base_url()])
        .args(["submit", "--name", "nombre", "--size", "50", "--type", "electronic"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("connection error"));
}

#[tokio::test]
async fn test_submit_success_prints_product_saved() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(200)).await;
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = product_form_cmd(&dir);
    cmd.args(["--base-url", &mock.base_url()]).args([
        "submit", "--name", "nombre", "--size", "50", "--type", "electronic",
    ]);

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Product saved");
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[service\n").unwrap();
    let output = product_form_cmd(&dir)
        .args(["submit"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"));
}

#[test]
fn test_invalid_base_url_override_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = product_form_cmd(&dir)
        .args(["--base-url", "localhost:3000", "submit"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_log_file_receives_submission_logs() {
    let dir = tempfile::TempDir::new().unwrap();
    let log_path = dir.path().join("product-form.log");
    let output = product_form_cmd(&dir)
        .env_remove("RUST_LOG")
        .arg("--log-file")
        .arg(&log_path)
        .args(["--base-url", &common::unreachable_base_url()])
        .args(["submit", "--name", "nombre", "--size", "50", "--type", "electronic"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let logs = std::fs::read_to_string(&log_path).expect("log file should exist");
    assert!(logs.contains("Submission rejected"), "logs: {logs}");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Submission rejected"));
}

#[test]
fn test_base_url_override_fixes_invalid_file_value() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[service]\nbase_url = \"ftp://files\"\n",
    )
    .unwrap();
    let output = product_form_cmd(&dir)
        .args(["--base-url", &common::unreachable_base_url()])
        .args(["submit", "--name", "nombre", "--size", "50", "--type", "electronic"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("connection error"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Config validation failed"));
}

#[test]
fn test_submit_rejects_unknown_type() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = product_form_cmd(&dir)
        .args(["submit", "--name", "nombre", "--size", "50", "--type", "gadget"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid value 'gadget'"));
}
