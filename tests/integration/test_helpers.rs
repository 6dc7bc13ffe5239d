// tests/integration/test_helpers.rs

//! Test helpers and utilities for integration tests

use std::process::Output;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use zkctl::client::MockCoordination;
use zkctl::client::mock::MockCalls;
use zkctl::config::Config;
use zkctl::core::SessionEvent;
use zkctl::session::SessionController;

/// A session controller wired to a scripted client, plus the handles a test
/// needs to feed lifecycle events and inspect the calls afterwards.
pub struct SessionHarness {
    pub controller: SessionController<MockCoordination>,
    pub events: mpsc::UnboundedSender<SessionEvent>,
    pub calls: Arc<MockCalls>,
}

/// Builds a harness around the given scripted client, with a short connect
/// timeout so stalled tests fail fast.
pub fn harness(mock: MockCoordination) -> SessionHarness {
    init_tracing();
    let (tx, rx) = mpsc::unbounded_channel();
    let calls = mock.calls();
    SessionHarness {
        controller: SessionController::new(mock, rx, &test_config()),
        events: tx,
        calls,
    }
}

/// Sets up minimal tracing for tests. Only the first caller installs the
/// subscriber; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_test_writer()
        .try_init();
}

pub fn test_config() -> Config {
    Config {
        connect_string: "localhost:2181".into(),
        connect_timeout: Duration::from_millis(200),
    }
}

/// Runs the compiled zkctl binary with the given arguments and captures its
/// output.
pub fn run_zkctl(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_zkctl"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run zkctl binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
