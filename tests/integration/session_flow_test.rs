// tests/integration/session_flow_test.rs

//! End-to-end runs through the session controller with a scripted client:
//! connect, dispatch, report, close.

use super::test_helpers::harness;
use bytes::Bytes;
use std::sync::atomic::Ordering;
use zkctl::client::MockCoordination;
use zkctl::core::commands::{Create, Exists, Remove};
use zkctl::core::{Command, CoordinationError, SessionEvent};

// ===== exists =====

#[tokio::test]
async fn test_exists_flow_reports_present_node() {
    let h = harness(MockCoordination::new().with_exists(Ok(true)));
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Exists(Exists::new("/app").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 0);
    assert_eq!(report.message, "node /app exists");
    assert_eq!(h.calls.close.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exists_flow_reports_check_failure() {
    let h = harness(MockCoordination::new().with_exists(Err(CoordinationError::ConnectionLoss)));
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Exists(Exists::new("/app").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 1);
    assert_eq!(report.message, "failed to check existence of node /app");
    assert_eq!(h.calls.close.load(Ordering::SeqCst), 1);
}

// ===== create =====

#[tokio::test]
async fn test_create_flow_stores_payload() {
    let h = harness(MockCoordination::new());
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Create(Create::new("/app/flag", Some("v1".to_string())).unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 0);
    assert_eq!(report.message, "node /app/flag created with data v1");
    assert_eq!(
        h.calls.create_payloads.lock().unwrap().as_slice(),
        [Some(Bytes::from("v1"))]
    );
}

#[tokio::test]
async fn test_create_flow_reports_duplicate_node() {
    let h = harness(MockCoordination::new().with_create(Err(CoordinationError::NodeExists)));
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Create(Create::new("/app/flag", None).unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 1);
    assert_eq!(
        report.message,
        "failed to create node /app/flag: already exists"
    );
}

// ===== remove =====

#[tokio::test]
async fn test_remove_flow_deletes_node() {
    let h = harness(MockCoordination::new());
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Remove(Remove::new("/app/flag").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 0);
    assert_eq!(report.message, "node /app/flag deleted");
    assert_eq!(h.calls.delete.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_remove_flow_reports_missing_node() {
    let h = harness(MockCoordination::new().with_delete(Err(CoordinationError::NoNode)));
    h.events.send(SessionEvent::Connected).unwrap();

    let command = Command::Remove(Remove::new("/gone").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 1);
    assert_eq!(report.message, "failed to remove node /gone: does not exist");
}

// ===== session lifecycle =====

#[tokio::test]
async fn test_read_only_session_refuses_remove() {
    let h = harness(MockCoordination::new());
    h.events.send(SessionEvent::ConnectedReadOnly).unwrap();

    let command = Command::Remove(Remove::new("/app").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 1);
    assert_eq!(report.message, "cannot run \"remove\" on a read-only session");
    assert_eq!(h.calls.total(), 0);
    assert_eq!(h.calls.close.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_expired_session_aborts_run() {
    let h = harness(MockCoordination::new());
    h.events.send(SessionEvent::Expired).unwrap();

    let command = Command::Exists(Exists::new("/app").unwrap());
    let report = h.controller.run(&command).await;

    assert_eq!(report.code, 1);
    assert_eq!(report.message, "session expired before the command completed");
    assert_eq!(h.calls.total(), 0);
    assert_eq!(h.calls.close.load(Ordering::SeqCst), 1);
}
