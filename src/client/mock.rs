// src/client/mock.rs

//! A scripted `Coordination` implementation for tests.
//!
//! Each operation returns a preconfigured result and records the call, so
//! tests can assert both the outcome a command produced and the requests it
//! issued (or refused to issue).

use crate::client::Coordination;
use crate::core::errors::CoordinationError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Call counters and recorded arguments, shared with the test via `Arc` so
/// they stay inspectable after the session has consumed the mock.
#[derive(Debug, Default)]
pub struct MockCalls {
    pub exists: AtomicUsize,
    pub create: AtomicUsize,
    pub delete: AtomicUsize,
    pub close: AtomicUsize,
    pub paths: Mutex<Vec<String>>,
    pub create_payloads: Mutex<Vec<Option<Bytes>>>,
}

impl MockCalls {
    pub fn total(&self) -> usize {
        self.exists.load(Ordering::SeqCst)
            + self.create.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct MockCoordination {
    exists_result: Result<bool, CoordinationError>,
    create_result: Result<(), CoordinationError>,
    delete_result: Result<(), CoordinationError>,
    calls: Arc<MockCalls>,
    closed: bool,
}

impl Default for MockCoordination {
    fn default() -> Self {
        Self {
            exists_result: Ok(false),
            create_result: Ok(()),
            delete_result: Ok(()),
            calls: Arc::new(MockCalls::default()),
            closed: false,
        }
    }
}

impl MockCoordination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exists(mut self, result: Result<bool, CoordinationError>) -> Self {
        self.exists_result = result;
        self
    }

    pub fn with_create(mut self, result: Result<(), CoordinationError>) -> Self {
        self.create_result = result;
        self
    }

    pub fn with_delete(mut self, result: Result<(), CoordinationError>) -> Self {
        self.delete_result = result;
        self
    }

    /// Returns a handle to the call record that outlives the mock itself.
    pub fn calls(&self) -> Arc<MockCalls> {
        self.calls.clone()
    }

    fn record_path(&self, path: &str) {
        if let Ok(mut paths) = self.calls.paths.lock() {
            paths.push(path.to_string());
        }
    }
}

#[async_trait]
impl Coordination for MockCoordination {
    async fn node_exists(&self, path: &str) -> Result<bool, CoordinationError> {
        self.calls.exists.fetch_add(1, Ordering::SeqCst);
        self.record_path(path);
        self.exists_result.clone()
    }

    async fn create_node(
        &self,
        path: &str,
        data: Option<Bytes>,
    ) -> Result<(), CoordinationError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.record_path(path);
        if let Ok(mut payloads) = self.calls.create_payloads.lock() {
            payloads.push(data);
        }
        self.create_result.clone()
    }

    async fn delete_node(&self, path: &str) -> Result<(), CoordinationError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.record_path(path);
        self.delete_result.clone()
    }

    async fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.calls.close.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
