// src/client/mod.rs

//! The coordination-service client seam.
//!
//! `Coordination` is the narrow surface the rest of the crate programs
//! against. The real implementation, `ZooKeeperSession`, lives in
//! `zookeeper.rs`; tests substitute `MockCoordination` so that command and
//! session logic can be exercised without a live ensemble.

use crate::core::errors::CoordinationError;
use async_trait::async_trait;
use bytes::Bytes;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod zookeeper;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCoordination;
pub use zookeeper::ZooKeeperSession;

/// The node operations a connected session supports.
///
/// Every method is a single request against the ensemble. Errors come back
/// as `CoordinationError`, the transport-agnostic taxonomy that command
/// handlers translate into user-facing failures.
#[async_trait]
pub trait Coordination: Send + Sync {
    /// Checks whether a node exists at `path`.
    async fn node_exists(&self, path: &str) -> Result<bool, CoordinationError>;

    /// Creates a persistent node at `path`, optionally with a data payload.
    async fn create_node(
        &self,
        path: &str,
        data: Option<Bytes>,
    ) -> Result<(), CoordinationError>;

    /// Deletes the node at `path`, regardless of its version.
    async fn delete_node(&self, path: &str) -> Result<(), CoordinationError>;

    /// Shuts the session down. Closing an already-closed session is a no-op.
    async fn close(&mut self);

    /// Reports whether `close` has already run.
    fn is_closed(&self) -> bool;
}
