// src/core/outcome.rs

//! The typed result of a command and the final exit report of the process.

use crate::core::ZkctlError;
use bytes::Bytes;

/// What a successfully executed command observed or did.
///
/// Handlers return this instead of preformatted strings so tests can assert
/// on structure; rendering to the user-facing line happens in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Result of an existence check.
    Exists { path: String, present: bool },
    /// A node was created, with the payload that was stored (if any).
    Created { path: String, data: Option<Bytes> },
    /// A node was deleted.
    Deleted { path: String },
}

impl CommandOutcome {
    /// Renders the single line printed on stdout for a successful run.
    pub fn message(&self) -> String {
        match self {
            CommandOutcome::Exists { path, present: true } => format!("node {path} exists"),
            CommandOutcome::Exists { path, present: false } => {
                format!("node {path} does not exist")
            }
            CommandOutcome::Created { path, data: Some(data) } => {
                format!("node {path} created with data {}", String::from_utf8_lossy(data))
            }
            CommandOutcome::Created { path, data: None } => format!("node {path} created"),
            CommandOutcome::Deleted { path } => format!("node {path} deleted"),
        }
    }
}

/// The process exit code paired with the line to print before exiting.
/// Every termination path funnels through this type so the exit behavior
/// stays uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    pub code: i32,
    pub message: String,
}

impl ExitReport {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: Self::SUCCESS,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: Self::FAILURE,
            message: message.into(),
        }
    }
}

impl From<ZkctlError> for ExitReport {
    fn from(err: ZkctlError) -> Self {
        ExitReport::failure(err.to_string())
    }
}

impl From<Result<CommandOutcome, ZkctlError>> for ExitReport {
    fn from(result: Result<CommandOutcome, ZkctlError>) -> Self {
        match result {
            Ok(outcome) => ExitReport::success(outcome.message()),
            Err(err) => err.into(),
        }
    }
}
