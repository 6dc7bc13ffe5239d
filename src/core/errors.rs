// src/core/errors.rs

//! Defines the error types for the application: the seam-level taxonomy
//! produced by coordination clients and the user-facing taxonomy whose
//! `Display` strings are the exact messages printed before exiting.

use thiserror::Error;

/// Errors surfaced by a coordination-service session.
///
/// Adapters translate whatever their underlying client library reports into
/// these variants, so the command handlers can classify failures without
/// knowing which library is in use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinationError {
    #[error("node already exists")]
    NodeExists,

    #[error("no such node")]
    NoNode,

    #[error("connection to the server was lost")]
    ConnectionLoss,

    #[error("session expired")]
    SessionExpired,

    #[error("authentication failed")]
    AuthFailed,

    #[error("session is read-only")]
    ReadOnly,

    #[error("session already closed")]
    Closed,

    /// Any failure the adapter could not classify, carrying the raw message
    /// from the underlying client for diagnostics.
    #[error("{0}")]
    Other(String),
}

/// The main error enum for the binary. Every variant renders as the single
/// line the user sees on stdout when the invocation fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZkctlError {
    // --- Connection establishment ---
    #[error("cannot connect to {connect_string}")]
    CannotConnect { connect_string: String },

    // --- exists ---
    #[error("failed to check existence of node {path}")]
    ExistsFailed { path: String },

    // --- create ---
    #[error("failed to create node {path}: already exists")]
    CreateAlreadyExists { path: String },

    #[error("failed to create node {path}: no such parent")]
    CreateNoParent { path: String },

    #[error("failed to create node {path}")]
    CreateFailed { path: String },

    // --- remove ---
    #[error("failed to remove node {path}: does not exist")]
    RemoveMissing { path: String },

    #[error("failed to remove node {path}")]
    RemoveFailed { path: String },

    // --- session lifecycle ---
    #[error("cannot run \"{command}\" on a read-only session")]
    ReadOnlySession { command: &'static str },

    #[error("authentication with the server failed")]
    AuthenticationFailed,

    #[error("session expired before the command completed")]
    SessionExpired,

    #[error("the connection was closed before the command completed")]
    ConnectionClosed,

    // --- invocation validation ---
    #[error("invalid node path {path}: {reason}")]
    InvalidPath { path: String, reason: String },
}
