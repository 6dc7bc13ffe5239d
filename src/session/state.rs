// src/session/state.rs

//! The session lifecycle state machine.
//!
//! Every `(phase, event)` pair maps to a defined successor phase and a
//! `SessionAction`, so no lifecycle notification can arrive that the
//! controller does not know how to handle. The dispatch grant
//! (`SessionAction::Proceed`) is only ever produced on the two transitions
//! out of `Connecting`, and no transition re-enters `Connecting` once the
//! session has been granted, so a single run can be granted at most once.

use crate::core::errors::ZkctlError;
use crate::core::events::SessionEvent;

/// Whether a granted session may issue writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

/// The ways a session terminates without ever serving (or while serving)
/// the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFault {
    Expired,
    AuthFailed,
    ConnectionClosed,
}

impl From<SessionFault> for ZkctlError {
    fn from(fault: SessionFault) -> Self {
        match fault {
            SessionFault::Expired => ZkctlError::SessionExpired,
            SessionFault::AuthFailed => ZkctlError::AuthenticationFailed,
            SessionFault::ConnectionClosed => ZkctlError::ConnectionClosed,
        }
    }
}

/// The lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the handshake to settle.
    Connecting,
    /// Granted with full access.
    Active,
    /// Granted, but only read operations will be accepted.
    ReadOnly,
    /// Terminally gone. Absorbing: no event leaves this phase.
    Lost(SessionFault),
}

/// What the controller should do after applying a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Dispatch the pending command with the given access mode.
    Proceed(AccessMode),
    /// Log the event and keep waiting; no decision yet.
    Observe,
    /// Abandon the run with the given fault.
    Fail(SessionFault),
}

impl SessionPhase {
    /// Applies one lifecycle event, returning the successor phase and the
    /// action the controller must take.
    pub fn transition(self, event: SessionEvent) -> (SessionPhase, SessionAction) {
        use SessionAction::{Observe, Proceed};
        use SessionEvent as Ev;
        use SessionPhase::{Active, Connecting, Lost, ReadOnly};

        match self {
            Connecting => match event {
                Ev::Connected => (Active, Proceed(AccessMode::ReadWrite)),
                Ev::ConnectedReadOnly => (ReadOnly, Proceed(AccessMode::ReadOnly)),
                // A transient drop while still handshaking; the connect
                // deadline keeps this from waiting forever.
                Ev::Disconnected => (Connecting, Observe),
                Ev::Expired => lost(SessionFault::Expired),
                Ev::AuthFailed => lost(SessionFault::AuthFailed),
                Ev::Closed => lost(SessionFault::ConnectionClosed),
            },
            Active => match event {
                Ev::Connected => (Active, Observe),
                // Downgrade. The grant already happened; an in-flight write
                // is governed by its own result, not by this event.
                Ev::ConnectedReadOnly => (ReadOnly, Observe),
                // The client reconnects within the same session on its own.
                Ev::Disconnected => (Active, Observe),
                Ev::Expired => lost(SessionFault::Expired),
                Ev::AuthFailed => lost(SessionFault::AuthFailed),
                Ev::Closed => lost(SessionFault::ConnectionClosed),
            },
            ReadOnly => match event {
                // Upgrade to a writable server.
                Ev::Connected => (Active, Observe),
                Ev::ConnectedReadOnly => (ReadOnly, Observe),
                Ev::Disconnected => (ReadOnly, Observe),
                Ev::Expired => lost(SessionFault::Expired),
                Ev::AuthFailed => lost(SessionFault::AuthFailed),
                Ev::Closed => lost(SessionFault::ConnectionClosed),
            },
            Lost(fault) => (Lost(fault), Observe),
        }
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, SessionPhase::Lost(_))
    }
}

fn lost(fault: SessionFault) -> (SessionPhase, SessionAction) {
    (SessionPhase::Lost(fault), SessionAction::Fail(fault))
}
