// src/core/events.rs

//! Defines the session lifecycle events consumed by the connection
//! controller's state machine.
//!
//! Events originate in a coordination-client adapter, which translates its
//! library's native notifications into this enum and pushes them over an
//! unbounded mpsc channel. The controller is the only consumer.

/// A one-way notification about the state of the session with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session is established and writable.
    Connected,
    /// The session is established against a read-only server.
    ConnectedReadOnly,
    /// The transport dropped; the client keeps trying to reconnect while the
    /// session is still alive on the server side.
    Disconnected,
    /// The server expired the session. Nothing can be salvaged.
    Expired,
    /// The server rejected the client's credentials.
    AuthFailed,
    /// The session ended for good, either closed by us or torn down remotely.
    Closed,
}

impl SessionEvent {
    /// A short lowercase name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Connected => "connected",
            SessionEvent::ConnectedReadOnly => "connected-read-only",
            SessionEvent::Disconnected => "disconnected",
            SessionEvent::Expired => "expired",
            SessionEvent::AuthFailed => "auth-failed",
            SessionEvent::Closed => "closed",
        }
    }
}
