// src/client/zookeeper.rs

//! The real `Coordination` implementation, backed by the `zookeeper-client`
//! crate. This is the only module that speaks the foreign API; everything
//! else sees the `Coordination` trait and `SessionEvent` stream.

use crate::client::Coordination;
use crate::config::Config;
use crate::core::errors::{CoordinationError, ZkctlError};
use crate::core::events::SessionEvent;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, warn};
use zookeeper_client as zk;

/// A live session against a ZooKeeper ensemble.
///
/// The underlying client handle is held in an `Option` so that `close` can
/// release it exactly once; the session itself terminates when the last
/// handle is dropped.
pub struct ZooKeeperSession {
    inner: Option<zk::Client>,
}

impl ZooKeeperSession {
    /// Establishes a session with the ensemble named by `config`.
    ///
    /// The whole handshake is bounded by `config.connect_timeout`; both a
    /// handshake error and the deadline elapsing collapse into
    /// `ZkctlError::CannotConnect`. On success the returned receiver carries
    /// the session lifecycle events, starting with `Connected`.
    pub async fn connect(
        config: &Config,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SessionEvent>), ZkctlError> {
        let attempt = zk::Client::connect(&config.connect_string);
        let client = match timeout(config.connect_timeout, attempt).await {
            Ok(Ok(client)) => client,
            Ok(Err(err)) => {
                warn!(error = %err, "Session handshake failed.");
                return Err(ZkctlError::CannotConnect {
                    connect_string: config.connect_string.clone(),
                });
            }
            Err(_) => {
                warn!(
                    timeout_ms = config.connect_timeout.as_millis() as u64,
                    "Session handshake timed out."
                );
                return Err(ZkctlError::CannotConnect {
                    connect_string: config.connect_string.clone(),
                });
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        // `Client::connect` resolving successfully is itself the connected
        // transition; the watcher only reports changes after this point.
        let _ = tx.send(SessionEvent::Connected);
        spawn_event_pump(client.state_watcher(), tx);

        debug!(connect_string = %config.connect_string, "Session established.");
        Ok((Self { inner: Some(client) }, rx))
    }

    fn client(&self) -> Result<&zk::Client, CoordinationError> {
        self.inner.as_ref().ok_or(CoordinationError::Closed)
    }
}

#[async_trait]
impl Coordination for ZooKeeperSession {
    async fn node_exists(&self, path: &str) -> Result<bool, CoordinationError> {
        let stat = self.client()?.check_stat(path).await.map_err(classify)?;
        Ok(stat.is_some())
    }

    async fn create_node(
        &self,
        path: &str,
        data: Option<Bytes>,
    ) -> Result<(), CoordinationError> {
        let options = zk::CreateMode::Persistent.with_acls(zk::Acls::anyone_all());
        let payload: &[u8] = data.as_deref().unwrap_or_default();
        self.client()?
            .create(path, payload, &options)
            .await
            .map(|_| ())
            .map_err(classify)
    }

    async fn delete_node(&self, path: &str) -> Result<(), CoordinationError> {
        self.client()?.delete(path, None).await.map_err(classify)
    }

    async fn close(&mut self) {
        if let Some(client) = self.inner.take() {
            debug!("Releasing the client handle; the session will close.");
            drop(client);
        }
    }

    fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

/// Forwards session state changes to the controller until the session
/// reaches a terminal state or the receiving side goes away.
fn spawn_event_pump(
    mut watcher: zk::StateWatcher,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    tokio::spawn(async move {
        loop {
            let state = watcher.changed().await;
            let Some(event) = translate_state(state) else {
                continue;
            };
            if events.send(event).is_err() {
                break;
            }
            if matches!(
                event,
                SessionEvent::Expired | SessionEvent::AuthFailed | SessionEvent::Closed
            ) {
                break;
            }
        }
    });
}

/// Maps the client library's session states onto the crate's lifecycle
/// events.
pub fn translate_state(state: zk::SessionState) -> Option<SessionEvent> {
    match state {
        zk::SessionState::SyncConnected => Some(SessionEvent::Connected),
        zk::SessionState::ConnectedReadOnly => Some(SessionEvent::ConnectedReadOnly),
        zk::SessionState::Disconnected => Some(SessionEvent::Disconnected),
        zk::SessionState::Expired => Some(SessionEvent::Expired),
        zk::SessionState::AuthFailed => Some(SessionEvent::AuthFailed),
        zk::SessionState::Closed => Some(SessionEvent::Closed),
        other => {
            debug!(state = ?other, "Ignoring unmapped session state.");
            None
        }
    }
}

/// Maps transport errors onto the crate's own taxonomy.
pub fn classify(err: zk::Error) -> CoordinationError {
    match err {
        zk::Error::NodeExists => CoordinationError::NodeExists,
        zk::Error::NoNode => CoordinationError::NoNode,
        zk::Error::ConnectionLoss => CoordinationError::ConnectionLoss,
        zk::Error::SessionExpired => CoordinationError::SessionExpired,
        zk::Error::AuthFailed => CoordinationError::AuthFailed,
        // A write served by a read-only server after a mid-session
        // downgrade.
        zk::Error::NotReadOnly => CoordinationError::ReadOnly,
        other => CoordinationError::Other(other.to_string()),
    }
}
