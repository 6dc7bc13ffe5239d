// src/session/controller.rs

//! The session controller: owns the client handle and its event stream,
//! drives the lifecycle state machine, and runs exactly one command.
//!
//! `run` consumes the controller, so a run cannot be replayed and the
//! close-before-exit step cannot be skipped: every path through `run` ends
//! by closing the session (a no-op if the client is already closed).

use crate::client::Coordination;
use crate::config::Config;
use crate::core::commands::{Command, dispatch};
use crate::core::errors::ZkctlError;
use crate::core::events::SessionEvent;
use crate::core::outcome::{CommandOutcome, ExitReport};
use crate::session::state::{AccessMode, SessionAction, SessionPhase};
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, warn};

pub struct SessionController<C: Coordination> {
    client: C,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    phase: SessionPhase,
    connect_string: String,
    connect_timeout: std::time::Duration,
}

impl<C: Coordination> SessionController<C> {
    pub fn new(
        client: C,
        events: mpsc::UnboundedReceiver<SessionEvent>,
        config: &Config,
    ) -> Self {
        Self {
            client,
            events,
            phase: SessionPhase::Connecting,
            connect_string: config.connect_string.clone(),
            connect_timeout: config.connect_timeout,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drives the session through its whole lifetime: wait for the grant,
    /// dispatch the command, observe any late events, close.
    pub async fn run(mut self, command: &Command) -> ExitReport {
        let result = self.execute(command).await;
        self.drain_events();
        self.close().await;
        ExitReport::from(result)
    }

    async fn execute(&mut self, command: &Command) -> Result<CommandOutcome, ZkctlError> {
        let mode = self.await_ready().await?;
        dispatch(command, &self.client, mode).await
    }

    /// Consumes lifecycle events until the state machine either grants
    /// dispatch or declares the session lost. The whole wait is bounded by
    /// the connect timeout.
    async fn await_ready(&mut self) -> Result<AccessMode, ZkctlError> {
        debug_assert!(matches!(self.phase, SessionPhase::Connecting));

        let deadline = Instant::now() + self.connect_timeout;
        loop {
            let event = match timeout_at(deadline, self.events.recv()).await {
                Ok(Some(event)) => event,
                Ok(None) => {
                    warn!("Session event stream ended before a grant was issued.");
                    return Err(self.cannot_connect());
                }
                Err(_) => {
                    warn!(
                        timeout_ms = self.connect_timeout.as_millis() as u64,
                        "Timed out waiting for the session to become ready."
                    );
                    return Err(self.cannot_connect());
                }
            };

            match self.apply(event) {
                SessionAction::Proceed(mode) => {
                    info!(mode = ?mode, "Session ready; dispatching command.");
                    return Ok(mode);
                }
                SessionAction::Observe => continue,
                SessionAction::Fail(fault) => {
                    warn!(fault = ?fault, "Session terminated before the command could run.");
                    return Err(fault.into());
                }
            }
        }
    }

    fn apply(&mut self, event: SessionEvent) -> SessionAction {
        let (next, action) = self.phase.transition(event);
        debug!(event = event.name(), from = ?self.phase, to = ?next, "Session event.");
        self.phase = next;
        action
    }

    /// Observes any events that arrived while the command was in flight.
    /// The command has already resolved, so these only update the phase and
    /// the log; they cannot change the outcome.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let SessionAction::Fail(fault) = self.apply(event) {
                warn!(fault = ?fault, "Session fault observed after the command resolved.");
            }
        }
    }

    async fn close(&mut self) {
        if !self.client.is_closed() {
            info!("Closing the session before exiting.");
            self.client.close().await;
        }
    }

    fn cannot_connect(&self) -> ZkctlError {
        ZkctlError::CannotConnect {
            connect_string: self.connect_string.clone(),
        }
    }
}
