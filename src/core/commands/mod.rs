// src/core/commands/mod.rs

//! Defines the three node commands and the dispatch entry point that runs
//! exactly one of them against a granted session.

use crate::client::Coordination;
use crate::core::ZkctlError;
use crate::core::outcome::CommandOutcome;
use crate::session::AccessMode;
use tracing::{Instrument, info, info_span};

pub mod command_trait;
pub mod create;
pub mod exists;
pub mod remove;

pub use command_trait::{CommandFlags, CommandSpec, ExecutableCommand, ExecutionContext};
pub use create::Create;
pub use exists::Exists;
pub use remove::Remove;

/// A fully parsed and validated command, ready to execute.
#[derive(Debug, Clone)]
pub enum Command {
    Exists(Exists),
    Create(Create),
    Remove(Remove),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Exists(cmd) => cmd.name(),
            Command::Create(cmd) => cmd.name(),
            Command::Remove(cmd) => cmd.name(),
        }
    }

    pub fn flags(&self) -> CommandFlags {
        match self {
            Command::Exists(cmd) => cmd.flags(),
            Command::Create(cmd) => cmd.flags(),
            Command::Remove(cmd) => cmd.flags(),
        }
    }

    pub async fn execute<'a, C: Coordination>(
        &self,
        ctx: &ExecutionContext<'a, C>,
    ) -> Result<CommandOutcome, ZkctlError> {
        match self {
            Command::Exists(cmd) => cmd.execute(ctx).await,
            Command::Create(cmd) => cmd.execute(ctx).await,
            Command::Remove(cmd) => cmd.execute(ctx).await,
        }
    }
}

/// Runs one command against the session, enforcing the access-mode policy.
///
/// A read-only session may only run commands flagged `READONLY`; a write
/// command is refused here, before any network operation is issued.
pub async fn dispatch<C: Coordination>(
    command: &Command,
    client: &C,
    mode: AccessMode,
) -> Result<CommandOutcome, ZkctlError> {
    if mode == AccessMode::ReadOnly && command.flags().contains(CommandFlags::WRITE) {
        return Err(ZkctlError::ReadOnlySession {
            command: command.name(),
        });
    }

    // Instrument the whole execution so every log line carries the command name.
    let span = info_span!("command", name = %command.name());
    async move {
        info!("Running \"{}\" command.", command.name());
        let ctx = ExecutionContext { client, mode };
        command.execute(&ctx).await
    }
    .instrument(span)
    .await
}
