// src/core/commands/command_trait.rs

//! Defines the core traits implemented by every node command.

use crate::client::Coordination;
use crate::core::ZkctlError;
use crate::core::outcome::CommandOutcome;
use crate::session::AccessMode;
use async_trait::async_trait;
use bitflags::bitflags;

bitflags! {
    /// Flags that describe the properties of a command. The dispatcher uses
    /// them to decide whether a command may run on the granted session.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CommandFlags: u32 {
        /// The command only reads from the namespace.
        const READONLY = 1 << 0;
        /// The command modifies the namespace.
        const WRITE    = 1 << 1;
    }
}

/// Everything the dispatcher borrows while a command runs: the live session
/// and the access mode it was granted with.
#[derive(Debug)]
pub struct ExecutionContext<'a, C: Coordination> {
    pub client: &'a C,
    pub mode: AccessMode,
}

/// Static metadata about a command.
pub trait CommandSpec {
    /// The lowercase command name as typed on the command line.
    fn name(&self) -> &'static str;
    /// The command's behavioral flags.
    fn flags(&self) -> CommandFlags;
}

/// The execution logic of a command. Implemented by each command's struct.
///
/// An implementation issues exactly one operation against the session and
/// resolves exactly once, either with a typed outcome or with the
/// user-facing error it classified the failure into.
#[async_trait]
pub trait ExecutableCommand {
    async fn execute<'a, C: Coordination>(
        &self,
        ctx: &ExecutionContext<'a, C>,
    ) -> Result<CommandOutcome, ZkctlError>;
}
