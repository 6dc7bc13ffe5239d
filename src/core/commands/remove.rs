// src/core/commands/remove.rs

use crate::client::Coordination;
use crate::config::validate_node_path;
use crate::core::ZkctlError;
use crate::core::commands::command_trait::{
    CommandFlags, CommandSpec, ExecutableCommand, ExecutionContext,
};
use crate::core::errors::CoordinationError;
use crate::core::outcome::CommandOutcome;
use async_trait::async_trait;
use tracing::error;

/// Deletes the node at a path, whatever version it is at.
#[derive(Debug, Clone)]
pub struct Remove {
    pub path: String,
}

impl Remove {
    pub fn new(path: impl Into<String>) -> Result<Self, ZkctlError> {
        let path = path.into();
        validate_node_path(&path)?;
        Ok(Remove { path })
    }
}

#[async_trait]
impl ExecutableCommand for Remove {
    async fn execute<'a, C: Coordination>(
        &self,
        ctx: &ExecutionContext<'a, C>,
    ) -> Result<CommandOutcome, ZkctlError> {
        match ctx.client.delete_node(&self.path).await {
            Ok(()) => Ok(CommandOutcome::Deleted {
                path: self.path.clone(),
            }),
            Err(CoordinationError::NoNode) => Err(ZkctlError::RemoveMissing {
                path: self.path.clone(),
            }),
            Err(err) => {
                error!(path = %self.path, error = %err, "Remove operation failed.");
                Err(ZkctlError::RemoveFailed {
                    path: self.path.clone(),
                })
            }
        }
    }
}

impl CommandSpec for Remove {
    fn name(&self) -> &'static str {
        "remove"
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE
    }
}
