// src/core/commands/exists.rs

use crate::client::Coordination;
use crate::config::validate_node_path;
use crate::core::ZkctlError;
use crate::core::commands::command_trait::{
    CommandFlags, CommandSpec, ExecutableCommand, ExecutionContext,
};
use crate::core::outcome::CommandOutcome;
use async_trait::async_trait;
use tracing::error;

/// Checks whether a node is present in the namespace.
#[derive(Debug, Clone)]
pub struct Exists {
    pub path: String,
}

impl Exists {
    pub fn new(path: impl Into<String>) -> Result<Self, ZkctlError> {
        let path = path.into();
        validate_node_path(&path)?;
        Ok(Exists { path })
    }
}

#[async_trait]
impl ExecutableCommand for Exists {
    async fn execute<'a, C: Coordination>(
        &self,
        ctx: &ExecutionContext<'a, C>,
    ) -> Result<CommandOutcome, ZkctlError> {
        match ctx.client.node_exists(&self.path).await {
            Ok(present) => Ok(CommandOutcome::Exists {
                path: self.path.clone(),
                present,
            }),
            Err(err) => {
                error!(path = %self.path, error = %err, "Existence check failed.");
                Err(ZkctlError::ExistsFailed {
                    path: self.path.clone(),
                })
            }
        }
    }
}

impl CommandSpec for Exists {
    fn name(&self) -> &'static str {
        "exists"
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::READONLY
    }
}
