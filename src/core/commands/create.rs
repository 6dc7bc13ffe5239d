// src/core/commands/create.rs

use crate::client::Coordination;
use crate::config::validate_node_path;
use crate::core::ZkctlError;
use crate::core::commands::command_trait::{
    CommandFlags, CommandSpec, ExecutableCommand, ExecutionContext,
};
use crate::core::errors::CoordinationError;
use crate::core::outcome::CommandOutcome;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::error;

/// Creates a persistent node, optionally storing a data payload. An absent
/// payload creates an empty node.
#[derive(Debug, Clone)]
pub struct Create {
    pub path: String,
    pub data: Option<Bytes>,
}

impl Create {
    pub fn new(path: impl Into<String>, data: Option<String>) -> Result<Self, ZkctlError> {
        let path = path.into();
        validate_node_path(&path)?;
        Ok(Create {
            path,
            data: data.map(Bytes::from),
        })
    }
}

#[async_trait]
impl ExecutableCommand for Create {
    async fn execute<'a, C: Coordination>(
        &self,
        ctx: &ExecutionContext<'a, C>,
    ) -> Result<CommandOutcome, ZkctlError> {
        match ctx.client.create_node(&self.path, self.data.clone()).await {
            Ok(()) => Ok(CommandOutcome::Created {
                path: self.path.clone(),
                data: self.data.clone(),
            }),
            Err(CoordinationError::NodeExists) => Err(ZkctlError::CreateAlreadyExists {
                path: self.path.clone(),
            }),
            // NoNode on a create means the parent is missing; the target
            // itself cannot exist yet.
            Err(CoordinationError::NoNode) => Err(ZkctlError::CreateNoParent {
                path: self.path.clone(),
            }),
            Err(err) => {
                error!(path = %self.path, error = %err, "Create operation failed.");
                Err(ZkctlError::CreateFailed {
                    path: self.path.clone(),
                })
            }
        }
    }
}

impl CommandSpec for Create {
    fn name(&self) -> &'static str {
        "create"
    }
    fn flags(&self) -> CommandFlags {
        CommandFlags::WRITE
    }
}
