// src/cli.rs

//! The command-line surface: argument parsing and conversion into an
//! executable `Command`.

use crate::config::DEFAULT_SERVER;
use crate::core::commands::{Command, Create, Exists, Remove};
use crate::core::errors::ZkctlError;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "Example:\n  zkctl create -s localhost:2181 -p /app/config -d enabled";

#[derive(Parser, Debug)]
#[command(
    name = "zkctl",
    version,
    about = "A command-line client for ZooKeeper-style coordination services.",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Server connect string: `host:port[,host:port...][/chroot]`.
    #[arg(
        short = 's',
        long = "server",
        global = true,
        default_value = DEFAULT_SERVER
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check whether a node exists.
    Exists {
        /// Absolute path of the node.
        #[arg(short = 'p', long = "path")]
        path: String,
    },
    /// Create a persistent node.
    Create {
        /// Absolute path of the node.
        #[arg(short = 'p', long = "path")]
        path: String,
        /// Data to store in the new node.
        #[arg(short = 'd', long = "data")]
        data: Option<String>,
    },
    /// Remove a node.
    Remove {
        /// Absolute path of the node.
        #[arg(short = 'p', long = "path")]
        path: String,
    },
}

impl Cli {
    /// Parses the process arguments.
    ///
    /// Help and version requests exit with status 0; any malformed
    /// invocation exits with status 1, matching the binary's single
    /// failure status.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}

impl CliCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::Exists { .. } => "exists",
            CliCommand::Create { .. } => "create",
            CliCommand::Remove { .. } => "remove",
        }
    }

    /// Converts the parsed subcommand into an executable command,
    /// validating the node path along the way.
    pub fn into_command(self) -> Result<Command, ZkctlError> {
        match self {
            CliCommand::Exists { path } => Ok(Command::Exists(Exists::new(path)?)),
            CliCommand::Create { path, data } => Ok(Command::Create(Create::new(path, data)?)),
            CliCommand::Remove { path } => Ok(Command::Remove(Remove::new(path)?)),
        }
    }
}
