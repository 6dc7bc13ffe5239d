// src/core/mod.rs

//! The central module containing the core logic and data structures of zkctl.

pub mod commands;
pub mod errors;
pub mod events;
pub mod outcome;

pub use commands::Command;
pub use errors::{CoordinationError, ZkctlError};
pub use events::SessionEvent;
pub use outcome::{CommandOutcome, ExitReport};
