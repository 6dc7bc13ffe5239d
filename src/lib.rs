// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod session;

// Re-export
pub use crate::core::{CommandOutcome, ExitReport, ZkctlError};
