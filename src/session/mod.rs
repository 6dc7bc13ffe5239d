// src/session/mod.rs

//! Session lifecycle management: the pure state machine and the controller
//! that drives it against a live client.

pub mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{AccessMode, SessionAction, SessionFault, SessionPhase};
