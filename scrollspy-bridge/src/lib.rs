//! # ScrollSpy Bridge
//!
//! Binds viewport notifications to a [`scrollspy_core::ScrollSpy`]. Commands
//! arrive as text lines, are parsed into [`commands::BridgeCommand`]s, and are
//! applied one at a time by [`session::run_event_loop`].

pub mod commands;
pub mod session;
pub mod util;

pub use commands::{BridgeCommand, CommandParser};
pub use session::{BridgeSession, Outcome, run_event_loop};
