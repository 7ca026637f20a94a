//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the OS capabilities the application layer needs.
//! Implementations live in `adapters`.

mod listeners;
mod terminator;

pub use listeners::ListenerQueryPort;
pub use terminator::TerminatorPort;
