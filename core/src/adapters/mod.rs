//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with the operating system.

pub mod listeners;
pub mod terminator;

// Re-export main types for convenience
pub use listeners::PlatformListenerQuery;
pub use terminator::SignalTerminator;
