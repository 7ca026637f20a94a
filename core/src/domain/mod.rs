//! Domain layer - Pure data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod outcome;
mod port;

// Re-export all domain types
pub use outcome::{ReclaimEvent, ReclaimReport, SignalStrength, TerminationResult};
pub use port::{join_handles, PortSet, ProcessHandle};
