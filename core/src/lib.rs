//! PortReclaim Core Library
//!
//! Frees the local development ports declared for a microfrontend layout.
//! Provides functionality to:
//! - Read declared ports from `apps/home/microfrontends.json`
//! - Find the processes listening on a TCP port
//! - Terminate them, gracefully first and forcefully only if they survive
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Operating system implementations
//! - `application`: The reclaim algorithm
//!
//! # Platform Support
//! - Linux: Uses `ss`, falling back to `lsof`
//! - macOS and other unix: Uses `lsof`
//! - Signals are delivered with `kill(2)` on every unix
//! - Elsewhere, listener queries fail closed and nothing is terminated

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{
    PortSet, ProcessHandle, ReclaimEvent, ReclaimReport, SignalStrength, TerminationResult,
};

// Re-export other commonly used types
pub use adapters::{PlatformListenerQuery, SignalTerminator};
pub use application::PortReclaimer;
pub use config::{load_declared_ports, ConfigSource, MicrofrontendsConfig};
pub use error::{Error, Result};
pub use ports::{ListenerQueryPort, TerminatorPort};
