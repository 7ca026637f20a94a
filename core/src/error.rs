//! Error types for the portreclaim-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for portreclaim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reclaiming development ports.
///
/// Only [`Error::ConfigUnreadable`] escapes a run. The other variants are
/// produced by adapters and recovered per port by the application layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The microfrontends configuration could not be located or parsed.
    #[error("Failed to read microfrontends config at {}: {reason}", .path.display())]
    ConfigUnreadable { path: PathBuf, reason: String },

    /// The OS could not be queried for listeners on a port.
    #[error("Failed to query listeners on port {port}: {reason}")]
    ListenerQueryFailed { port: u16, reason: String },

    /// The OS rejected a termination request.
    #[error("Failed to signal process {pid}: {reason}")]
    TerminationRequestFailed { pid: u32, reason: String },

    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}
