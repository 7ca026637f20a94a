//! Listener query using `lsof`.
//!
//! Used on macOS and the BSDs, and as the Linux fallback when `ss` is
//! not installed.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::domain::ProcessHandle;
use crate::error::{Error, Result};
use crate::ports::ListenerQueryPort;

use super::utils::Utils;

/// `lsof`-backed listener query.
pub struct LsofListenerQuery {
    program: String,
}

impl LsofListenerQuery {
    /// Create a query that runs `lsof` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("lsof")
    }

    /// Create a query that runs a specific `lsof` binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Parse `lsof -t` output: one pid per line.
    fn parse_lsof_output(&self, output: &str) -> Vec<ProcessHandle> {
        let pids = output
            .split_whitespace()
            .filter_map(|token| token.parse::<u32>().ok());
        Utils::collect_handles(pids)
    }
}

impl Default for LsofListenerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerQueryPort for LsofListenerQuery {
    /// Executes: `lsof -nP -t -iTCP:<port> -sTCP:LISTEN`
    ///
    /// Flags explained:
    /// -n, -P              don't resolve hosts or service names
    /// -t                  terse output, pids only
    /// -iTCP:<port>        TCP sockets on the port, IPv4 and IPv6
    /// -sTCP:LISTEN        only sockets in the LISTEN state
    async fn list_pids_on_port(&self, port: u16) -> Result<Vec<ProcessHandle>> {
        debug!(port = port, program = %self.program, "Querying listeners with lsof");

        let output = Command::new(&self.program)
            .args(["-nP", "-t", &format!("-iTCP:{}", port), "-sTCP:LISTEN"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", self.program, e)))?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in lsof output: {}", e)))?;

        // lsof exits 1 when nothing matched
        if !output.status.success() {
            if output.status.code() == Some(1) && stdout.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Err(Error::ListenerQueryFailed {
                port,
                reason: format!("lsof exited with {}", output.status),
            });
        }

        Ok(self.parse_lsof_output(&stdout))
    }
}
