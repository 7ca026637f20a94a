//! Linux listener query using `ss`, falling back to `lsof`.

use std::process::Stdio;
use std::sync::OnceLock;

use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use crate::domain::ProcessHandle;
use crate::error::{Error, Result};
use crate::ports::ListenerQueryPort;

use super::lsof::LsofListenerQuery;
use super::utils::Utils;

fn pid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"pid=(\d+)").expect("pid pattern is a valid regex"))
}

/// Linux-specific listener query.
pub struct SsListenerQuery {
    program: String,
    fallback: LsofListenerQuery,
}

impl SsListenerQuery {
    /// Create a query that runs `ss` from `PATH`, with `lsof` as fallback.
    pub fn new() -> Self {
        Self::with_programs("ss", LsofListenerQuery::new())
    }

    pub fn with_programs(program: impl Into<String>, fallback: LsofListenerQuery) -> Self {
        Self {
            program: program.into(),
            fallback,
        }
    }

    /// Parse ss output into process handles.
    ///
    /// Expected ss output format:
    /// ```text
    /// LISTEN 0 511 0.0.0.0:3000 0.0.0.0:* users:(("node",pid=53561,fd=21),("node",pid=53570,fd=21))
    /// ```
    ///
    /// Sockets owned by other users show no `users:` column unless ss runs
    /// with privileges; those lines contribute nothing.
    fn parse_ss_output(&self, output: &str) -> Vec<ProcessHandle> {
        let mut pids = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let before = pids.len();
            pids.extend(
                pid_pattern()
                    .captures_iter(line)
                    .filter_map(|caps| caps[1].parse::<u32>().ok()),
            );

            if pids.len() == before {
                debug!(line = line, "Listener without visible pid");
            }
        }

        Utils::collect_handles(pids)
    }
}

impl Default for SsListenerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerQueryPort for SsListenerQuery {
    /// Executes: `ss -Htlnp sport = :<port>`
    ///
    /// Flags explained:
    /// -H, --no-header     Suppress header line
    /// -t, --tcp           display only TCP sockets
    /// -l, --listening     display listening sockets
    /// -n, --numeric       don't resolve service names
    /// -p, --processes     show process using socket
    async fn list_pids_on_port(&self, port: u16) -> Result<Vec<ProcessHandle>> {
        debug!(port = port, program = %self.program, "Querying listeners with ss");

        let output = match Command::new(&self.program)
            .args(["-Htlnp", "sport", "=", &format!(":{}", port)])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "ss unavailable, falling back to lsof");
                return self.fallback.list_pids_on_port(port).await;
            }
        };

        if !output.status.success() {
            return Err(Error::ListenerQueryFailed {
                port,
                reason: format!("ss exited with {}", output.status),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in ss output: {}", e)))?;

        Ok(self.parse_ss_output(&stdout))
    }
}
