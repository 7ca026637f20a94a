//! Termination outcomes, progress events and run reports.

use std::fmt;

use super::ProcessHandle;

// ============================================================================
// SignalStrength
// ============================================================================

/// How insistently a process is asked to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalStrength {
    /// Ask the process to shut down cleanly (SIGTERM).
    Graceful,
    /// Terminate immediately (SIGKILL).
    Forceful,
}

impl SignalStrength {
    /// Conventional signal name, for logs.
    pub fn signal_name(&self) -> &'static str {
        match self {
            SignalStrength::Graceful => "SIGTERM",
            SignalStrength::Forceful => "SIGKILL",
        }
    }
}

// ============================================================================
// TerminationResult
// ============================================================================

/// Terminal state of a single port after a reclaim attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationResult {
    /// Nothing was listening.
    Free,
    /// Listeners exited after the graceful signal.
    TerminatedGracefully,
    /// Listeners survived the graceful signal; the forceful signal was accepted.
    TerminatedForcefully,
    /// Listeners survived the graceful signal and the forceful signal was rejected.
    FailedToTerminate,
}

impl TerminationResult {
    /// Every outcome except `FailedToTerminate` counts as success.
    pub fn is_success(&self) -> bool {
        !matches!(self, TerminationResult::FailedToTerminate)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TerminationResult::Free => "free",
            TerminationResult::TerminatedGracefully => "terminated",
            TerminationResult::TerminatedForcefully => "killed",
            TerminationResult::FailedToTerminate => "failed",
        }
    }
}

impl fmt::Display for TerminationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Progress events
// ============================================================================

/// Progress reported by a reclaim run, in the order things happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReclaimEvent {
    /// Ports about to be reclaimed, ascending.
    Declared { ports: Vec<u16> },
    /// The configuration declares no development ports.
    NothingDeclared,
    /// Nothing listens on the port.
    PortFree { port: u16 },
    /// Listeners found on the first query.
    PortOccupied {
        port: u16,
        handles: Vec<ProcessHandle>,
    },
    /// The graceful termination request was not accepted.
    GracefulRejected { port: u16 },
    /// Listeners remain after the graceful signal; sending the forceful one.
    Escalating {
        port: u16,
        remaining: Vec<ProcessHandle>,
    },
    /// Final state for the port.
    Finished {
        port: u16,
        result: TerminationResult,
    },
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PortOutcome {
    port: u16,
    result: TerminationResult,
}

/// Outcomes of a whole run, in the order ports were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReclaimReport {
    outcomes: Vec<PortOutcome>,
}

impl ReclaimReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, port: u16, result: TerminationResult) {
        self.outcomes.push(PortOutcome { port, result });
    }

    /// `(port, result)` pairs in processing order.
    pub fn pairs(&self) -> Vec<(u16, TerminationResult)> {
        self.outcomes.iter().map(|o| (o.port, o.result)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of ports that ended in `result`.
    pub fn count(&self, result: TerminationResult) -> usize {
        self.outcomes.iter().filter(|o| o.result == result).count()
    }

    pub fn failed_ports(&self) -> Vec<u16> {
        self.outcomes
            .iter()
            .filter(|o| !o.result.is_success())
            .map(|o| o.port)
            .collect()
    }

    /// False iff at least one port ended in `FailedToTerminate`.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_success())
    }
}
