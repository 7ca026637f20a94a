//! Port reclaiming application service.

use tracing::{debug, info, warn};

use crate::adapters::{PlatformListenerQuery, SignalTerminator};
use crate::config::{load_declared_ports, ConfigSource};
use crate::domain::{ProcessHandle, ReclaimEvent, ReclaimReport, SignalStrength, TerminationResult};
use crate::error::Result;
use crate::ports::{ListenerQueryPort, TerminatorPort};

/// Frees declared development ports, escalating from a graceful to a
/// forceful signal only when listeners survive the first one.
///
/// The OS collaborators are injected through the `ListenerQueryPort` and
/// `TerminatorPort` traits, so the algorithm runs unchanged against fakes.
/// Ports are processed one at a time, in ascending order.
pub struct PortReclaimer<L: ListenerQueryPort, T: TerminatorPort> {
    listeners: L,
    terminator: T,
}

impl PortReclaimer<PlatformListenerQuery, SignalTerminator> {
    /// Create a reclaimer backed by the current platform.
    pub fn platform() -> Self {
        Self::new(PlatformListenerQuery::new(), SignalTerminator::new())
    }
}

impl<L: ListenerQueryPort, T: TerminatorPort> PortReclaimer<L, T> {
    /// Create a reclaimer with the given OS collaborators.
    pub fn new(listeners: L, terminator: T) -> Self {
        Self {
            listeners,
            terminator,
        }
    }

    /// Processes currently listening on `port`.
    ///
    /// A failed query counts as "nothing listens" so a flaky enumeration
    /// facility never triggers an escalation.
    pub async fn find_listeners(&self, port: u16) -> Vec<ProcessHandle> {
        match self.listeners.list_pids_on_port(port).await {
            Ok(handles) => handles,
            Err(e) => {
                warn!(port = port, error = %e, "Listener query failed, treating port as free");
                Vec::new()
            }
        }
    }

    /// Signal every handle; `true` only if the OS accepted all of them.
    ///
    /// An empty batch is never accepted.
    pub async fn terminate(&self, handles: &[ProcessHandle], strength: SignalStrength) -> bool {
        if handles.is_empty() {
            return false;
        }

        match self.terminator.send_signal(handles, strength).await {
            Ok(()) => true,
            Err(e) => {
                warn!(signal = strength.signal_name(), error = %e, "Termination request failed");
                false
            }
        }
    }

    /// Free a single port.
    pub async fn reclaim(&self, port: u16) -> TerminationResult {
        self.reclaim_with(port, &mut |_: ReclaimEvent| {}).await
    }

    /// Free a single port, reporting progress to `on_event`.
    pub async fn reclaim_with<F>(&self, port: u16, on_event: &mut F) -> TerminationResult
    where
        F: FnMut(ReclaimEvent),
    {
        let result = self.escalate(port, on_event).await;
        info!(port = port, result = %result, "Port reclaimed");
        on_event(ReclaimEvent::Finished { port, result });
        result
    }

    async fn escalate<F>(&self, port: u16, on_event: &mut F) -> TerminationResult
    where
        F: FnMut(ReclaimEvent),
    {
        let listeners = self.find_listeners(port).await;
        if listeners.is_empty() {
            on_event(ReclaimEvent::PortFree { port });
            return TerminationResult::Free;
        }

        debug!(port = port, count = listeners.len(), "Port occupied");
        on_event(ReclaimEvent::PortOccupied {
            port,
            handles: listeners.clone(),
        });

        if !self.terminate(&listeners, SignalStrength::Graceful).await {
            on_event(ReclaimEvent::GracefulRejected { port });
        }

        // Signals are requests, the listeners may not be gone yet
        let remaining = self.find_listeners(port).await;
        if remaining.is_empty() {
            return TerminationResult::TerminatedGracefully;
        }

        on_event(ReclaimEvent::Escalating {
            port,
            remaining: remaining.clone(),
        });

        if self.terminate(&remaining, SignalStrength::Forceful).await {
            TerminationResult::TerminatedForcefully
        } else {
            TerminationResult::FailedToTerminate
        }
    }

    /// Reclaim every port declared in `source`.
    ///
    /// Only an unreadable configuration is an error; every per-port failure
    /// ends up in the report.
    pub async fn run<F>(&self, source: &ConfigSource, mut on_event: F) -> Result<ReclaimReport>
    where
        F: FnMut(ReclaimEvent),
    {
        let ports = load_declared_ports(source).await?;
        let mut report = ReclaimReport::new();

        if ports.is_empty() {
            on_event(ReclaimEvent::NothingDeclared);
            return Ok(report);
        }

        on_event(ReclaimEvent::Declared {
            ports: ports.to_vec(),
        });

        for port in ports.iter() {
            let result = self.reclaim_with(port, &mut on_event).await;
            report.record(port, result);
        }

        Ok(report)
    }
}
