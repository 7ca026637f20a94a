//! Signal delivery adapter.
//!
//! On unix, signals are delivered natively through `kill(2)`:
//! - SIGTERM (15): graceful termination request
//! - SIGKILL (9): immediate forced termination
//!
//! Other platforms reject every request.

use tracing::{debug, warn};

use crate::domain::{ProcessHandle, SignalStrength};
use crate::error::{Error, Result};
use crate::ports::TerminatorPort;

/// Delivers termination signals to processes by pid.
#[derive(Debug, Default)]
pub struct SignalTerminator;

impl SignalTerminator {
    pub fn new() -> Self {
        Self
    }

    #[cfg(unix)]
    fn signal_one(&self, handle: ProcessHandle, strength: SignalStrength) -> Result<()> {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        // 0 and negative values address process groups, never a single listener
        let raw = i32::try_from(handle.pid())
            .ok()
            .filter(|pid| *pid > 0)
            .ok_or_else(|| Error::TerminationRequestFailed {
                pid: handle.pid(),
                reason: "not a valid process id".to_string(),
            })?;

        let signal = match strength {
            SignalStrength::Graceful => Signal::SIGTERM,
            SignalStrength::Forceful => Signal::SIGKILL,
        };

        kill(Pid::from_raw(raw), signal).map_err(|errno| Error::TerminationRequestFailed {
            pid: handle.pid(),
            reason: errno.desc().to_string(),
        })
    }

    #[cfg(not(unix))]
    fn signal_one(&self, handle: ProcessHandle, _strength: SignalStrength) -> Result<()> {
        Err(Error::UnsupportedPlatform(format!(
            "cannot signal pid {} on {}",
            handle.pid(),
            std::env::consts::OS
        )))
    }
}

impl TerminatorPort for SignalTerminator {
    async fn send_signal(&self, handles: &[ProcessHandle], strength: SignalStrength) -> Result<()> {
        let mut first_error = None;

        // Every handle is attempted even after a rejection
        for &handle in handles {
            match self.signal_one(handle, strength) {
                Ok(()) => {
                    debug!(pid = handle.pid(), signal = strength.signal_name(), "Signal sent");
                }
                Err(e) => {
                    warn!(pid = handle.pid(), signal = strength.signal_name(), error = %e, "Signal rejected");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    fn spawn_sleeper() -> std::process::Child {
        Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep")
    }

    #[tokio::test]
    async fn test_graceful_signal_terminates_child() {
        let mut child = spawn_sleeper();
        let handle = ProcessHandle::new(child.id());

        let terminator = SignalTerminator::new();
        let result = terminator
            .send_signal(&[handle], SignalStrength::Graceful)
            .await;
        assert!(result.is_ok());

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(15));
    }

    #[tokio::test]
    async fn test_forceful_signal_kills_child() {
        let mut child = spawn_sleeper();
        let handle = ProcessHandle::new(child.id());

        let terminator = SignalTerminator::new();
        let result = terminator
            .send_signal(&[handle], SignalStrength::Forceful)
            .await;
        assert!(result.is_ok());

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(9));
    }

    #[tokio::test]
    async fn test_nonexistent_pid_is_rejected() {
        // Above any configurable pid_max
        let handle = ProcessHandle::new(i32::MAX as u32);

        let terminator = SignalTerminator::new();
        let result = terminator
            .send_signal(&[handle], SignalStrength::Graceful)
            .await;
        assert!(matches!(
            result,
            Err(Error::TerminationRequestFailed { pid, .. }) if pid == i32::MAX as u32
        ));
    }

    #[tokio::test]
    async fn test_group_addressing_pids_are_refused() {
        let terminator = SignalTerminator::new();

        for pid in [0, u32::MAX] {
            let result = terminator
                .send_signal(&[ProcessHandle::new(pid)], SignalStrength::Forceful)
                .await;
            assert!(result.is_err(), "pid {pid} should be refused");
        }
    }

    #[tokio::test]
    async fn test_batch_signals_every_handle_despite_rejection() {
        let mut child = spawn_sleeper();
        let handles = [ProcessHandle::new(i32::MAX as u32), ProcessHandle::new(child.id())];

        let terminator = SignalTerminator::new();
        let result = terminator
            .send_signal(&handles, SignalStrength::Forceful)
            .await;
        assert!(result.is_err());

        // The valid pid was still signalled
        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(9));
    }
}
