//! Process terminator port (interface).

use crate::domain::{ProcessHandle, SignalStrength};
use crate::error::Result;

/// Port for delivering termination signals.
///
/// Delivery is asynchronous from the OS's point of view: `Ok` means the
/// request was accepted for every handle, not that the processes are gone.
pub trait TerminatorPort: Send + Sync {
    /// Signal every handle in the batch with the given strength.
    ///
    /// Fails with the first rejection, after attempting every handle.
    fn send_signal(
        &self,
        handles: &[ProcessHandle],
        strength: SignalStrength,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
