//! Listener query port (interface).

use crate::domain::ProcessHandle;
use crate::error::Result;

/// Port for discovering which processes listen on a TCP port.
///
/// Implementations wrap a platform facility (`ss`, `lsof`, a native socket
/// table API). The result is a best-effort snapshot; callers must expect it
/// to go stale immediately.
pub trait ListenerQueryPort: Send + Sync {
    /// List the processes listening on `port`, over any address family.
    ///
    /// Returns an empty list when nothing listens. Handles are deduplicated
    /// and in ascending pid order.
    fn list_pids_on_port(
        &self,
        port: u16,
    ) -> impl std::future::Future<Output = Result<Vec<ProcessHandle>>> + Send;
}
