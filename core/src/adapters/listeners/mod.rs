//! Listener query adapters.
//!
//! Platform-specific implementations of [`ListenerQueryPort`].

#[cfg(target_os = "linux")]
mod linux;

#[cfg(unix)]
mod lsof;

mod unsupported;
mod utils;

#[cfg(target_os = "linux")]
pub use linux::SsListenerQuery;

#[cfg(unix)]
pub use lsof::LsofListenerQuery;

pub use unsupported::UnsupportedListenerQuery;

use crate::domain::ProcessHandle;
use crate::error::Result;
use crate::ports::ListenerQueryPort;

/// The listener query for the current platform.
pub struct PlatformListenerQuery {
    #[cfg(target_os = "linux")]
    inner: linux::SsListenerQuery,

    #[cfg(all(unix, not(target_os = "linux")))]
    inner: lsof::LsofListenerQuery,

    #[cfg(not(unix))]
    inner: unsupported::UnsupportedListenerQuery,
}

impl PlatformListenerQuery {
    /// Create a listener query for the current platform.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "linux")]
            inner: linux::SsListenerQuery::new(),

            #[cfg(all(unix, not(target_os = "linux")))]
            inner: lsof::LsofListenerQuery::new(),

            #[cfg(not(unix))]
            inner: unsupported::UnsupportedListenerQuery::new(),
        }
    }
}

impl Default for PlatformListenerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerQueryPort for PlatformListenerQuery {
    async fn list_pids_on_port(&self, port: u16) -> Result<Vec<ProcessHandle>> {
        self.inner.list_pids_on_port(port).await
    }
}
