//! Listener query for platforms without a supported enumeration facility.

use crate::domain::ProcessHandle;
use crate::error::{Error, Result};
use crate::ports::ListenerQueryPort;

/// Always fails; the reclaimer treats the failure as "no listeners".
pub struct UnsupportedListenerQuery;

impl UnsupportedListenerQuery {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedListenerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerQueryPort for UnsupportedListenerQuery {
    async fn list_pids_on_port(&self, _port: u16) -> Result<Vec<ProcessHandle>> {
        Err(Error::UnsupportedPlatform(format!(
            "no listener enumeration on {}",
            std::env::consts::OS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_query_fails_closed() {
        let query = UnsupportedListenerQuery::new();
        let result = query.list_pids_on_port(3000).await;
        assert!(matches!(result, Err(Error::UnsupportedPlatform(_))));
    }
}
