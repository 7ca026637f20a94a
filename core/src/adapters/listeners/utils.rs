use std::collections::BTreeSet;

use crate::domain::ProcessHandle;

pub struct Utils;

impl Utils {
    /// Turn raw pids into sorted, deduplicated handles.
    ///
    /// Pid 0 is never a real listener and is dropped.
    pub fn collect_handles(pids: impl IntoIterator<Item = u32>) -> Vec<ProcessHandle> {
        pids.into_iter()
            .filter(|pid| *pid != 0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ProcessHandle::new)
            .collect()
    }
}
