//! Declared port and process handle domain models.

use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// PortSet
// ============================================================================

/// Deduplicated set of declared development ports.
///
/// Iteration is always in ascending numeric order, independent of the order
/// in which ports were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSet {
    ports: BTreeSet<u16>,
}

impl PortSet {
    /// Create an empty port set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a port. Returns `false` if it was already present.
    pub fn insert(&mut self, port: u16) -> bool {
        self.ports.insert(port)
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Iterate over the ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }

    /// Ports as an ascending vector.
    pub fn to_vec(&self) -> Vec<u16> {
        self.iter().collect()
    }
}

// ============================================================================
// ProcessHandle
// ============================================================================

/// A process id observed listening on a port.
///
/// Handles are snapshots: the process may exit, or the id may be reused,
/// at any point after the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessHandle(u32);

impl ProcessHandle {
    pub fn new(pid: u32) -> Self {
        Self(pid)
    }

    /// The raw process id.
    pub fn pid(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Join handles as `"12, 34"` for progress output.
pub fn join_handles(handles: &[ProcessHandle]) -> String {
    handles
        .iter()
        .map(ProcessHandle::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_set_dedup_and_order() {
        let mut set = PortSet::new();
        assert!(set.is_empty());
        for port in [3001, 3000, 3001, 8080, 3000] {
            set.insert(port);
        }
        assert_eq!(set.to_vec(), vec![3000, 3001, 8080]);
    }

    #[test]
    fn test_port_set_insert_reports_duplicates() {
        let mut set = PortSet::new();
        assert!(set.insert(4000));
        assert!(!set.insert(4000));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![4000]);
    }

    #[test]
    fn test_join_handles() {
        let handles = vec![ProcessHandle::new(12), ProcessHandle::new(34)];
        assert_eq!(join_handles(&handles), "12, 34");
        assert_eq!(join_handles(&[]), "");
    }
}
