//! Aggregate cluster membership

use rustc_hash::FxHashMap;

/// How a business type relates to the aggregate clusters of a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterMembership {
    /// The type is an aggregate root and owns its own cluster
    Root,
    /// Reachable from exactly one root
    Member(String),
    /// Reachable from several roots; owned by none
    Shared,
}

/// Cluster membership of every type reachable from some aggregate root.
///
/// Types absent from the map belong to no cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateClusters {
    membership: FxHashMap<String, ClusterMembership>,
}

impl AggregateClusters {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, qualified_name: impl Into<String>, membership: ClusterMembership) {
        self.membership.insert(qualified_name.into(), membership);
    }

    pub fn membership(&self, qualified_name: &str) -> Option<&ClusterMembership> {
        self.membership.get(qualified_name)
    }

    /// Root owning `qualified_name` (a root owns itself)
    pub fn root_of<'a>(&'a self, qualified_name: &'a str) -> Option<&'a str> {
        match self.membership.get(qualified_name)? {
            ClusterMembership::Root => Some(qualified_name),
            ClusterMembership::Member(root) => Some(root.as_str()),
            ClusterMembership::Shared => None,
        }
    }

    pub fn is_shared(&self, qualified_name: &str) -> bool {
        matches!(
            self.membership.get(qualified_name),
            Some(ClusterMembership::Shared)
        )
    }

    pub fn len(&self) -> usize {
        self.membership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_of() {
        let mut clusters = AggregateClusters::new();
        clusters.insert("a.Order", ClusterMembership::Root);
        clusters.insert("a.OrderItem", ClusterMembership::Member("a.Order".to_string()));
        clusters.insert("a.Money", ClusterMembership::Shared);

        assert_eq!(clusters.root_of("a.Order"), Some("a.Order"));
        assert_eq!(clusters.root_of("a.OrderItem"), Some("a.Order"));
        assert_eq!(clusters.root_of("a.Money"), None);
        assert_eq!(clusters.root_of("a.Unrelated"), None);
        assert!(clusters.is_shared("a.Money"));
    }
}
