//! Query source: the perspective a ranking is measured from.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// The node (and its datacenter) a query originates from.
///
/// The zero value means "no locality preference". A source whose datacenter
/// is empty or foreign is not an error either; its coordinate simply isn't
/// comparable with the local ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySource {
    pub node: NodeId,
    pub datacenter: String,
}

impl QuerySource {
    pub fn new(node: impl Into<NodeId>, datacenter: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            datacenter: datacenter.into(),
        }
    }

    /// True for the "don't reorder" sentinel (no node, no datacenter).
    pub fn is_zero(&self) -> bool {
        self.node.is_empty() && self.datacenter.is_empty()
    }

    /// True when the source sits in `datacenter`.
    pub fn is_in(&self, datacenter: &str) -> bool {
        self.datacenter == datacenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value() {
        assert!(QuerySource::default().is_zero());
        assert!(!QuerySource::new("", "dc1").is_zero());
        assert!(!QuerySource::new("node1", "").is_zero());
        assert!(!QuerySource::new("node1", "dc1").is_zero());
    }

    #[test]
    fn test_is_in() {
        assert!(QuerySource::new("node1", "dc1").is_in("dc1"));
        assert!(!QuerySource::new("node1", "").is_in("dc1"));
        assert!(!QuerySource::new("node1", "dc2").is_in("dc1"));
    }
}
