//! Node abstractions for distance ranking.
//!
//! Nodes are identified by their name within a datacenter. Anything that can
//! be ranked by distance exposes the node it is bound to through [`Rankable`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the cluster (its node name).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Any record bound to a node, and therefore rankable by that node's distance.
pub trait Rankable {
    fn node_id(&self) -> &NodeId;
}

impl Rankable for NodeId {
    fn node_id(&self) -> &NodeId {
        self
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn node_id(&self) -> &NodeId {
        (**self).node_id()
    }
}

/// Catalog node.
///
/// Ranking moves these records around inside the caller's slice; it never
/// copies or rebuilds them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Network address or hostname.
    pub address: String,
    /// Datacenter the node is registered in.
    pub datacenter: Option<String>,
}

impl Node {
    /// Construct a node with just an identifier and address.
    pub fn new(id: impl Into<NodeId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            datacenter: None,
        }
    }

    pub fn with_datacenter(
        id: impl Into<NodeId>,
        address: impl Into<String>,
        datacenter: impl Into<Option<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            datacenter: datacenter.into(),
        }
    }
}

impl Rankable for Node {
    fn node_id(&self) -> &NodeId {
        &self.id
    }
}
