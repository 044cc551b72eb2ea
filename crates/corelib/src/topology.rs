//! Coordinate topology abstractions.
//!
//! The ranking engine never owns coordinates. It reads them through the
//! narrow [`CoordinateSource`] capability, which production backs with a
//! replicated cache and tests back with an in-memory [`StaticTopology`].

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only view of the cluster's network coordinates.
///
/// "Not known" is `Ok(None)` or an empty member list. `Err` is reserved for
/// failures of the store itself and aborts whatever ranking call hit it.
///
/// One source is usually shared by every ranking call in the process, so
/// reads take `&self` and the trait requires `Send + Sync`.
pub trait CoordinateSource: Send + Sync {
    /// Datacenter the local node belongs to.
    fn datacenter(&self) -> &str;

    /// Coordinate of the local node, if one has been computed yet.
    fn own_coordinate(&self) -> Result<Option<Coordinate>>;

    /// Last known coordinate of `node`.
    fn cached_coordinate(&self, node: &NodeId) -> Result<Option<Coordinate>>;

    /// Nodes known to belong to `dc`; empty when the datacenter is unknown.
    fn datacenter_members(&self, dc: &str) -> Result<Vec<NodeId>>;
}

/// In-memory topology: datacenter name → node → optional coordinate.
///
/// Also the on-disk fixture format used by the CLI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticTopology {
    /// Local datacenter.
    pub datacenter: String,
    /// Local node; its entry in `datacenters` is the own coordinate.
    pub node: NodeId,
    #[serde(default)]
    pub datacenters: BTreeMap<String, BTreeMap<NodeId, Option<Coordinate>>>,
}

impl StaticTopology {
    pub fn new(datacenter: impl Into<String>, node: impl Into<NodeId>) -> Self {
        Self {
            datacenter: datacenter.into(),
            node: node.into(),
            datacenters: BTreeMap::new(),
        }
    }

    /// Registers `node` in `dc`, replacing any previous coordinate.
    pub fn insert(
        &mut self,
        dc: impl Into<String>,
        node: impl Into<NodeId>,
        coord: Option<Coordinate>,
    ) -> &mut Self {
        self.datacenters
            .entry(dc.into())
            .or_default()
            .insert(node.into(), coord);
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_node(
        mut self,
        dc: impl Into<String>,
        node: impl Into<NodeId>,
        coord: Option<Coordinate>,
    ) -> Self {
        self.insert(dc, node, coord);
        self
    }

    /// Names of all datacenters in the topology, sorted.
    pub fn datacenter_names(&self) -> Vec<String> {
        self.datacenters.keys().cloned().collect()
    }
}

impl CoordinateSource for StaticTopology {
    fn datacenter(&self) -> &str {
        &self.datacenter
    }

    fn own_coordinate(&self) -> Result<Option<Coordinate>> {
        Ok(self
            .datacenters
            .get(&self.datacenter)
            .and_then(|nodes| nodes.get(&self.node))
            .cloned()
            .flatten())
    }

    fn cached_coordinate(&self, node: &NodeId) -> Result<Option<Coordinate>> {
        Ok(self
            .datacenters
            .values()
            .find_map(|nodes| nodes.get(node).cloned().flatten()))
    }

    fn datacenter_members(&self, dc: &str) -> Result<Vec<NodeId>> {
        Ok(self
            .datacenters
            .get(dc)
            .map(|nodes| nodes.keys().cloned().collect())
            .unwrap_or_default())
    }
}
