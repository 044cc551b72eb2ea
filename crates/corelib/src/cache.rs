//! Concurrent coordinate cache.
//!
//! The coordinate subsystem writes into this cache as updates are committed;
//! ranking calls read from it through [`CoordinateSource`]. Reads clone the
//! stored coordinate, so concurrent writers never change a value a ranking
//! pass has already resolved.

use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::node::NodeId;
use crate::topology::CoordinateSource;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Cache of the latest coordinate per node plus datacenter membership.
#[derive(Debug)]
pub struct CoordinateCache {
    datacenter: String,
    own: RwLock<Option<Coordinate>>,
    coordinates: DashMap<NodeId, Coordinate>,
    members: DashMap<String, BTreeSet<NodeId>>,
}

impl CoordinateCache {
    /// Empty cache for a node living in `datacenter`.
    pub fn new(datacenter: impl Into<String>) -> Self {
        Self {
            datacenter: datacenter.into(),
            own: RwLock::new(None),
            coordinates: DashMap::new(),
            members: DashMap::new(),
        }
    }

    /// Replaces the local node's coordinate.
    pub fn set_own_coordinate(&self, coord: Coordinate) {
        *self.own.write() = Some(coord);
    }

    /// Records `node` as a member of `dc` and, if given, its coordinate.
    ///
    /// A node belongs to one datacenter at a time; registering it under a
    /// new one drops the old membership.
    pub fn update(&self, dc: &str, node: NodeId, coord: Option<Coordinate>) {
        let mut moved = false;
        for mut entry in self.members.iter_mut() {
            if entry.key() != dc && entry.value_mut().remove(&node) {
                moved = true;
            }
        }
        if moved {
            self.members.retain(|_, nodes| !nodes.is_empty());
            tracing::debug!(%node, dc, "node moved between datacenters");
        }

        self.members
            .entry(dc.to_string())
            .or_default()
            .insert(node.clone());
        match coord {
            Some(coord) => {
                self.coordinates.insert(node, coord);
            }
            None => {
                self.coordinates.remove(&node);
            }
        }
    }

    /// Forgets `node` entirely. Returns true if it was a member of `dc`.
    pub fn remove(&self, dc: &str, node: &NodeId) -> bool {
        self.coordinates.remove(node);
        let removed = self
            .members
            .get_mut(dc)
            .map(|mut nodes| nodes.remove(node))
            .unwrap_or(false);
        self.members.remove_if(dc, |_, nodes| nodes.is_empty());
        if removed {
            tracing::debug!(%node, dc, "removed node from coordinate cache");
        }
        removed
    }

    pub fn node_count(&self) -> usize {
        self.coordinates.len()
    }
}

impl CoordinateSource for CoordinateCache {
    fn datacenter(&self) -> &str {
        &self.datacenter
    }

    fn own_coordinate(&self) -> Result<Option<Coordinate>> {
        Ok(self.own.read().clone())
    }

    fn cached_coordinate(&self, node: &NodeId) -> Result<Option<Coordinate>> {
        Ok(self.coordinates.get(node).map(|c| c.value().clone()))
    }

    fn datacenter_members(&self, dc: &str) -> Result<Vec<NodeId>> {
        Ok(self
            .members
            .get(dc)
            .map(|nodes| nodes.iter().cloned().collect())
            .unwrap_or_default())
    }
}
