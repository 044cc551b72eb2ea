//! Shared fixtures for the ranking integration tests.

#![allow(dead_code)]

use corelib::{Coordinate, CoordinateSource, Error, NodeId, Result, StaticTopology};
use std::time::Duration;

/// Coordinate `rtt` away from the origin along the first axis.
pub fn generate_coordinate(rtt: Duration) -> Coordinate {
    let mut coord = Coordinate::origin(8);
    coord.vec[0] = rtt.as_secs_f64();
    coord
}

pub fn ms(millis: u64) -> Option<Coordinate> {
    Some(generate_coordinate(Duration::from_millis(millis)))
}

/// Five nodes in dc1 laid out on one axis:
///
/// ```text
///       node3 node2 node5                         node4       node1
///   |     |     |     |     |     |     |     |     |     |     |
///   0     1     2     3     4     5     6     7     8     9     10  (ms)
/// ```
pub fn seeded_nodes() -> StaticTopology {
    StaticTopology::new("dc1", "node1")
        .with_node("dc1", "node1", ms(10))
        .with_node("dc1", "node2", ms(2))
        .with_node("dc1", "node3", ms(1))
        .with_node("dc1", "node4", ms(8))
        .with_node("dc1", "node5", ms(3))
}

/// Local node lives in dc0; remote datacenters:
///
/// ```text
///            /----   dc1         ----\         /-  dc2  -\ /-  dc0  -\
///             node2 node1       node3             node1       node1
///   |     |     |     |     |     |     |     |     |     |     |
///   0     1     2     3     4     5     6     7     8     9     10  (ms)
/// ```
///
/// dc1.node4 has no coordinate, and dcX only has a node without one.
pub fn seeded_datacenters() -> StaticTopology {
    StaticTopology::new("dc0", "dc0.node1")
        .with_node("dc0", "dc0.node1", ms(10))
        .with_node("dc1", "dc1.node1", ms(3))
        .with_node("dc1", "dc1.node2", ms(2))
        .with_node("dc1", "dc1.node3", ms(5))
        .with_node("dc1", "dc1.node4", None)
        .with_node("dc2", "dc2.node1", ms(8))
        .with_node("dcX", "dcX.node1", None)
}

/// Wraps a topology and fails every lookup touching `broken`.
pub struct FlakyTopology {
    pub inner: StaticTopology,
    pub broken: NodeId,
}

impl CoordinateSource for FlakyTopology {
    fn datacenter(&self) -> &str {
        self.inner.datacenter()
    }

    fn own_coordinate(&self) -> Result<Option<Coordinate>> {
        self.inner.own_coordinate()
    }

    fn cached_coordinate(&self, node: &NodeId) -> Result<Option<Coordinate>> {
        if *node == self.broken {
            return Err(Error::Lookup(format!("store unavailable for {}", node)));
        }
        self.inner.cached_coordinate(node)
    }

    fn datacenter_members(&self, dc: &str) -> Result<Vec<NodeId>> {
        self.inner.datacenter_members(dc)
    }
}

pub fn names<T: corelib::Rankable>(entities: &[T]) -> String {
    entities
        .iter()
        .map(|e| e.node_id().as_str())
        .collect::<Vec<_>>()
        .join(",")
}
