//! Distance ranking of node-bound records.
//!
//! # Algorithm
//!
//! 1. Skip (leave the input untouched) when the source is the zero value,
//!    lives in another datacenter, or has no known coordinate
//! 2. Resolve every entity's distance from the source up front; nodes with
//!    no coordinate get `f64::INFINITY`
//! 3. Stable-sort ascending by distance
//!
//! Resolving before sorting means a lookup failure leaves the caller's
//! slice exactly as it was.
//!
//! # Performance
//!
//! - **Lookups**: one per distinct node in the input
//! - **Sort**: O(n log n), stable

use crate::estimator::{DistanceEstimator, EuclideanEstimator};
use corelib::{CoordinateSource, NodeId, QuerySource, Rankable, Result};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Ranks nodes, service instances and datacenters by estimated RTT.
///
/// The ranker holds no state besides its estimator; every call reads the
/// coordinates it needs from the [`CoordinateSource`] it is given.
///
/// # Example
///
/// ```rust
/// use corelib::{Coordinate, Node, QuerySource, StaticTopology};
/// use ranking::Ranker;
///
/// let topology = StaticTopology::new("dc1", "node1")
///     .with_node("dc1", "node1", Some(Coordinate::from_vec(vec![0.010])))
///     .with_node("dc1", "node2", Some(Coordinate::from_vec(vec![0.002])))
///     .with_node("dc1", "node3", Some(Coordinate::from_vec(vec![0.008])));
///
/// let mut nodes = vec![
///     Node::new("node2", "10.0.0.2"),
///     Node::new("node3", "10.0.0.3"),
///     Node::new("node1", "10.0.0.1"),
/// ];
/// Ranker::new()
///     .sort_by_distance_from(&topology, &QuerySource::new("node1", "dc1"), &mut nodes)
///     .unwrap();
///
/// let order: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
/// assert_eq!(order, ["node1", "node3", "node2"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ranker<E = EuclideanEstimator> {
    pub(crate) estimator: E,
}

impl Ranker {
    /// Ranker using the Euclidean coordinate metric.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: DistanceEstimator> Ranker<E> {
    /// Ranker using a custom distance metric.
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Sorts `entities` in place by estimated distance from `source`.
    ///
    /// Entities whose node has no coordinate go last; ties keep their input
    /// order. Returns `Ok` without touching the slice when no meaningful
    /// distance can be computed (see the module docs).
    pub fn sort_by_distance_from<S, T>(
        &self,
        topology: &S,
        source: &QuerySource,
        entities: &mut [T],
    ) -> Result<()>
    where
        S: CoordinateSource + ?Sized,
        T: Rankable,
    {
        self.sort_by_distance_from_with(topology, source, entities, T::node_id)
    }

    /// Like [`sort_by_distance_from`](Self::sort_by_distance_from) for
    /// records that expose their node through an accessor function instead
    /// of [`Rankable`].
    pub fn sort_by_distance_from_with<S, T, F>(
        &self,
        topology: &S,
        source: &QuerySource,
        entities: &mut [T],
        node_of: F,
    ) -> Result<()>
    where
        S: CoordinateSource + ?Sized,
        F: Fn(&T) -> &NodeId,
    {
        if source.is_zero() {
            return skipped("zero_source");
        }
        if !source.is_in(topology.datacenter()) {
            debug!(
                source_dc = %source.datacenter,
                local_dc = topology.datacenter(),
                "source datacenter is remote, not sorting"
            );
            return skipped("remote_datacenter");
        }
        let origin = match topology.cached_coordinate(&source.node).map_err(lookup_failed)? {
            Some(coord) => coord,
            None => {
                debug!(node = %source.node, "no coordinate for source node, not sorting");
                return skipped("unknown_source");
            }
        };
        origin.validate()?;

        let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(entities.len());
        for entity in entities.iter() {
            let node = node_of(entity);
            if distances.contains_key(node) {
                continue;
            }
            let distance = self
                .estimator
                .distance_from_self(topology, &origin, node)
                .map_err(lookup_failed)?
                .unwrap_or(f64::INFINITY);
            trace!(%node, distance, "resolved distance");
            distances.insert(node.clone(), distance);
        }

        entities.sort_by(|a, b| distances[node_of(a)].total_cmp(&distances[node_of(b)]));

        metrics::counter!("rtt_sorts_total", "kind" => "entities").increment(1);
        Ok(())
    }
}

fn skipped(reason: &'static str) -> Result<()> {
    metrics::counter!("rtt_sorts_skipped_total", "reason" => reason).increment(1);
    Ok(())
}

/// Logs store failures on their way out; data errors pass through quietly.
pub(crate) fn lookup_failed(err: corelib::Error) -> corelib::Error {
    if !err.is_data_error() {
        warn!(error = %err, "coordinate lookup failed, aborting sort");
    }
    err
}
