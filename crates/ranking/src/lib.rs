//! Distance ranking over network coordinates.
//!
//! This crate orders candidates by estimated round-trip time from a query
//! source:
//! - Nodes and service instances, relative to a source node
//! - Remote datacenters, relative to the local node
//!
//! The free functions below use the default [`EuclideanEstimator`]; build a
//! [`Ranker`] with [`Ranker::with_estimator`] to plug in another metric.

pub mod datacenter;
pub mod estimator;
pub mod ranker;

pub use datacenter::{DatacenterMap, NodeCoordinate};
pub use estimator::{DistanceEstimator, EuclideanEstimator};
pub use ranker::Ranker;

use corelib::{CoordinateSource, QuerySource, Rankable, Result};

/// Sorts `entities` by distance from `source`. See [`Ranker::sort_by_distance_from`].
pub fn sort_by_distance_from<S, T>(topology: &S, source: &QuerySource, entities: &mut [T]) -> Result<()>
where
    S: CoordinateSource + ?Sized,
    T: Rankable,
{
    Ranker::new().sort_by_distance_from(topology, source, entities)
}

/// Sorts datacenter names by distance. See [`Ranker::sort_datacenters_by_distance`].
pub fn sort_datacenters_by_distance<S, D>(topology: &S, dcs: &mut [D]) -> Result<()>
where
    S: CoordinateSource + ?Sized,
    D: AsRef<str>,
{
    Ranker::new().sort_datacenters_by_distance(topology, dcs)
}

/// Distance to a datacenter. See [`Ranker::datacenter_distance`].
pub fn datacenter_distance<S>(topology: &S, dc: &str) -> Result<f64>
where
    S: CoordinateSource + ?Sized,
{
    Ranker::new().datacenter_distance(topology, dc)
}

/// Known member coordinates per datacenter. See [`Ranker::datacenter_maps`].
pub fn datacenter_maps<S, D>(topology: &S, dcs: &[D]) -> Result<Vec<DatacenterMap>>
where
    S: CoordinateSource + ?Sized,
    D: AsRef<str>,
{
    Ranker::new().datacenter_maps(topology, dcs)
}
