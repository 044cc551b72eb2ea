//! Datacenter distance aggregation and ranking.
//!
//! A remote datacenter's distance is the median of the distances from the
//! local node to every member with a known coordinate. The median is taken
//! at index `n / 2` of the ascending samples, so for an even sample count it
//! is the upper of the two middle values (no averaging).
//!
//! | Datacenter                          | Distance        |
//! |-------------------------------------|-----------------|
//! | the local one                       | `0.0`           |
//! | unknown / no members                | `f64::INFINITY` |
//! | no member with a known coordinate   | `f64::INFINITY` |
//! | otherwise                           | median          |

use crate::estimator::DistanceEstimator;
use crate::ranker::{lookup_failed, Ranker};
use corelib::{Coordinate, CoordinateSource, NodeId, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Known coordinates of one datacenter's members.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatacenterMap {
    pub datacenter: String,
    /// Members with a known coordinate, sorted by node name.
    pub coordinates: Vec<NodeCoordinate>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeCoordinate {
    pub node: NodeId,
    pub coord: Coordinate,
}

impl<E: DistanceEstimator> Ranker<E> {
    /// Estimated distance in seconds from the local node to `dc`.
    pub fn datacenter_distance<S>(&self, topology: &S, dc: &str) -> Result<f64>
    where
        S: CoordinateSource + ?Sized,
    {
        if dc == topology.datacenter() {
            return Ok(0.0);
        }

        let members = topology.datacenter_members(dc).map_err(lookup_failed)?;
        if members.is_empty() {
            debug!(dc, "datacenter has no known members");
            return Ok(f64::INFINITY);
        }
        let origin = match topology.own_coordinate().map_err(lookup_failed)? {
            Some(coord) => coord,
            None => {
                debug!(dc, "no local coordinate yet, datacenter is unmeasurable");
                return Ok(f64::INFINITY);
            }
        };

        let mut samples = Vec::with_capacity(members.len());
        for node in &members {
            if let Some(distance) = self
                .estimator
                .distance_from_self(topology, &origin, node)
                .map_err(lookup_failed)?
            {
                samples.push(distance);
            }
        }

        match median(&mut samples) {
            Some(distance) => {
                metrics::histogram!("rtt_datacenter_distance_seconds").record(distance);
                Ok(distance)
            }
            None => {
                debug!(dc, "no member of datacenter has a coordinate");
                Ok(f64::INFINITY)
            }
        }
    }

    /// Stable-sorts `dcs` in place by [`datacenter_distance`](Self::datacenter_distance).
    ///
    /// Every distance is resolved before the slice is touched.
    pub fn sort_datacenters_by_distance<S, D>(&self, topology: &S, dcs: &mut [D]) -> Result<()>
    where
        S: CoordinateSource + ?Sized,
        D: AsRef<str>,
    {
        let mut distances: HashMap<String, f64> = HashMap::with_capacity(dcs.len());
        for dc in dcs.iter() {
            let dc = dc.as_ref();
            if !distances.contains_key(dc) {
                distances.insert(dc.to_string(), self.datacenter_distance(topology, dc)?);
            }
        }

        dcs.sort_by(|a, b| distances[a.as_ref()].total_cmp(&distances[b.as_ref()]));

        metrics::counter!("rtt_sorts_total", "kind" => "datacenters").increment(1);
        Ok(())
    }

    /// Ranked `(datacenter, distance)` pairs, leaving `dcs` untouched.
    pub fn datacenters_by_distance<S, D>(&self, topology: &S, dcs: &[D]) -> Result<Vec<(String, f64)>>
    where
        S: CoordinateSource + ?Sized,
        D: AsRef<str>,
    {
        let mut ranked = dcs
            .iter()
            .map(|dc| {
                let dc = dc.as_ref();
                self.datacenter_distance(topology, dc)
                    .map(|distance| (dc.to_string(), distance))
            })
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(ranked)
    }

    /// Snapshot of the known coordinates in each of `dcs`, in input order.
    pub fn datacenter_maps<S, D>(&self, topology: &S, dcs: &[D]) -> Result<Vec<DatacenterMap>>
    where
        S: CoordinateSource + ?Sized,
        D: AsRef<str>,
    {
        let mut maps = Vec::with_capacity(dcs.len());
        for dc in dcs {
            let mut members = topology
                .datacenter_members(dc.as_ref())
                .map_err(lookup_failed)?;
            members.sort();
            members.dedup();

            let mut coordinates = Vec::with_capacity(members.len());
            for node in members {
                if let Some(coord) = topology.cached_coordinate(&node).map_err(lookup_failed)? {
                    coordinates.push(NodeCoordinate { node, coord });
                }
            }
            maps.push(DatacenterMap {
                datacenter: dc.as_ref().to_string(),
                coordinates,
            });
        }
        Ok(maps)
    }
}

/// Element at index `len / 2` of the ascending samples.
fn median(samples: &mut [f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(f64::total_cmp);
    Some(samples[samples.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&mut [5.0]), Some(5.0));
        assert_eq!(median(&mut [7.0, 5.0, 8.0]), Some(7.0));
    }

    #[test]
    fn test_median_even_takes_upper_middle() {
        assert_eq!(median(&mut [4.0, 1.0]), Some(4.0));
        assert_eq!(median(&mut [1.0, 2.0, 3.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_median_empty() {
        let mut empty: [f64; 0] = [];
        assert_eq!(median(&mut empty), None);
    }
}
