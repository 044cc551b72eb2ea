//! Distance estimation over network coordinates.
//!
//! The estimator is the one place that turns two coordinates into an RTT
//! estimate. Any metric that is non-negative, symmetric and zero for
//! identical coordinates can be plugged in.

use corelib::{Coordinate, CoordinateSource, Error, NodeId, Result};

/// Maps a pair of coordinates to an estimated RTT in seconds.
///
/// Estimators hold no per-call state, so one ranker (and the estimator
/// inside it) can serve ranking calls from several threads at once.
pub trait DistanceEstimator: Send + Sync {
    /// Estimated RTT between `a` and `b`, in seconds.
    ///
    /// Fails only on malformed or mutually incompatible coordinates.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64>;

    /// Distance from `origin` to `node`, or `None` if `node` has no known
    /// coordinate.
    fn distance_from_self<S>(
        &self,
        topology: &S,
        origin: &Coordinate,
        node: &NodeId,
    ) -> Result<Option<f64>>
    where
        S: CoordinateSource + ?Sized,
        Self: Sized,
    {
        let coord = match topology.cached_coordinate(node)? {
            Some(coord) => coord,
            None => return Ok(None),
        };
        let distance = self.distance(origin, &coord)?;
        if distance.is_nan() || distance < 0.0 {
            return Err(Error::InvalidCoordinate(format!(
                "{} gave distance {} for node {}",
                self.name(),
                distance,
                node
            )));
        }
        Ok(Some(distance))
    }

    /// Short name used in log fields and error messages.
    fn name(&self) -> &'static str;
}

/// Euclidean distance with height and adjustment terms.
///
/// See [`Coordinate::distance_to`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanEstimator;

impl DistanceEstimator for EuclideanEstimator {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64> {
        a.distance_to(b)
    }

    fn name(&self) -> &'static str {
        "EuclideanEstimator"
    }
}
