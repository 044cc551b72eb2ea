//! Network coordinates.
//!
//! A coordinate places a node in a latency-embedding space so that the
//! distance between two coordinates approximates the round-trip time between
//! the nodes. Coordinates are computed elsewhere; this crate only reads them.
//!
//! # Distance
//!
//! ```text
//! d(a, b) = ||a.vec - b.vec|| + a.height + b.height
//! d'(a, b) = d(a, b) + a.adjustment + b.adjustment   (used when d' > 0)
//! ```
//!
//! Distances are expressed in seconds.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A node's position in the latency-embedding space.
///
/// Values are cloned out of whatever store holds them, so a coordinate seen
/// during one ranking pass never changes under the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Euclidean part of the coordinate.
    pub vec: Vec<f64>,
    /// Confidence estimate owned by the coordinate subsystem.
    #[serde(default)]
    pub error: f64,
    /// Per-node offset added on top of the Euclidean distance.
    #[serde(default)]
    pub adjustment: f64,
    /// Access-link latency that cannot be captured by the vector part.
    #[serde(default)]
    pub height: f64,
}

impl Coordinate {
    /// Coordinate at the origin of a space with `dimensionality` components.
    pub fn origin(dimensionality: usize) -> Self {
        Self {
            vec: vec![0.0; dimensionality],
            error: 1.5,
            adjustment: 0.0,
            height: 0.0,
        }
    }

    /// Coordinate with the given vector and zero height/adjustment.
    pub fn from_vec(vec: Vec<f64>) -> Self {
        Self {
            vec,
            ..Self::origin(0)
        }
    }

    pub fn dimensionality(&self) -> usize {
        self.vec.len()
    }

    /// Structural validation: non-empty vector, every component finite,
    /// height non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.vec.is_empty() {
            return Err(Error::InvalidCoordinate("empty vector".into()));
        }
        if let Some(i) = self.vec.iter().position(|c| !c.is_finite()) {
            return Err(Error::InvalidCoordinate(format!(
                "component {} is not finite",
                i
            )));
        }
        for (name, value) in [
            ("error", self.error),
            ("adjustment", self.adjustment),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidCoordinate(format!("{} is not finite", name)));
            }
        }
        if self.height < 0.0 {
            return Err(Error::InvalidCoordinate(format!(
                "height {} is negative",
                self.height
            )));
        }
        Ok(())
    }

    /// Checks that `other` lives in the same space as `self`.
    pub fn check_compatible(&self, other: &Coordinate) -> Result<()> {
        if self.dimensionality() != other.dimensionality() {
            return Err(Error::DimensionalityConflict {
                expected: self.dimensionality(),
                actual: other.dimensionality(),
            });
        }
        Ok(())
    }

    pub fn is_compatible_with(&self, other: &Coordinate) -> bool {
        self.check_compatible(other).is_ok()
    }

    /// Estimated RTT to `other` in seconds.
    ///
    /// Both coordinates are validated first; a malformed or incompatible
    /// pair is an error, never a guessed value.
    pub fn distance_to(&self, other: &Coordinate) -> Result<f64> {
        self.validate()?;
        other.validate()?;
        self.check_compatible(other)?;

        let dist = self.raw_distance_to(other);
        let adjusted = dist + self.adjustment + other.adjustment;
        if adjusted > 0.0 {
            Ok(adjusted)
        } else {
            Ok(dist.max(0.0))
        }
    }

    /// Estimated RTT to `other` as a `Duration`.
    pub fn rtt_to(&self, other: &Coordinate) -> Result<Duration> {
        self.distance_to(other).map(Duration::from_secs_f64)
    }

    fn raw_distance_to(&self, other: &Coordinate) -> f64 {
        let magnitude = self
            .vec
            .iter()
            .zip(&other.vec)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt();
        magnitude + self.height + other.height
    }
}
