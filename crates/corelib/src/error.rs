//! Error types for the core library.

use thiserror::Error;

/// Result of any coordinate read or comparison.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or comparing coordinates.
///
/// A node or datacenter that simply has no coordinate is never an error;
/// lookups report that as `None` / an empty member list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The coordinate store itself failed (storage unavailable, etc.)
    #[error("coordinate lookup failed: {0}")]
    Lookup(String),
    /// Coordinate failed structural validation
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// Two coordinates live in spaces of different dimensionality
    #[error("coordinate dimensionality conflict: expected {expected}, got {actual}")]
    DimensionalityConflict { expected: usize, actual: usize },
}

impl Error {
    /// True for errors caused by malformed input rather than the store.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, Error::Lookup(_))
    }
}
