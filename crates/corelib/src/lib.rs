//! Core library for network-coordinate distance ranking.
//!
//! This crate provides the data model the ranking engine works over:
//! - Network coordinates and their distance metric
//! - Node identifiers and rankable record types
//! - Query sources
//! - The coordinate source capability, with in-memory and cached backings

pub mod cache;
pub mod coordinate;
pub mod error;
pub mod node;
pub mod query;
pub mod service;
pub mod topology;

pub use cache::CoordinateCache;
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use node::{Node, NodeId, Rankable};
pub use query::QuerySource;
pub use service::{CheckServiceNode, CheckStatus, HealthCheck, ServiceNode};
pub use topology::{CoordinateSource, StaticTopology};
