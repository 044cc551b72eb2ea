//! CLI tool for inspecting distance rankings.
//!
//! Provides commands for:
//! - Sorting nodes by distance from a source node
//! - Sorting datacenters by distance from the local node
//! - Inspecting a single datacenter's distance
//! - Dumping per-datacenter coordinate maps

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
