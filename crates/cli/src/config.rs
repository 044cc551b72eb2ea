//! Command-line configuration and topology loading.

use crate::commands::Command;
use anyhow::Context;
use clap::Parser;
use corelib::StaticTopology;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Rank nodes and datacenters by estimated round-trip time.
#[derive(Debug, Parser)]
#[command(name = "rtt-rank", version)]
pub struct CliConfig {
    /// JSON topology file (local datacenter, local node, coordinates).
    #[arg(long, short = 't')]
    pub topology: PathBuf,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(self) -> anyhow::Result<()> {
        init_tracing(&self.log_level);

        let topology = load_topology(&self.topology)?;
        tracing::debug!(
            datacenter = %topology.datacenter,
            node = %topology.node,
            datacenters = topology.datacenters.len(),
            "loaded topology"
        );

        let result = self.command.execute(&topology)?;
        print!("{}", result);
        Ok(())
    }
}

/// Reads and parses a topology file.
pub fn load_topology(path: &Path) -> anyhow::Result<StaticTopology> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read topology file {}", path.display()))?;
    parse_topology(&raw).with_context(|| format!("invalid topology file {}", path.display()))
}

pub fn parse_topology(raw: &str) -> anyhow::Result<StaticTopology> {
    let topology: StaticTopology = serde_json::from_str(raw)?;
    if topology.datacenter.is_empty() {
        anyhow::bail!("topology has no local datacenter");
    }
    Ok(topology)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
