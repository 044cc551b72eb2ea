//! CLI subcommands.

use clap::Subcommand;
use corelib::{CoordinateSource, Node, QuerySource};
use ranking::Ranker;
use std::fmt;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort nodes by distance from a source node.
    SortNodes {
        /// Source node; omit both source flags to keep the input order.
        #[arg(long, default_value = "")]
        source_node: String,
        /// Datacenter of the source node.
        #[arg(long, default_value = "")]
        source_dc: String,
        /// Candidate node names.
        nodes: Vec<String>,
    },
    /// Sort datacenters by distance from the local node.
    SortDcs { dcs: Vec<String> },
    /// Distance from the local node to one datacenter.
    DcDistance { dc: String },
    /// Known member coordinates for each datacenter, as JSON.
    DcMap { dcs: Vec<String> },
}

/// Output of a command, rendered one item per line.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Ranked(Vec<String>),
    Distances(Vec<(String, f64)>),
    Json(String),
}

impl Command {
    pub fn execute<S>(&self, topology: &S) -> anyhow::Result<CommandResult>
    where
        S: CoordinateSource + ?Sized,
    {
        let ranker = Ranker::new();
        match self {
            Command::SortNodes {
                source_node,
                source_dc,
                nodes,
            } => {
                let source = QuerySource::new(source_node.as_str(), source_dc.as_str());
                let mut nodes: Vec<Node> = nodes.iter().map(|n| Node::new(n.as_str(), "")).collect();
                ranker.sort_by_distance_from(topology, &source, &mut nodes)?;
                Ok(CommandResult::Ranked(
                    nodes.into_iter().map(|n| n.id.to_string()).collect(),
                ))
            }
            Command::SortDcs { dcs } => Ok(CommandResult::Distances(
                ranker.datacenters_by_distance(topology, dcs.as_slice())?,
            )),
            Command::DcDistance { dc } => {
                let distance = ranker.datacenter_distance(topology, dc)?;
                Ok(CommandResult::Distances(vec![(dc.clone(), distance)]))
            }
            Command::DcMap { dcs } => {
                let maps = ranker.datacenter_maps(topology, dcs.as_slice())?;
                Ok(CommandResult::Json(serde_json::to_string_pretty(&maps)?))
            }
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Ranked(names) => {
                for name in names {
                    writeln!(f, "{}", name)?;
                }
                Ok(())
            }
            CommandResult::Distances(distances) => {
                for (dc, seconds) in distances {
                    if seconds.is_finite() {
                        writeln!(f, "{}\t{:.3}ms", dc, seconds * 1000.0)?;
                    } else {
                        writeln!(f, "{}\tunknown", dc)?;
                    }
                }
                Ok(())
            }
            CommandResult::Json(json) => writeln!(f, "{}", json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_topology;
    use corelib::StaticTopology;

    fn fixture() -> StaticTopology {
        parse_topology(
            r#"{
                "datacenter": "dc0",
                "node": "dc0.node1",
                "datacenters": {
                    "dc0": {
                        "dc0.node1": { "vec": [0.010, 0.0] },
                        "dc0.node2": { "vec": [0.002, 0.0] },
                        "dc0.node3": { "vec": [0.008, 0.0] }
                    },
                    "dc1": { "dc1.node1": { "vec": [0.003, 0.0] } },
                    "dcX": { "dcX.node1": null }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sort_nodes() {
        let command = Command::SortNodes {
            source_node: "dc0.node1".into(),
            source_dc: "dc0".into(),
            nodes: vec!["ghost".into(), "dc0.node2".into(), "dc0.node3".into()],
        };
        let result = command.execute(&fixture()).unwrap();
        assert_eq!(result.to_string(), "dc0.node3\ndc0.node2\nghost\n");
    }

    #[test]
    fn test_sort_nodes_without_source_keeps_order() {
        let command = Command::SortNodes {
            source_node: String::new(),
            source_dc: String::new(),
            nodes: vec!["dc0.node2".into(), "dc0.node3".into()],
        };
        let result = command.execute(&fixture()).unwrap();
        assert_eq!(
            result,
            CommandResult::Ranked(vec!["dc0.node2".into(), "dc0.node3".into()])
        );
    }

    #[test]
    fn test_sort_dcs() {
        let command = Command::SortDcs {
            dcs: vec!["dcX".into(), "dc1".into(), "dc0".into()],
        };
        let result = command.execute(&fixture()).unwrap();
        assert_eq!(result.to_string(), "dc0\t0.000ms\ndc1\t7.000ms\ndcX\tunknown\n");
    }

    #[test]
    fn test_dc_distance() {
        let command = Command::DcDistance { dc: "acdc".into() };
        let result = command.execute(&fixture()).unwrap();
        assert_eq!(result.to_string(), "acdc\tunknown\n");
    }

    #[test]
    fn test_dc_map() {
        let command = Command::DcMap {
            dcs: vec!["dc1".into()],
        };
        let CommandResult::Json(json) = command.execute(&fixture()).unwrap() else {
            panic!("dc-map should produce JSON");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["datacenter"], "dc1");
        assert_eq!(value[0]["coordinates"][0]["node"], "dc1.node1");
    }
}
