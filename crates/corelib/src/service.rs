//! Service-bound records.
//!
//! Service instances and health checks are registered against a node, so
//! they rank by that node's distance just like plain catalog nodes.

use crate::node::{Node, NodeId, Rankable};
use serde::{Deserialize, Serialize};

/// A service instance registered on a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceNode {
    pub node: NodeId,
    pub address: String,
    pub service_id: String,
    pub service_name: String,
    #[serde(default)]
    pub service_tags: Vec<String>,
    pub service_port: u16,
}

impl ServiceNode {
    pub fn new(node: impl Into<NodeId>, service_name: impl Into<String>) -> Self {
        let service_name = service_name.into();
        Self {
            node: node.into(),
            address: String::new(),
            service_id: service_name.clone(),
            service_name,
            service_tags: Vec::new(),
            service_port: 0,
        }
    }
}

impl Rankable for ServiceNode {
    fn node_id(&self) -> &NodeId {
        &self.node
    }
}

/// Status reported by a health check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passing,
    Warning,
    Critical,
}

/// A health check registered on a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub node: NodeId,
    pub check_id: String,
    pub status: CheckStatus,
    /// Empty for node-level checks.
    #[serde(default)]
    pub service_id: String,
}

impl HealthCheck {
    pub fn new(node: impl Into<NodeId>, check_id: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            node: node.into(),
            check_id: check_id.into(),
            status,
            service_id: String::new(),
        }
    }
}

impl Rankable for HealthCheck {
    fn node_id(&self) -> &NodeId {
        &self.node
    }
}

/// A service instance joined with its node and the checks that cover it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckServiceNode {
    pub node: Node,
    pub service: ServiceNode,
    #[serde(default)]
    pub checks: Vec<HealthCheck>,
}

impl CheckServiceNode {
    /// True when no check covering this instance is critical.
    pub fn is_healthy(&self) -> bool {
        self.checks.iter().all(|c| c.status != CheckStatus::Critical)
    }
}

impl Rankable for CheckServiceNode {
    fn node_id(&self) -> &NodeId {
        &self.node.id
    }
}
