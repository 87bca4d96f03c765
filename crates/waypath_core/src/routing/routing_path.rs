use jiff::SignedDuration;
use serde::Serialize;

use crate::{
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
};

/// Ordered nodes from source to destination and the sum of the traversed weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath {
    nodes: Vec<String>,
    cost: Weight,
}

impl RoutingPath {
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    pub fn start(&self) -> &str {
        &self.nodes[0]
    }

    pub fn end(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges traversed.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Driving time when the weights are kilometers, `None` for a non-positive speed.
    pub fn travel_time(&self, average_speed_kmh: f64) -> Option<SignedDuration> {
        if average_speed_kmh <= 0.0 || !average_speed_kmh.is_finite() {
            return None;
        }

        SignedDuration::try_from_secs_f64(self.cost * 3600.0 / average_speed_kmh).ok()
    }
}

/// Builds the path for `nodes`, recomputing the cost from the graph so that it
/// always matches the traversed edges.
pub(crate) fn build_routing_path(graph: &WeightedGraph, nodes: &[NodeIdx]) -> Result<RoutingPath> {
    if nodes.is_empty() {
        return Err(RoutingError::InvalidParameter(
            "a path needs at least one node".to_string(),
        ));
    }

    let cost = graph.path_cost(nodes)?;

    Ok(RoutingPath {
        nodes: nodes
            .iter()
            .map(|&node| graph.node_name(node).to_string())
            .collect(),
        cost,
    })
}
