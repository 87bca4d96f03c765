use std::time::Instant;

use crate::{
    error::{Result, RoutingError},
    graph::{NodeIdx, WeightedGraph},
};

use super::{algorithm::AlgorithmId, routing_path::RoutingPath};

#[derive(Clone, Copy, Debug, Default)]
pub struct CalcPathOptions {
    /// Searches give up at their next checkpoint once this instant has passed.
    pub deadline: Option<Instant>,
}

impl CalcPathOptions {
    pub fn with_deadline(deadline: Instant) -> Self {
        CalcPathOptions {
            deadline: Some(deadline),
        }
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    pub(crate) fn check_deadline(&self, algorithm: AlgorithmId) -> Result<()> {
        if self.is_expired() {
            return Err(RoutingError::DeadlineExceeded {
                algorithm: algorithm.to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CalcPathResult {
    pub path: RoutingPath,
    /// Nodes expanded by the search (ant steps for the ant colony).
    pub expanded_nodes: usize,
}

/// A search strategy. Solvers hold configuration only, every call owns its
/// search state, so one solver can serve concurrent calls on a shared graph.
pub trait ShortestPathAlgorithm: Send + Sync {
    fn algorithm(&self) -> AlgorithmId;

    fn calc_path(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<CalcPathResult>;

    fn complexity(&self) -> &'static str {
        self.algorithm().complexity()
    }

    /// Resolves the node names and runs the search without a deadline.
    fn solve(&self, graph: &WeightedGraph, source: &str, destination: &str) -> Result<RoutingPath> {
        let start = graph.node_idx(source)?;
        let end = graph.node_idx(destination)?;
        self.calc_path(graph, start, end, &CalcPathOptions::default())
            .map(|result| result.path)
    }
}

/// Fails fast on unknown endpoints or weights the searches cannot handle.
pub(crate) fn validate_request(graph: &WeightedGraph, start: NodeIdx, end: NodeIdx) -> Result<()> {
    graph.validate_node(start)?;
    graph.validate_node(end)?;
    graph.validate_weights()
}
