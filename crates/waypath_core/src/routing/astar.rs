use std::sync::Arc;

use tracing::debug;

use crate::{
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
    priority_queue::PriorityQueue,
    stopwatch::Stopwatch,
};

use super::{
    algorithm::AlgorithmId,
    astar_heuristic::{AStarHeuristic, ZeroHeuristic, checked_estimate},
    routing_path::build_routing_path,
    search_state::SearchState,
    shortest_path_algorithm::{
        CalcPathOptions, CalcPathResult, ShortestPathAlgorithm, validate_request,
    },
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Nodes are ordered by `f = g + h`, ties go to the node with the lowest `h`
/// (closest to the goal) and then to the node reached first.
///
/// With an admissible heuristic the path is optimal. With an inadmissible one,
/// settled nodes are reopened when a cheaper path to them shows up, but the
/// search still stops as soon as the destination is taken from the queue, so
/// the returned path may not be the shortest.
pub struct AStarSolver {
    heuristic: Arc<dyn AStarHeuristic>,
}

impl Default for AStarSolver {
    fn default() -> Self {
        AStarSolver::with_heuristic(ZeroHeuristic)
    }
}

impl AStarSolver {
    pub fn with_heuristic<H: AStarHeuristic + 'static>(heuristic: H) -> Self {
        AStarSolver {
            heuristic: Arc::new(heuristic),
        }
    }

    pub fn with_shared_heuristic(heuristic: Arc<dyn AStarHeuristic>) -> Self {
        AStarSolver { heuristic }
    }
}

/// (f_score, h_score), compared lexicographically
type AStarPriority = (Weight, Weight);

impl ShortestPathAlgorithm for AStarSolver {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::AStar
    }

    fn calc_path(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<CalcPathResult> {
        validate_request(graph, start, end)?;
        let stopwatch = Stopwatch::new("astar/calc_path");

        let mut state = SearchState::with_capacity(graph.node_count());
        let mut queue: PriorityQueue<AStarPriority> = PriorityQueue::new(graph.node_count());

        let h_score = checked_estimate(&self.heuristic, graph, start, end);
        state.init(start);
        queue.insert(start.get(), (h_score, h_score))?;

        let mut iterations = 0;

        while !queue.is_empty() {
            let (node_id, _) = queue.extract_min()?;
            let node = NodeIdx::new(node_id);
            let g_score = state.current_shortest_weight(node);

            state.set_settled(node);
            iterations += 1;

            if node == end {
                break;
            }

            for edge in graph.edges(node) {
                let adj_node = edge.target();
                let next_weight = g_score + edge.weight();

                // Settled nodes are reopened when a cheaper path is found
                if next_weight < state.current_shortest_weight(adj_node) {
                    state.update_node_data(adj_node, next_weight, node_id);
                    let h_score = checked_estimate(&self.heuristic, graph, adj_node, end);
                    queue.decrease_priority(adj_node.get(), (next_weight + h_score, h_score));
                }
            }

            options.check_deadline(self.algorithm())?;
        }

        debug!(
            "A* iterations: {}, reached nodes: {}",
            iterations,
            state.reached_nodes()
        );
        stopwatch.report();

        if !state.is_settled(end) {
            return Err(RoutingError::no_path(
                graph.node_name(start),
                graph.node_name(end),
            ));
        }

        Ok(CalcPathResult {
            path: build_routing_path(graph, &state.build_node_path(end))?,
            expanded_nodes: iterations,
        })
    }
}
