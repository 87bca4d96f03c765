use tracing::debug;

use crate::{
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
    priority_queue::PriorityQueue,
    stopwatch::Stopwatch,
};

use super::{
    algorithm::AlgorithmId,
    routing_path::build_routing_path,
    search_state::SearchState,
    shortest_path_algorithm::{
        CalcPathOptions, CalcPathResult, ShortestPathAlgorithm, validate_request,
    },
};

/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Requires non-negative weights, which are validated before the search.
/// Nodes with equal distances are settled in the order they were reached.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    pub fn new() -> Self {
        DijkstraSolver
    }
}

impl ShortestPathAlgorithm for DijkstraSolver {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Dijkstra
    }

    fn calc_path(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<CalcPathResult> {
        validate_request(graph, start, end)?;
        let stopwatch = Stopwatch::new("dijkstra/calc_path");

        let mut state = SearchState::with_capacity(graph.node_count());
        let mut queue: PriorityQueue<Weight> = PriorityQueue::new(graph.node_count());

        state.init(start);
        queue.insert(start.get(), 0.0)?;

        let mut iterations = 0;
        let mut nodes_visited = 0;

        while !queue.is_empty() {
            let (node_id, weight) = queue.extract_min()?;
            let node = NodeIdx::new(node_id);

            state.set_settled(node);
            iterations += 1;

            if node == end {
                break;
            }

            for edge in graph.edges(node) {
                let adj_node = edge.target();

                if state.is_settled(adj_node) {
                    continue;
                }

                nodes_visited += 1;

                let next_weight = weight + edge.weight();

                if next_weight < state.current_shortest_weight(adj_node) {
                    state.update_node_data(adj_node, next_weight, node_id);
                    queue.decrease_priority(adj_node.get(), next_weight);
                }
            }

            options.check_deadline(self.algorithm())?;
        }

        debug!(
            "Dijkstra iterations: {}, nodes visited: {}",
            iterations, nodes_visited
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

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::test_graph_utils::test_graph::{
        assert_valid_path, create_chennai_graph, create_diamond_graph, create_disconnected_graph,
        create_romania_graph,
    };

    #[test]
    fn test_calc_path() {
        let graph = create_romania_graph();

        let path = DijkstraSolver.solve(&graph, "Oradea", "Bucharest").unwrap();

        assert_eq!(path.cost(), 429.0);
        assert_valid_path(&graph, &path, "Oradea", "Bucharest");
    }

    #[test]
    fn test_calc_path_2() {
        let graph = create_romania_graph();

        let path = DijkstraSolver.solve(&graph, "Iasi", "Timisoara").unwrap();

        assert_eq!(path.cost(), 855.0);
        assert_valid_path(&graph, &path, "Iasi", "Timisoara");
    }

    #[test]
    fn test_diamond_graph() {
        let graph = create_diamond_graph();

        let path = DijkstraSolver.solve(&graph, "A", "D").unwrap();

        assert_eq!(path.nodes(), &["A", "B", "C", "D"]);
        assert_eq!(path.cost(), 4.0);
    }

    #[test]
    fn test_respects_edge_direction() {
        let graph = create_chennai_graph();

        let path = DijkstraSolver.solve(&graph, "T Nagar", "Tambaram").unwrap();
        assert_eq!(path.nodes(), &["T Nagar", "Velachery", "Tambaram"]);
        assert_eq!(path.cost(), 15.0);

        // OMR has no outgoing road
        assert!(matches!(
            DijkstraSolver.solve(&graph, "OMR", "T Nagar"),
            Err(RoutingError::NoPathFound { .. })
        ));
    }

    #[test]
    fn test_same_start_and_end() {
        let graph = create_diamond_graph();

        let path = DijkstraSolver.solve(&graph, "C", "C").unwrap();
        assert_eq!(path.nodes(), &["C"]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn test_no_path() {
        let graph = create_disconnected_graph();

        let result = DijkstraSolver.solve(&graph, "A", "D");
        assert_eq!(
            result,
            Err(RoutingError::NoPathFound {
                start: "A".to_string(),
                end: "D".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_node() {
        let graph = create_diamond_graph();
        assert_eq!(
            DijkstraSolver.solve(&graph, "A", "Z"),
            Err(RoutingError::UnknownNode("Z".to_string()))
        );
    }

    #[test]
    fn test_deterministic() {
        let graph = create_romania_graph();
        let first = DijkstraSolver.solve(&graph, "Arad", "Bucharest").unwrap();

        for _ in 0..5 {
            assert_eq!(
                DijkstraSolver.solve(&graph, "Arad", "Bucharest").unwrap(),
                first
            );
        }
    }

    #[test]
    fn test_deadline_exceeded() {
        let graph = create_romania_graph();
        let start = graph.node_idx("Arad").unwrap();
        let end = graph.node_idx("Bucharest").unwrap();

        let result = DijkstraSolver.calc_path(
            &graph,
            start,
            end,
            &CalcPathOptions::with_deadline(Instant::now()),
        );
        assert!(matches!(result, Err(RoutingError::DeadlineExceeded { .. })));
    }
}
