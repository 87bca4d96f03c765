//! Shortest paths on small weighted graphs with interchangeable algorithms:
//! Dijkstra, A*, Fringe Search and Ant Colony Optimization.
//!
//! ```
//! use waypath_core::WeightedGraph;
//!
//! let graph = WeightedGraph::from_json_str(r#"{"A": {"B": 1.0}, "B": {}}"#).unwrap();
//! let result = waypath_core::find_route(&graph, "A", "B", "dijkstra").unwrap();
//! assert_eq!(result.cost, Some(1.0));
//! ```

pub mod constants;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod priority_queue;
pub mod routing;
mod stopwatch;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use error::{Result, RoutingError};
pub use geopoint::GeoPoint;
pub use graph::{AdjacencyMap, GraphBuilder, NodeIdx, Weight, WeightedGraph};
pub use routing::{
    algorithm::AlgorithmId,
    ant_colony::{
        ant_colony_params::AntColonyParams,
        ant_colony_solver::{AntColonyRun, AntColonySolver},
    },
    astar::AStarSolver,
    astar_heuristic::{
        AStarHeuristic, FnHeuristic, HaversineHeuristic, TableHeuristic, ZeroHeuristic,
    },
    comparator::{ComparatorParams, RouteComparator, RouteComparison, Threads},
    dijkstra::DijkstraSolver,
    fringe_search::FringeSearchSolver,
    registry::{AlgorithmRegistry, AlgorithmResult},
    routing_path::RoutingPath,
    shortest_path_algorithm::{CalcPathOptions, CalcPathResult, ShortestPathAlgorithm},
};

/// Runs one algorithm, selected by name, with the default solvers.
pub fn find_route(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
    algorithm: &str,
) -> Result<AlgorithmResult> {
    AlgorithmRegistry::with_defaults().find_route(graph, source, destination, algorithm)
}

/// Compares the named algorithms (all of them when `algorithms` is empty)
/// with the default solvers and comparator settings.
pub fn compare_routes(
    graph: &WeightedGraph,
    source: &str,
    destination: &str,
    algorithms: &[&str],
) -> Result<RouteComparison> {
    let algorithms = algorithms
        .iter()
        .map(|algorithm| algorithm.parse())
        .collect::<Result<Vec<AlgorithmId>>>()?;

    RouteComparator::default().compare(graph, source, destination, &algorithms)
}
