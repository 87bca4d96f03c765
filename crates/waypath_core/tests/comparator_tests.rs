mod test_utils;

use jiff::SignedDuration;
use waypath_core::{
    AlgorithmId, AlgorithmRegistry, ComparatorParams, RouteComparator, RoutingError, Threads,
    WeightedGraph,
};

use crate::test_utils::create_diamond_graph;

#[test]
fn test_compare_routes() {
    let graph = create_diamond_graph();

    let comparison = waypath_core::compare_routes(&graph, "A", "D", &[]).unwrap();

    assert_eq!(comparison.results.len(), 4);
    assert_eq!(comparison.best_algorithm, AlgorithmId::Dijkstra);
    for result in &comparison.results {
        assert_eq!(result.cost, Some(4.0));
        assert_eq!(result.travel_time, Some(SignedDuration::from_mins(4)));
    }
}

#[test]
fn test_compare_selected_routes() {
    let graph = create_diamond_graph();

    let comparison =
        waypath_core::compare_routes(&graph, "A", "D", &["ant", "fringe", "aco"]).unwrap();

    let algorithms: Vec<AlgorithmId> = comparison
        .results
        .iter()
        .map(|result| result.algorithm)
        .collect();
    assert_eq!(algorithms, vec![AlgorithmId::AntColony, AlgorithmId::Fringe]);
    assert_eq!(comparison.best_algorithm, AlgorithmId::Fringe);
}

#[test]
fn test_compare_errors() {
    let graph = create_diamond_graph();

    assert_eq!(
        waypath_core::compare_routes(&graph, "A", "D", &["dfs"]).err(),
        Some(RoutingError::UnknownAlgorithm("dfs".to_string()))
    );
    assert_eq!(
        waypath_core::compare_routes(&graph, "X", "D", &[]).err(),
        Some(RoutingError::UnknownNode("X".to_string()))
    );

    let disconnected =
        WeightedGraph::from_json_str(r#"{"A": {}, "B": {}}"#).unwrap();
    assert!(matches!(
        waypath_core::compare_routes(&disconnected, "A", "B", &[]),
        Err(RoutingError::NoPathFound { .. })
    ));
}

#[test]
fn test_params_from_json() {
    let graph = create_diamond_graph();
    let params: ComparatorParams =
        serde_json::from_str(r#"{"threads": "single", "average_speed_kmh": 30.0}"#).unwrap();
    let comparator = RouteComparator::new(AlgorithmRegistry::with_defaults(), params);

    let comparison = comparator
        .compare(&graph, "A", "D", &[AlgorithmId::Dijkstra])
        .unwrap();

    assert_eq!(comparator.params().threads, Threads::Single);
    assert_eq!(
        comparison.best().and_then(|best| best.travel_time),
        Some(SignedDuration::from_mins(8))
    );
}

#[test]
fn test_comparison_json() {
    let graph = create_diamond_graph();

    let comparison =
        waypath_core::compare_routes(&graph, "A", "D", &["dijkstra", "aco"]).unwrap();
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["bestAlgorithm"], "dijkstra");
    assert_eq!(json["results"][1]["algorithm"], "aco");
    assert_eq!(json["results"][1]["complexity"], "O(n*m)");
}
