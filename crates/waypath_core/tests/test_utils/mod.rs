#![allow(dead_code)]

use waypath_core::{RoutingPath, WeightedGraph};

//
//  Diamond graph, undirected:
//
//       B
//    1 / | \ 5
//     A  |2  D
//    4 \ | / 1
//       C
//
pub const DIAMOND_GRAPH_JSON: &str = r#"{
    "A": {"B": 1, "C": 4},
    "B": {"A": 1, "C": 2, "D": 5},
    "C": {"A": 4, "B": 2, "D": 1},
    "D": {"B": 5, "C": 1}
}"#;

pub fn create_diamond_graph() -> WeightedGraph {
    WeightedGraph::from_json_str(DIAMOND_GRAPH_JSON).unwrap()
}

/// A `size` x `size` grid, each node linked to its right and lower neighbors in both
/// directions, with weights depending on the position.
pub fn create_grid_graph(size: usize) -> WeightedGraph {
    let mut builder = WeightedGraph::builder();
    let name = |x: usize, y: usize| format!("{x},{y}");

    for y in 0..size {
        for x in 0..size {
            let weight = 1.0 + ((x * 7 + y * 3) % 5) as f64;
            if x + 1 < size {
                builder
                    .add_undirected_edge(&name(x, y), &name(x + 1, y), weight)
                    .unwrap();
            }
            if y + 1 < size {
                builder
                    .add_undirected_edge(&name(x, y), &name(x, y + 1), weight + 0.5)
                    .unwrap();
            }
        }
    }

    builder.build()
}

pub fn assert_valid_path(graph: &WeightedGraph, path: &RoutingPath, start: &str, end: &str) {
    assert_eq!(path.start(), start);
    assert_eq!(path.end(), end);

    let cost: f64 = path
        .nodes()
        .windows(2)
        .map(|pair| {
            let neighbors = graph.neighbors_by_name(&pair[0]).unwrap();
            neighbors
                .iter()
                .find(|(name, _)| *name == pair[1])
                .map(|&(_, weight)| weight)
                .unwrap_or_else(|| panic!("{} -> {} is not an edge", pair[0], pair[1]))
        })
        .sum();

    assert_eq!(path.cost(), cost);
}
