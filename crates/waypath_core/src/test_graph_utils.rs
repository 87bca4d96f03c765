#[cfg(test)]
pub mod test_graph {
    use crate::{
        geopoint::GeoPoint,
        graph::{Weight, WeightedGraph},
        routing::{astar_heuristic::TableHeuristic, routing_path::RoutingPath},
    };

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    const ROMANIA_ROADS: [(&str, &str, Weight); 23] = [
        ("Oradea", "Zerind", 71.0),
        ("Oradea", "Sibiu", 151.0),
        ("Zerind", "Arad", 75.0),
        ("Arad", "Sibiu", 140.0),
        ("Arad", "Timisoara", 118.0),
        ("Timisoara", "Lugoj", 111.0),
        ("Lugoj", "Mehadia", 70.0),
        ("Mehadia", "Dobreta", 75.0),
        ("Dobreta", "Craiova", 120.0),
        ("Craiova", "RimnicuVilcea", 146.0),
        ("Craiova", "Pitesti", 138.0),
        ("RimnicuVilcea", "Pitesti", 97.0),
        ("RimnicuVilcea", "Sibiu", 80.0),
        ("Sibiu", "Fagaras", 99.0),
        ("Fagaras", "Bucharest", 211.0),
        ("Pitesti", "Bucharest", 101.0),
        ("Bucharest", "Giurgiu", 90.0),
        ("Bucharest", "Urziceni", 85.0),
        ("Urziceni", "Hirsova", 98.0),
        ("Hirsova", "Eforie", 86.0),
        ("Urziceni", "Vaslui", 142.0),
        ("Vaslui", "Iasi", 92.0),
        ("Iasi", "Neamt", 87.0),
    ];

    // Straight-line distances to Bucharest
    const ROMANIA_BUCHAREST_DISTANCES: [(&str, Weight); 20] = [
        ("Arad", 366.0),
        ("Bucharest", 0.0),
        ("Craiova", 160.0),
        ("Dobreta", 242.0),
        ("Eforie", 161.0),
        ("Fagaras", 176.0),
        ("Giurgiu", 77.0),
        ("Hirsova", 151.0),
        ("Iasi", 226.0),
        ("Lugoj", 244.0),
        ("Mehadia", 241.0),
        ("Neamt", 234.0),
        ("Oradea", 380.0),
        ("Pitesti", 100.0),
        ("RimnicuVilcea", 193.0),
        ("Sibiu", 253.0),
        ("Timisoara", 329.0),
        ("Urziceni", 80.0),
        ("Vaslui", 199.0),
        ("Zerind", 374.0),
    ];

    pub fn create_romania_graph() -> WeightedGraph {
        let mut builder = WeightedGraph::builder();
        for (a, b, distance) in ROMANIA_ROADS {
            builder.add_undirected_edge(a, b, distance).unwrap();
        }
        builder.build()
    }

    pub fn romania_heuristic() -> TableHeuristic {
        TableHeuristic::new("Bucharest", ROMANIA_BUCHAREST_DISTANCES)
    }

    /// A - B - C - D with the shortcuts A - C and B - D. The shortest path
    /// from A to D is A, B, C, D with cost 4.
    pub fn create_diamond_graph() -> WeightedGraph {
        let mut builder = WeightedGraph::builder();
        builder
            .add_undirected_edge("A", "B", 1.0)
            .unwrap()
            .add_undirected_edge("A", "C", 4.0)
            .unwrap()
            .add_undirected_edge("B", "C", 2.0)
            .unwrap()
            .add_undirected_edge("B", "D", 5.0)
            .unwrap()
            .add_undirected_edge("C", "D", 1.0)
            .unwrap();
        builder.build()
    }

    pub fn diamond_heuristic() -> TableHeuristic {
        TableHeuristic::new("D", [("A", 3.0), ("B", 3.0), ("C", 1.0), ("D", 0.0)])
    }

    /// Directed; Anna Nagar and OMR have no outgoing roads.
    pub fn create_chennai_graph() -> WeightedGraph {
        let mut builder = WeightedGraph::builder();
        for (from, to, distance) in [
            ("T Nagar", "Adyar", 5.0),
            ("T Nagar", "Anna Nagar", 7.0),
            ("T Nagar", "Velachery", 8.0),
            ("Adyar", "T Nagar", 5.0),
            ("Adyar", "Velachery", 4.0),
            ("Adyar", "OMR", 6.0),
            ("Velachery", "T Nagar", 8.0),
            ("Velachery", "Adyar", 4.0),
            ("Velachery", "Tambaram", 7.0),
            ("Velachery", "OMR", 3.0),
            ("Tambaram", "Velachery", 7.0),
            ("Tambaram", "OMR", 9.0),
        ] {
            builder.add_edge(from, to, distance).unwrap();
        }
        builder.build()
    }

    pub fn chennai_coordinates() -> Vec<(&'static str, GeoPoint)> {
        vec![
            ("Chennai Central", GeoPoint::new(13.0827, 80.2707)),
            ("Marina Beach", GeoPoint::new(13.0500, 80.2824)),
            ("T Nagar", GeoPoint::new(13.0418, 80.2341)),
            ("Anna Nagar", GeoPoint::new(13.0850, 80.2101)),
            ("Velachery", GeoPoint::new(12.9815, 80.2180)),
            ("Tambaram", GeoPoint::new(12.9249, 80.1000)),
            ("Adyar", GeoPoint::new(13.0012, 80.2565)),
            ("Porur", GeoPoint::new(13.0359, 80.1567)),
            ("OMR", GeoPoint::new(12.9010, 80.2279)),
            ("ECR", GeoPoint::new(12.9516, 80.2940)),
        ]
    }

    /// Two components: A - B and C - D.
    pub fn create_disconnected_graph() -> WeightedGraph {
        let mut builder = WeightedGraph::builder();
        builder
            .add_undirected_edge("A", "B", 1.0)
            .unwrap()
            .add_undirected_edge("C", "D", 1.0)
            .unwrap();
        builder.build()
    }

    pub fn assert_valid_path(graph: &WeightedGraph, path: &RoutingPath, start: &str, end: &str) {
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);

        let mut cost = 0.0;
        for pair in path.nodes().windows(2) {
            let from = graph.node_idx(&pair[0]).unwrap();
            let to = graph.node_idx(&pair[1]).unwrap();
            let weight = graph
                .edge_weight(from, to)
                .unwrap_or_else(|| panic!("{} -> {} is not an edge", pair[0], pair[1]));
            cost += weight;
        }

        assert_eq!(path.cost(), cost);
    }
}
