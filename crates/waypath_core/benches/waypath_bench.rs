use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use waypath_core::{
    AStarSolver, AntColonyParams, AntColonySolver, DijkstraSolver, FringeSearchSolver,
    ShortestPathAlgorithm, TableHeuristic, WeightedGraph,
};

const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
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

fn romania_graph() -> WeightedGraph {
    let mut builder = WeightedGraph::builder();
    for (a, b, distance) in ROMANIA_ROADS {
        builder.add_undirected_edge(a, b, distance).unwrap();
    }
    builder.build()
}

fn bucharest_heuristic() -> TableHeuristic {
    TableHeuristic::new(
        "Bucharest",
        [
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
        ],
    )
}

fn solvers_benchmark(c: &mut Criterion) {
    let graph = romania_graph();
    let solvers: [Box<dyn ShortestPathAlgorithm>; 4] = [
        Box::new(DijkstraSolver::new()),
        Box::new(AStarSolver::with_heuristic(bucharest_heuristic())),
        Box::new(FringeSearchSolver::with_heuristic(bucharest_heuristic())),
        Box::new(AntColonySolver::new(AntColonyParams {
            ants: 10,
            iterations: 20,
            ..AntColonyParams::default()
        })),
    ];

    for solver in &solvers {
        let name = solver.algorithm();
        c.bench_function(&format!("{name} Timisoara -> Bucharest"), |b| {
            b.iter(|| {
                solver
                    .solve(black_box(&graph), black_box("Timisoara"), black_box("Bucharest"))
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, solvers_benchmark);
criterion_main!(benches);
