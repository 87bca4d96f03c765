use std::sync::Arc;

use fxhash::FxHashMap;
use jiff::SignedDuration;
use serde::{Serialize, Serializer};

use crate::{
    constants::DEFAULT_AVERAGE_SPEED_KMH,
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
    stopwatch::Stopwatch,
};

use super::{
    algorithm::AlgorithmId,
    ant_colony::ant_colony_solver::AntColonySolver,
    astar::AStarSolver,
    astar_heuristic::{AStarHeuristic, ZeroHeuristic},
    dijkstra::DijkstraSolver,
    fringe_search::FringeSearchSolver,
    routing_path::RoutingPath,
    shortest_path_algorithm::{CalcPathOptions, ShortestPathAlgorithm},
};

/// Report of a single solver run.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmResult {
    pub algorithm: AlgorithmId,
    /// Serialized as the path, or as the error message under `Err`.
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: std::result::Result<RoutingPath, RoutingError>,
    pub cost: Option<Weight>,
    pub complexity: &'static str,
    pub elapsed: SignedDuration,
    /// Estimated driving time, assuming the weights are kilometers.
    pub travel_time: Option<SignedDuration>,
    pub expanded_nodes: usize,
}

impl AlgorithmResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn path(&self) -> Option<&RoutingPath> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&RoutingError> {
        self.outcome.as_ref().err()
    }
}

fn serialize_outcome<S: Serializer>(
    outcome: &std::result::Result<RoutingPath, RoutingError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match outcome {
        Ok(path) => Ok::<&RoutingPath, String>(path).serialize(serializer),
        Err(error) => Err::<&RoutingPath, String>(error.to_string()).serialize(serializer),
    }
}

/// Runs `solver` and records the outcome instead of propagating it.
pub(crate) fn run_solver(
    solver: &dyn ShortestPathAlgorithm,
    graph: &WeightedGraph,
    start: NodeIdx,
    end: NodeIdx,
    options: &CalcPathOptions,
    average_speed_kmh: f64,
) -> AlgorithmResult {
    let algorithm = solver.algorithm();
    let stopwatch = Stopwatch::new(algorithm.as_str());

    let (outcome, expanded_nodes) = match solver.calc_path(graph, start, end, options) {
        Ok(result) => (Ok(result.path), result.expanded_nodes),
        Err(error) => (Err(error), 0),
    };

    let elapsed = stopwatch.signed_elapsed();
    stopwatch.report();

    let cost = outcome.as_ref().ok().map(RoutingPath::cost);
    let travel_time = outcome
        .as_ref()
        .ok()
        .and_then(|path| path.travel_time(average_speed_kmh));

    AlgorithmResult {
        algorithm,
        outcome,
        cost,
        complexity: solver.complexity(),
        elapsed,
        travel_time,
        expanded_nodes,
    }
}

/// Solvers indexed by their identifier, one per algorithm.
pub struct AlgorithmRegistry {
    solvers: FxHashMap<AlgorithmId, Box<dyn ShortestPathAlgorithm>>,
}

impl AlgorithmRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        AlgorithmRegistry {
            solvers: FxHashMap::default(),
        }
    }

    /// All four algorithms, A* and Fringe Search without a heuristic.
    pub fn with_defaults() -> Self {
        Self::with_heuristic(ZeroHeuristic)
    }

    /// All four algorithms, A* and Fringe Search sharing `heuristic`.
    pub fn with_heuristic<H: AStarHeuristic + 'static>(heuristic: H) -> Self {
        let heuristic: Arc<dyn AStarHeuristic> = Arc::new(heuristic);

        let mut registry = Self::new();
        registry
            .register(DijkstraSolver::new())
            .register(AStarSolver::with_shared_heuristic(heuristic.clone()))
            .register(FringeSearchSolver::with_shared_heuristic(heuristic))
            .register(AntColonySolver::default());
        registry
    }

    /// Adds `solver`, replacing the one registered for the same algorithm.
    pub fn register<S: ShortestPathAlgorithm + 'static>(&mut self, solver: S) -> &mut Self {
        self.solvers.insert(solver.algorithm(), Box::new(solver));
        self
    }

    pub fn solver(&self, algorithm: AlgorithmId) -> Option<&dyn ShortestPathAlgorithm> {
        self.solvers.get(&algorithm).map(|solver| solver.as_ref())
    }

    /// Looks up a solver by its selector, e.g. `"astar"` or `"a*"`.
    pub fn get(&self, algorithm: &str) -> Result<&dyn ShortestPathAlgorithm> {
        let id: AlgorithmId = algorithm.parse()?;
        self.solver(id)
            .ok_or_else(|| RoutingError::UnknownAlgorithm(algorithm.to_string()))
    }

    /// Registered algorithms in tie-break order.
    pub fn algorithms(&self) -> Vec<AlgorithmId> {
        let mut algorithms: Vec<AlgorithmId> = self.solvers.keys().copied().collect();
        algorithms.sort();
        algorithms
    }

    /// Runs a single algorithm. Unlike the comparator, a failing search is
    /// returned as an error.
    pub fn find_route(
        &self,
        graph: &WeightedGraph,
        source: &str,
        destination: &str,
        algorithm: &str,
    ) -> Result<AlgorithmResult> {
        let solver = self.get(algorithm)?;
        let start = graph.node_idx(source)?;
        let end = graph.node_idx(destination)?;

        let result = run_solver(
            solver,
            graph,
            start,
            end,
            &CalcPathOptions::default(),
            DEFAULT_AVERAGE_SPEED_KMH,
        );

        if let Err(error) = &result.outcome {
            return Err(error.clone());
        }

        Ok(result)
    }
}

/// Same as [`AlgorithmRegistry::with_defaults`].
impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
