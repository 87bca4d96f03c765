use fixedbitset::FixedBitSet;
use rand::{SeedableRng, rngs::SmallRng, seq::IndexedRandom};
use tracing::{debug, trace, warn};

use crate::{
    constants::MIN_EDGE_WEIGHT,
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
    stopwatch::Stopwatch,
};

use super::{
    super::{
        algorithm::AlgorithmId,
        routing_path::{RoutingPath, build_routing_path},
        shortest_path_algorithm::{
            CalcPathOptions, CalcPathResult, ShortestPathAlgorithm, validate_request,
        },
    },
    ant_colony_params::AntColonyParams,
    pheromone_matrix::PheromoneMatrix,
};

/// Ant Colony Optimization
///
/// An approximation: the returned path is the cheapest one found by the ants,
/// which is not guaranteed to be the shortest. Runs are reproducible for a
/// given seed.
#[derive(Clone, Debug, Default)]
pub struct AntColonySolver {
    params: AntColonyParams,
}

/// Outcome of a full colony run.
#[derive(Debug, Clone)]
pub struct AntColonyRun {
    pub best: Option<RoutingPath>,
    /// Best cost known after each completed iteration, infinite until an ant succeeds
    pub best_cost_history: Vec<Weight>,
    pub successful_tours: usize,
    pub ant_steps: usize,
}

struct AntTour {
    nodes: Vec<NodeIdx>,
    /// (node, offset of the outgoing edge taken from it)
    steps: Vec<(NodeIdx, usize)>,
    cost: Weight,
}

impl AntColonySolver {
    pub fn new(params: AntColonyParams) -> Self {
        AntColonySolver { params }
    }

    pub fn params(&self) -> &AntColonyParams {
        &self.params
    }

    pub fn run(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<AntColonyRun> {
        self.params.validate()?;
        validate_request(graph, start, end)?;
        let stopwatch = Stopwatch::new("aco/run");

        let params = &self.params;
        let mut rng = SmallRng::seed_from_u64(params.seed);
        let mut matrix = PheromoneMatrix::new(graph, params.initial_pheromone);
        let mut visited = FixedBitSet::with_capacity(graph.node_count());
        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(8);

        let mut best: Option<AntTour> = None;
        let mut best_cost_history = Vec::with_capacity(params.iterations);
        let mut successful_tours = 0;
        let mut ant_steps = 0;

        for iteration in 0..params.iterations {
            let mut tours = Vec::with_capacity(params.ants);
            for _ in 0..params.ants {
                // A stuck ant simply contributes nothing
                if let Some(tour) = self.construct_tour(
                    graph,
                    &matrix,
                    start,
                    end,
                    &mut rng,
                    &mut visited,
                    &mut candidates,
                ) {
                    ant_steps += tour.steps.len();
                    tours.push(tour);
                }
            }

            matrix.evaporate(params.evaporation_rate, params.min_pheromone);
            for tour in &tours {
                let amount = params.deposit_weight / tour.cost.max(MIN_EDGE_WEIGHT);
                for &(node, edge_offset) in &tour.steps {
                    matrix.deposit(node, edge_offset, amount);
                }
            }

            successful_tours += tours.len();
            let iteration_best = tours
                .into_iter()
                .min_by(|a, b| a.cost.total_cmp(&b.cost));
            if let Some(tour) = iteration_best {
                if best.as_ref().is_none_or(|current| tour.cost < current.cost) {
                    best = Some(tour);
                }
            }

            let best_cost = best.as_ref().map_or(Weight::INFINITY, |tour| tour.cost);
            best_cost_history.push(best_cost);
            trace!("ACO iteration {}: best cost {}", iteration, best_cost);

            if iteration + 1 < params.iterations && options.is_expired() {
                if best.is_none() {
                    return Err(RoutingError::DeadlineExceeded {
                        algorithm: self.algorithm().to_string(),
                    });
                }

                warn!(
                    "ACO deadline exceeded after {} of {} iterations, keeping the best path so far",
                    iteration + 1,
                    params.iterations
                );
                break;
            }
        }

        debug!(
            "ACO successful tours: {}, ant steps: {}",
            successful_tours, ant_steps
        );
        stopwatch.report();

        let best = best
            .map(|tour| build_routing_path(graph, &tour.nodes))
            .transpose()?;

        Ok(AntColonyRun {
            best,
            best_cost_history,
            successful_tours,
            ant_steps,
        })
    }

    /// Walks one ant from `start` until it reaches `end`, or returns `None`
    /// when every neighbor of its current node was already visited.
    #[allow(clippy::too_many_arguments)]
    fn construct_tour(
        &self,
        graph: &WeightedGraph,
        matrix: &PheromoneMatrix,
        start: NodeIdx,
        end: NodeIdx,
        rng: &mut SmallRng,
        visited: &mut FixedBitSet,
        candidates: &mut Vec<(usize, f64)>,
    ) -> Option<AntTour> {
        visited.clear();
        visited.insert(start.get());

        let mut nodes = vec![start];
        let mut steps = Vec::new();
        let mut cost = 0.0;
        let mut current = start;

        while current != end {
            let edges = graph.edges(current);

            candidates.clear();
            for (edge_offset, edge) in edges.iter().enumerate() {
                if visited.contains(edge.target().get()) {
                    continue;
                }

                // ln(tau^alpha * eta^beta), so large exponents cannot overflow
                let pheromone = log_power(matrix.level(current, edge_offset), self.params.alpha);
                let visibility =
                    log_power(1.0 / edge.weight().max(MIN_EDGE_WEIGHT), self.params.beta);
                candidates.push((edge_offset, pheromone + visibility));
            }
            normalize_log_weights(candidates);

            // `None` once every neighbor was visited
            let edge_offset = candidates
                .choose_weighted(rng, |candidate| candidate.1)
                .ok()
                .or_else(|| candidates.choose(rng))
                .map(|&(edge_offset, _)| edge_offset)?;

            let edge = edges[edge_offset];
            steps.push((current, edge_offset));
            cost += edge.weight();
            current = edge.target();
            visited.insert(current.get());
            nodes.push(current);
        }

        Some(AntTour { nodes, steps, cost })
    }
}

/// `exponent * ln(base)`, with `x^0 = 1` even for a zero base.
fn log_power(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * base.ln()
}

/// Turns log weights into roulette weights in `[0, 1]`, the largest being 1.
/// Candidates tied at `+inf` share the wheel. NaN weights get 0, unless no
/// candidate has a usable weight and the pick becomes uniform.
fn normalize_log_weights(candidates: &mut [(usize, f64)]) {
    let max = candidates
        .iter()
        .map(|candidate| candidate.1)
        .filter(|weight| !weight.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);

    for candidate in candidates.iter_mut() {
        candidate.1 = if max == f64::INFINITY {
            if candidate.1 == f64::INFINITY { 1.0 } else { 0.0 }
        } else if max == f64::NEG_INFINITY {
            // Every candidate is equally bad
            1.0
        } else {
            let weight = (candidate.1 - max).exp();
            if weight.is_nan() { 0.0 } else { weight }
        };
    }
}

impl ShortestPathAlgorithm for AntColonySolver {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::AntColony
    }

    fn calc_path(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<CalcPathResult> {
        let run = self.run(graph, start, end, options)?;

        let path = run.best.ok_or_else(|| {
            RoutingError::no_path(graph.node_name(start), graph.node_name(end))
        })?;

        Ok(CalcPathResult {
            path,
            expanded_nodes: run.ant_steps,
        })
    }
}
