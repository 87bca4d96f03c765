use std::time::{Duration, Instant};

use jiff::SignedDuration;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    constants::{COST_EPSILON, DEFAULT_AVERAGE_SPEED_KMH},
    error::{Result, RoutingError},
    graph::{Weight, WeightedGraph},
};

use super::{
    algorithm::AlgorithmId,
    registry::{AlgorithmRegistry, AlgorithmResult, run_solver},
    shortest_path_algorithm::{CalcPathOptions, ShortestPathAlgorithm},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threads {
    Single,
    #[default]
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorParams {
    pub threads: Threads,
    /// Shared by every solver of one comparison, measured from its start.
    pub timeout: Option<SignedDuration>,
    /// Used for the travel time estimate of each result.
    pub average_speed_kmh: f64,
}

impl Default for ComparatorParams {
    fn default() -> Self {
        Self {
            threads: Threads::Auto,
            timeout: None,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl ComparatorParams {
    pub fn validate(&self) -> Result<()> {
        if self.threads.number_of_threads() == 0 {
            return Err(RoutingError::InvalidParameter(
                "a comparison needs at least one thread".to_string(),
            ));
        }

        if self.timeout.is_some_and(|timeout| timeout.is_negative()) {
            return Err(RoutingError::InvalidParameter(
                "timeout must not be negative".to_string(),
            ));
        }

        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(RoutingError::InvalidParameter(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteComparison {
    /// One entry per requested algorithm, in request order.
    pub results: Vec<AlgorithmResult>,
    pub best_algorithm: AlgorithmId,
}

impl RouteComparison {
    pub fn best(&self) -> Option<&AlgorithmResult> {
        self.results
            .iter()
            .find(|result| result.algorithm == self.best_algorithm)
    }

    pub fn result(&self, algorithm: AlgorithmId) -> Option<&AlgorithmResult> {
        self.results
            .iter()
            .find(|result| result.algorithm == algorithm)
    }
}

/// Runs several algorithms on the same request and picks the cheapest route.
pub struct RouteComparator {
    registry: AlgorithmRegistry,
    params: ComparatorParams,
}

impl Default for RouteComparator {
    fn default() -> Self {
        Self::new(AlgorithmRegistry::with_defaults(), ComparatorParams::default())
    }
}

impl RouteComparator {
    pub fn new(registry: AlgorithmRegistry, params: ComparatorParams) -> Self {
        RouteComparator { registry, params }
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    pub fn params(&self) -> &ComparatorParams {
        &self.params
    }

    /// Compares `algorithms` (every algorithm when empty). A failing solver is
    /// recorded in its result, the comparison only fails when all of them do.
    pub fn compare(
        &self,
        graph: &WeightedGraph,
        source: &str,
        destination: &str,
        algorithms: &[AlgorithmId],
    ) -> Result<RouteComparison> {
        self.params.validate()?;
        let start = graph.node_idx(source)?;
        let end = graph.node_idx(destination)?;

        let requested: &[AlgorithmId] = if algorithms.is_empty() {
            &AlgorithmId::ALL
        } else {
            algorithms
        };

        let mut solvers: Vec<&dyn ShortestPathAlgorithm> = Vec::with_capacity(requested.len());
        for &algorithm in requested {
            if solvers.iter().any(|solver| solver.algorithm() == algorithm) {
                continue;
            }

            let solver = self
                .registry
                .solver(algorithm)
                .ok_or_else(|| RoutingError::UnknownAlgorithm(algorithm.to_string()))?;
            solvers.push(solver);
        }

        let options = self.calc_path_options();
        let average_speed_kmh = self.params.average_speed_kmh;
        let run = |solver: &dyn ShortestPathAlgorithm| {
            run_solver(solver, graph, start, end, &options, average_speed_kmh)
        };

        let results: Vec<AlgorithmResult> = match self.params.threads {
            Threads::Single => solvers.iter().map(|&solver| run(solver)).collect(),
            Threads::Auto => solvers.par_iter().map(|&solver| run(solver)).collect(),
            Threads::Multi(_) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(self.params.threads.number_of_threads())
                    .build()
                    .map_err(|error| RoutingError::InvalidParameter(error.to_string()))?;
                pool.install(|| {
                    solvers
                        .par_iter()
                        .map(|&solver| run(solver))
                        .collect::<Vec<_>>()
                })
            }
        };

        for result in &results {
            if let Some(error) = result.error() {
                warn!("{} failed: {}", result.algorithm, error);
            }
        }

        let best_algorithm =
            select_best(&results).ok_or_else(|| RoutingError::no_path(source, destination))?;
        info!(
            "Best route from {} to {}: {}",
            source, destination, best_algorithm
        );

        Ok(RouteComparison {
            results,
            best_algorithm,
        })
    }

    fn calc_path_options(&self) -> CalcPathOptions {
        let deadline = self
            .params
            .timeout
            .and_then(|timeout| Duration::try_from(timeout).ok())
            .and_then(|timeout| Instant::now().checked_add(timeout));

        CalcPathOptions { deadline }
    }
}

/// Cheapest successful result. Costs within `COST_EPSILON` of each other are
/// ties and go to the algorithm declared first in `AlgorithmId`.
fn select_best(results: &[AlgorithmResult]) -> Option<AlgorithmId> {
    let mut best: Option<(AlgorithmId, Weight)> = None;

    for result in results {
        let Some(cost) = result.cost else {
            continue;
        };

        let is_better = match best {
            None => true,
            Some((best_algorithm, best_cost)) => {
                if (cost - best_cost).abs() <= COST_EPSILON {
                    result.algorithm < best_algorithm
                } else {
                    cost < best_cost
                }
            }
        };

        if is_better {
            best = Some((result.algorithm, cost));
        }
    }

    best.map(|(algorithm, _)| algorithm)
}
