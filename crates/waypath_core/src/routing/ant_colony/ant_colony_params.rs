use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntColonyParams {
    /// Ants released per iteration
    pub ants: usize,
    pub iterations: usize,
    /// Share of pheromone lost on every edge after each iteration, in (0, 1)
    pub evaporation_rate: f64,
    /// Q in `Q / cost`, the pheromone a successful ant lays on each edge it used
    pub deposit_weight: f64,
    /// Influence of the pheromone on the next step (alpha)
    pub alpha: f64,
    /// Influence of the inverse edge weight on the next step (beta)
    pub beta: f64,
    pub initial_pheromone: f64,
    /// Evaporation never takes an edge below this level, so no edge becomes unreachable
    pub min_pheromone: f64,
    pub seed: u64,
}

impl Default for AntColonyParams {
    fn default() -> Self {
        Self {
            ants: 20,
            iterations: 100,
            evaporation_rate: 0.5,
            deposit_weight: 1.0,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            min_pheromone: 1e-6,
            seed: 42,
        }
    }
}

impl AntColonyParams {
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(RoutingError::InvalidParameter(
                "ants must be at least 1".to_string(),
            ));
        }

        if self.iterations == 0 {
            return Err(RoutingError::InvalidParameter(
                "iterations must be at least 1".to_string(),
            ));
        }

        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(RoutingError::InvalidParameter(format!(
                "evaporation rate must be in (0, 1), got {}",
                self.evaporation_rate
            )));
        }

        for (name, value) in [
            ("deposit weight", self.deposit_weight),
            ("initial pheromone", self.initial_pheromone),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RoutingError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("min pheromone", self.min_pheromone),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RoutingError::InvalidParameter(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}
