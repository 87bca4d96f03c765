use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Identifier of a search strategy.
///
/// The declaration order is the tie-break priority used when two
/// algorithms report the same cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmId {
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "fringe")]
    Fringe,
    #[serde(rename = "aco", alias = "ant")]
    AntColony,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 4] = [
        AlgorithmId::Dijkstra,
        AlgorithmId::AStar,
        AlgorithmId::Fringe,
        AlgorithmId::AntColony,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::AStar => "astar",
            AlgorithmId::Fringe => "fringe",
            AlgorithmId::AntColony => "aco",
        }
    }

    /// Asymptotic complexity label, for display only.
    pub fn complexity(&self) -> &'static str {
        match self {
            AlgorithmId::Dijkstra => "O((V+E) log V)",
            AlgorithmId::AStar => "O(E)",
            AlgorithmId::Fringe => "O(b^d)",
            AlgorithmId::AntColony => "O(n*m)",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmId::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(AlgorithmId::AStar),
            "fringe" | "fringe_search" => Ok(AlgorithmId::Fringe),
            "aco" | "ant" | "ant_colony" => Ok(AlgorithmId::AntColony),
            _ => Err(RoutingError::UnknownAlgorithm(s.to_string())),
        }
    }
}
