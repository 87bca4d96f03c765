use crate::graph::{NodeIdx, WeightedGraph};

/// Pheromone level of every directed edge, laid out like the adjacency lists
/// of the graph it was created for: `levels[node][k]` belongs to the k-th
/// outgoing edge of `node`.
pub struct PheromoneMatrix {
    levels: Vec<Vec<f64>>,
}

impl PheromoneMatrix {
    pub fn new(graph: &WeightedGraph, initial_pheromone: f64) -> Self {
        PheromoneMatrix {
            levels: graph
                .nodes()
                .map(|node| vec![initial_pheromone; graph.edges(node).len()])
                .collect(),
        }
    }

    #[inline(always)]
    pub fn level(&self, node: NodeIdx, edge_offset: usize) -> f64 {
        self.levels[node.get()][edge_offset]
    }

    /// Level of the edge `from -> to`, `None` if the graph has no such edge.
    pub fn pheromone(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Option<f64> {
        let offset = graph
            .neighbors(from)
            .ok()?
            .iter()
            .position(|edge| edge.target() == to)?;
        Some(self.level(from, offset))
    }

    pub fn evaporate(&mut self, rate: f64, min_pheromone: f64) {
        for level in self.levels.iter_mut().flatten() {
            *level = (*level * (1.0 - rate)).max(min_pheromone);
        }
    }

    /// Levels saturate at `f64::MAX`.
    pub fn deposit(&mut self, node: NodeIdx, edge_offset: usize, amount: f64) {
        let level = &mut self.levels[node.get()][edge_offset];
        *level = (*level + amount).min(f64::MAX);
    }
}
