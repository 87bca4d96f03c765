use std::sync::Arc;

use fxhash::FxHashMap;
use tracing::warn;

use crate::{
    geopoint::GeoPoint,
    graph::{NodeIdx, Weight, WeightedGraph},
};

/// Estimate of the remaining cost from `from` to `to`.
///
/// Implementations must be pure and non-negative. A* and Fringe Search only
/// return optimal paths when the estimate never exceeds the true remaining
/// cost (admissible). An inadmissible estimate is accepted but the returned
/// path may then be longer than the shortest one.
pub trait AStarHeuristic: Send + Sync {
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight;
}

impl<H: AStarHeuristic + ?Sized> AStarHeuristic for Arc<H> {
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight {
        (**self).estimate(graph, from, to)
    }
}

impl<H: AStarHeuristic + ?Sized> AStarHeuristic for Box<H> {
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight {
        (**self).estimate(graph, from, to)
    }
}

/// Negative, infinite or NaN estimates are clamped to zero.
pub(crate) fn checked_estimate<H: AStarHeuristic + ?Sized>(
    heuristic: &H,
    graph: &WeightedGraph,
    from: NodeIdx,
    to: NodeIdx,
) -> Weight {
    let estimate = heuristic.estimate(graph, from, to);
    if estimate.is_finite() && estimate >= 0.0 {
        return estimate;
    }

    warn!(
        "heuristic returned {} for {} -> {}, using 0",
        estimate,
        graph.node_name(from),
        graph.node_name(to)
    );
    0.0
}

/// Always estimates 0, A* then behaves like Dijkstra.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &WeightedGraph, _from: NodeIdx, _to: NodeIdx) -> Weight {
        0.0
    }
}

/// Great-circle distance between the coordinates of two nodes, in kilometers
/// multiplied by `scale`. Admissible as long as edge weights are at least the
/// straight-line distance in the same unit.
#[derive(Clone, Debug, Default)]
pub struct HaversineHeuristic {
    coordinates: FxHashMap<String, GeoPoint>,
    scale: f64,
}

impl HaversineHeuristic {
    pub fn new<I, S>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        HaversineHeuristic {
            coordinates: coordinates
                .into_iter()
                .map(|(name, point)| (name.into(), point))
                .collect(),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn coordinates(&self, name: &str) -> Option<&GeoPoint> {
        self.coordinates.get(name)
    }
}

impl AStarHeuristic for HaversineHeuristic {
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight {
        // Nodes without coordinates fall back to the trivial estimate
        match (
            self.coordinates(graph.node_name(from)),
            self.coordinates(graph.node_name(to)),
        ) {
            (Some(start), Some(end)) => start.haversine_distance(end) * self.scale,
            _ => 0.0,
        }
    }
}

/// Precomputed estimates towards a single goal, such as a straight-line
/// distance table. Any other goal gets the trivial estimate.
#[derive(Clone, Debug)]
pub struct TableHeuristic {
    goal: String,
    estimates: FxHashMap<String, Weight>,
}

impl TableHeuristic {
    pub fn new<I, S>(goal: &str, estimates: I) -> Self
    where
        I: IntoIterator<Item = (S, Weight)>,
        S: Into<String>,
    {
        TableHeuristic {
            goal: goal.to_string(),
            estimates: estimates
                .into_iter()
                .map(|(name, estimate)| (name.into(), estimate))
                .collect(),
        }
    }
}

impl AStarHeuristic for TableHeuristic {
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight {
        if graph.node_name(to) != self.goal {
            return 0.0;
        }

        self.estimates
            .get(graph.node_name(from))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Adapts a closure over node names.
pub struct FnHeuristic<F>(pub F);

impl<F> AStarHeuristic for FnHeuristic<F>
where
    F: Fn(&str, &str) -> Weight + Send + Sync,
{
    fn estimate(&self, graph: &WeightedGraph, from: NodeIdx, to: NodeIdx) -> Weight {
        (self.0)(graph.node_name(from), graph.node_name(to))
    }
}
