use std::sync::Arc;

use tracing::debug;

use crate::{
    constants::INVALID_NODE,
    error::{Result, RoutingError},
    graph::{NodeIdx, Weight, WeightedGraph},
    stopwatch::Stopwatch,
};

use super::{
    algorithm::AlgorithmId,
    astar_heuristic::{AStarHeuristic, ZeroHeuristic, checked_estimate},
    routing_path::build_routing_path,
    shortest_path_algorithm::{
        CalcPathOptions, CalcPathResult, ShortestPathAlgorithm, validate_request,
    },
};

/// Fringe Search
/// "Fringe Search: Beating A* at Pathfinding on Game Maps"
/// Yngvi Björnsson, Markus Enzenberger, Robert C. Holte, Jonathan Schaeffer
///
/// Repeatedly scans a linked list of frontier nodes against a rising
/// `f = g + h` limit instead of keeping a heap. Nodes above the limit stay in
/// the list for the next pass. Optimal with an admissible and consistent
/// heuristic, deterministic in any case.
pub struct FringeSearchSolver {
    heuristic: Arc<dyn AStarHeuristic>,
}

impl Default for FringeSearchSolver {
    fn default() -> Self {
        FringeSearchSolver::with_heuristic(ZeroHeuristic)
    }
}

impl FringeSearchSolver {
    pub fn with_heuristic<H: AStarHeuristic + 'static>(heuristic: H) -> Self {
        FringeSearchSolver {
            heuristic: Arc::new(heuristic),
        }
    }

    pub fn with_shared_heuristic(heuristic: Arc<dyn AStarHeuristic>) -> Self {
        FringeSearchSolver { heuristic }
    }
}

#[derive(Clone, Copy)]
struct CacheEntry {
    g_score: Weight,
    /// Lazily computed estimate to the end node
    h_score: Option<Weight>,
    parent: usize,
}

/// Doubly linked list of node ids with O(1) insertion after a node and removal.
struct Fringe {
    head: usize,
    next: Vec<usize>,
    prev: Vec<usize>,
    in_list: Vec<bool>,
    len: usize,
}

impl Fringe {
    fn new(node_count: usize) -> Self {
        Fringe {
            head: INVALID_NODE,
            next: vec![INVALID_NODE; node_count],
            prev: vec![INVALID_NODE; node_count],
            in_list: vec![false; node_count],
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn contains(&self, node: usize) -> bool {
        self.in_list[node]
    }

    fn push_front(&mut self, node: usize) {
        self.next[node] = self.head;
        self.prev[node] = INVALID_NODE;
        if self.head != INVALID_NODE {
            self.prev[self.head] = node;
        }
        self.head = node;
        self.in_list[node] = true;
        self.len += 1;
    }

    fn insert_after(&mut self, anchor: usize, node: usize) {
        let following = self.next[anchor];
        self.prev[node] = anchor;
        self.next[node] = following;
        self.next[anchor] = node;
        if following != INVALID_NODE {
            self.prev[following] = node;
        }
        self.in_list[node] = true;
        self.len += 1;
    }

    fn remove(&mut self, node: usize) {
        let previous = self.prev[node];
        let following = self.next[node];

        if previous == INVALID_NODE {
            self.head = following;
        } else {
            self.next[previous] = following;
        }

        if following != INVALID_NODE {
            self.prev[following] = previous;
        }

        self.next[node] = INVALID_NODE;
        self.prev[node] = INVALID_NODE;
        self.in_list[node] = false;
        self.len -= 1;
    }
}

impl FringeSearchSolver {
    fn h_score(
        &self,
        cache: &mut [Option<CacheEntry>],
        graph: &WeightedGraph,
        node: usize,
        end: NodeIdx,
    ) -> Weight {
        let Some(entry) = cache[node].as_mut() else {
            return Weight::INFINITY;
        };

        *entry.h_score.get_or_insert_with(|| {
            checked_estimate(&self.heuristic, graph, NodeIdx::new(node), end)
        })
    }
}

impl ShortestPathAlgorithm for FringeSearchSolver {
    fn algorithm(&self) -> AlgorithmId {
        AlgorithmId::Fringe
    }

    fn calc_path(
        &self,
        graph: &WeightedGraph,
        start: NodeIdx,
        end: NodeIdx,
        options: &CalcPathOptions,
    ) -> Result<CalcPathResult> {
        validate_request(graph, start, end)?;
        let stopwatch = Stopwatch::new("fringe/calc_path");

        let node_count = graph.node_count();
        let mut fringe = Fringe::new(node_count);
        let mut cache: Vec<Option<CacheEntry>> = vec![None; node_count];

        cache[start.get()] = Some(CacheEntry {
            g_score: 0.0,
            h_score: None,
            parent: INVALID_NODE,
        });
        fringe.push_front(start.get());

        let mut f_limit = self.h_score(&mut cache, graph, start.get(), end);
        let mut found = false;
        let mut passes = 0;
        let mut expanded_nodes = 0;

        while !found && !fringe.is_empty() {
            passes += 1;
            let mut f_min = Weight::INFINITY;
            let mut node = fringe.head;

            while node != INVALID_NODE {
                let g_score = cache[node].map_or(Weight::INFINITY, |entry| entry.g_score);
                let f_score = g_score + self.h_score(&mut cache, graph, node, end);

                if f_score > f_limit {
                    f_min = f_min.min(f_score);
                    node = fringe.next[node];
                    continue;
                }

                if node == end.get() {
                    found = true;
                    break;
                }

                // Children are inserted right after the current node, in edge order,
                // so that they are visited later in this same pass
                for edge in graph.edges(NodeIdx::new(node)).iter().rev() {
                    let child = edge.target().get();
                    let child_g_score = g_score + edge.weight();

                    if let Some(entry) = cache[child] {
                        if child_g_score >= entry.g_score {
                            continue;
                        }
                    }

                    if fringe.contains(child) {
                        fringe.remove(child);
                    }
                    fringe.insert_after(node, child);

                    let h_score = cache[child].and_then(|entry| entry.h_score);
                    cache[child] = Some(CacheEntry {
                        g_score: child_g_score,
                        h_score,
                        parent: node,
                    });
                }

                let following = fringe.next[node];
                fringe.remove(node);
                expanded_nodes += 1;
                node = following;

                options.check_deadline(self.algorithm())?;
            }

            f_limit = f_min;
        }

        debug!(
            "Fringe search passes: {}, expanded nodes: {}",
            passes, expanded_nodes
        );
        stopwatch.report();

        if !found {
            return Err(RoutingError::no_path(
                graph.node_name(start),
                graph.node_name(end),
            ));
        }

        let mut nodes = Vec::with_capacity(32);
        let mut node = end.get();
        while node != INVALID_NODE {
            nodes.push(NodeIdx::new(node));
            node = cache[node].map_or(INVALID_NODE, |entry| entry.parent);
        }
        nodes.reverse();

        Ok(CalcPathResult {
            path: build_routing_path(graph, &nodes)?,
            expanded_nodes,
        })
    }
}
