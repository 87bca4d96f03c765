use std::collections::BTreeMap;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

pub type Weight = f64;

/// Dense index of a node inside a [`WeightedGraph`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeIdx(usize);

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIdx {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Outgoing edge stored in the adjacency list of its start node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    target: NodeIdx,
    weight: Weight,
}

impl GraphEdge {
    pub fn target(&self) -> NodeIdx {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// JSON shape of a graph: `{"A": {"B": 1.0}}`.
pub type AdjacencyMap = BTreeMap<String, BTreeMap<String, Weight>>;

/// Directed graph of named nodes with non-negative, finite edge weights.
///
/// The graph is immutable once built and can be shared between threads.
/// Neighbours are iterated in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyMap", into = "AdjacencyMap")]
pub struct WeightedGraph {
    names: Vec<String>,
    index: FxHashMap<String, NodeIdx>,
    adjacency: Vec<Vec<GraphEdge>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn from_adjacency(adjacency: &AdjacencyMap) -> Result<WeightedGraph> {
        let mut builder = GraphBuilder::default();

        for (node, neighbors) in adjacency {
            builder.add_node(node);
            for (neighbor, &weight) in neighbors {
                builder.add_edge(node, neighbor, weight)?;
            }
        }

        Ok(builder.build())
    }

    /// Parses the `{"A": {"B": 1.0}}` adjacency shape.
    pub fn from_json_str(json: &str) -> Result<WeightedGraph> {
        let adjacency: AdjacencyMap = serde_json::from_str(json)
            .map_err(|error| RoutingError::InvalidGraph(error.to_string()))?;
        WeightedGraph::from_adjacency(&adjacency)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_idx(&self, name: &str) -> Result<NodeIdx> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode(name.to_string()))
    }

    /// Panics if `node` does not belong to this graph; use [`Self::validate_node`] first.
    pub fn node_name(&self, node: NodeIdx) -> &str {
        &self.names[node.get()]
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.names.len()).map(NodeIdx::new)
    }

    pub fn validate_node(&self, node: NodeIdx) -> Result<()> {
        if node.get() < self.names.len() {
            Ok(())
        } else {
            Err(RoutingError::UnknownNode(node.to_string()))
        }
    }

    pub fn neighbors(&self, node: NodeIdx) -> Result<&[GraphEdge]> {
        self.adjacency
            .get(node.get())
            .map(Vec::as_slice)
            .ok_or_else(|| RoutingError::UnknownNode(node.to_string()))
    }

    pub fn neighbors_by_name(&self, name: &str) -> Result<Vec<(&str, Weight)>> {
        let node = self.node_idx(name)?;
        Ok(self
            .edges(node)
            .iter()
            .map(|edge| (self.node_name(edge.target), edge.weight))
            .collect())
    }

    /// Outgoing edges of a node already known to be valid.
    #[inline(always)]
    pub(crate) fn edges(&self, node: NodeIdx) -> &[GraphEdge] {
        &self.adjacency[node.get()]
    }

    pub fn edge_weight(&self, from: NodeIdx, to: NodeIdx) -> Option<Weight> {
        self.adjacency
            .get(from.get())?
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Sum of the weights along `nodes`, failing when two consecutive nodes are not linked.
    pub fn path_cost(&self, nodes: &[NodeIdx]) -> Result<Weight> {
        nodes.windows(2).try_fold(0.0, |cost, pair| {
            self.edge_weight(pair[0], pair[1])
                .map(|weight| cost + weight)
                .ok_or_else(|| RoutingError::NotAnEdge {
                    from: self.display_name(pair[0]),
                    to: self.display_name(pair[1]),
                })
        })
    }

    fn display_name(&self, node: NodeIdx) -> String {
        self.names
            .get(node.get())
            .cloned()
            .unwrap_or_else(|| node.to_string())
    }

    pub fn validate_weights(&self) -> Result<()> {
        for (from, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                if !is_valid_weight(edge.weight) {
                    return Err(RoutingError::InvalidWeight {
                        from: self.names[from].clone(),
                        to: self.names[edge.target.get()].clone(),
                        weight: edge.weight,
                    });
                }
            }
        }

        Ok(())
    }
}

impl TryFrom<AdjacencyMap> for WeightedGraph {
    type Error = RoutingError;

    fn try_from(adjacency: AdjacencyMap) -> Result<Self> {
        WeightedGraph::from_adjacency(&adjacency)
    }
}

impl From<WeightedGraph> for AdjacencyMap {
    fn from(graph: WeightedGraph) -> Self {
        graph
            .nodes()
            .map(|node| {
                let neighbors = graph
                    .edges(node)
                    .iter()
                    .map(|edge| (graph.node_name(edge.target).to_string(), edge.weight))
                    .collect();
                (graph.node_name(node).to_string(), neighbors)
            })
            .collect()
    }
}

fn is_valid_weight(weight: Weight) -> bool {
    weight.is_finite() && weight >= 0.0
}

#[derive(Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    index: FxHashMap<String, NodeIdx>,
    adjacency: Vec<Vec<GraphEdge>>,
}

impl GraphBuilder {
    pub fn add_node(&mut self, name: &str) -> NodeIdx {
        if let Some(&node) = self.index.get(name) {
            return node;
        }

        let node = NodeIdx::new(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), node);
        self.adjacency.push(vec![]);
        node
    }

    /// Adds the directed edge `from -> to`, replacing its weight if it already exists.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<&mut Self> {
        if !is_valid_weight(weight) {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        let start = self.add_node(from);
        let target = self.add_node(to);
        let edges = &mut self.adjacency[start.get()];

        match edges.iter_mut().find(|edge| edge.target == target) {
            Some(edge) => edge.weight = weight,
            None => edges.push(GraphEdge { target, weight }),
        }

        Ok(self)
    }

    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<&mut Self> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn build(self) -> WeightedGraph {
        let edge_count = self.adjacency.iter().map(Vec::len).sum();
        WeightedGraph {
            names: self.names,
            index: self.index,
            adjacency: self.adjacency,
            edge_count,
        }
    }
}
