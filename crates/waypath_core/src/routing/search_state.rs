use fxhash::{FxBuildHasher, FxHashMap};

use crate::{
    constants::INVALID_NODE,
    graph::{NodeIdx, Weight},
};

pub(crate) struct NodeData {
    pub settled: bool,
    pub weight: Weight,
    pub parent: usize,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            settled: false,
            weight: Weight::INFINITY,
            parent: INVALID_NODE,
        }
    }
}

/// Best known cost and predecessor of every node reached by one search.
pub(crate) struct SearchState {
    // Only reached nodes are stored, the graph may be much larger than the explored area
    data: FxHashMap<usize, NodeData>,
}

impl SearchState {
    pub fn with_capacity(capacity: usize) -> Self {
        SearchState {
            data: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }

    pub fn init(&mut self, start: NodeIdx) {
        self.update_node_data(start, 0.0, INVALID_NODE);
    }

    pub fn update_node_data(&mut self, node: NodeIdx, weight: Weight, parent: usize) {
        let data = self.data.entry(node.get()).or_insert_with(NodeData::new);
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
    }

    #[inline(always)]
    pub fn current_shortest_weight(&self, node: NodeIdx) -> Weight {
        self.data
            .get(&node.get())
            .map_or(Weight::INFINITY, |data| data.weight)
    }

    #[inline(always)]
    pub fn is_settled(&self, node: NodeIdx) -> bool {
        self.data.get(&node.get()).is_some_and(|data| data.settled)
    }

    pub fn set_settled(&mut self, node: NodeIdx) {
        if let Some(data) = self.data.get_mut(&node.get()) {
            data.settled = true;
        }
    }

    pub fn reached_nodes(&self) -> usize {
        self.data.len()
    }

    /// Follows the parents back from `end`, returns the nodes from start to end.
    pub fn build_node_path(&self, end: NodeIdx) -> Vec<NodeIdx> {
        let mut nodes = Vec::with_capacity(32);
        let mut node = end.get();

        while node != INVALID_NODE {
            nodes.push(NodeIdx::new(node));
            node = self
                .data
                .get(&node)
                .map_or(INVALID_NODE, |data| data.parent);
        }

        nodes.reverse();
        nodes
    }
}
