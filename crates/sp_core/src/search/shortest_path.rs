use serde::Serialize;

use crate::{constants::Weight, graph::NodeIndex};

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }
}

/// Distances and predecessors of a single source search.
///
/// Unreachable vertices have an infinite distance and no predecessor. The
/// source has distance 0 and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub(crate) source: NodeIndex,
    pub(crate) distances: Vec<Weight>,
    pub(crate) predecessors: Vec<Option<NodeIndex>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// `f64::INFINITY` if `node_idx` is unreachable or unknown
    pub fn distance(&self, node_idx: NodeIndex) -> Weight {
        self.distances
            .get(node_idx.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn predecessor(&self, node_idx: NodeIndex) -> Option<NodeIndex> {
        self.predecessors.get(node_idx.index()).copied().flatten()
    }

    pub fn is_reachable(&self, node_idx: NodeIndex) -> bool {
        self.distance(node_idx).is_finite()
    }
}
