use crate::constants::{Weight, MAX_EDGE_COST, MAX_VERTEX_COUNT};
use crate::error::{Error, InvalidEdgeReason, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash};

/// Default integer typer for node and edge indices
/// Needs to be increased vor very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Vertex identifier. Dense and zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// Reserved value, never a valid vertex.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }

    /// Converts an index read from input data. Returns `None` if it does not
    /// fit the index type.
    pub fn try_from_raw(raw: u64) -> Option<Self> {
        if raw < Self::end().index() as u64 {
            Some(NodeIndex::new(raw as usize))
        } else {
            None
        }
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> From<Idx> for EdgeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        EdgeIndex(ix)
    }
}

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// Undirected weighted edge. `source` and `target` only record the order in
/// which the endpoints were given.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub weight: Weight,
}

impl Edge {
    pub fn new(
        source: NodeIndex<DefaultIdx>,
        target: NodeIndex<DefaultIdx>,
        weight: Weight,
    ) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// The endpoint which is not `node_idx`. For a self-loop this is `node_idx`.
    #[inline]
    pub fn opposite(&self, node_idx: NodeIndex) -> NodeIndex {
        if self.source == node_idx {
            self.target
        } else {
            self.source
        }
    }

    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Undirected graph with non-negative edge weights.
///
/// The vertex range is either declared up front ([`Graph::with_vertex_count`])
/// or grows to `max(source, target) + 1` as edges are added ([`Graph::new`]).
/// Between any pair of vertices at most one edge is stored, carrying the
/// lowest weight that was added for the pair.
#[derive(Debug, Clone)]
pub struct Graph<Idx = DefaultIdx> {
    adjacency: Vec<Vec<EdgeIndex<Idx>>>,
    edges: Vec<Edge<Idx>>,
    fixed_size: bool,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            edges: Vec::new(),
            fixed_size: false,
        }
    }

    pub fn with_vertex_count(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
            edges: Vec::new(),
            fixed_size: true,
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            fixed_size: false,
        }
    }

    /// Add a new `edge` to the graph.
    ///
    /// Fails with [`Error::InvalidEdge`] if the weight is negative, not finite
    /// or above [`MAX_EDGE_COST`], or if an endpoint lies outside the vertex
    /// range. A graph without a declared range grows up to
    /// [`MAX_VERTEX_COUNT`] vertices.
    /// If the pair is already connected the existing edge keeps the lower of
    /// both weights and its index is returned.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its index
    /// type
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex> {
        if !edge.weight.is_finite() {
            return Err(invalid(InvalidEdgeReason::NonFiniteCost(edge.weight)));
        }
        if edge.weight < 0.0 {
            return Err(invalid(InvalidEdgeReason::NegativeCost(edge.weight)));
        }
        if edge.weight > MAX_EDGE_COST {
            return Err(invalid(InvalidEdgeReason::CostTooLarge(edge.weight)));
        }

        let (source, target) = (edge.source.index(), edge.target.index());
        let limit = if self.fixed_size {
            self.adjacency.len()
        } else {
            MAX_VERTEX_COUNT
        };
        if source >= limit {
            return Err(invalid(InvalidEdgeReason::SourceOutOfRange {
                vertex: source as u64,
                limit: limit as u64,
            }));
        }
        if target >= limit {
            return Err(invalid(InvalidEdgeReason::TargetOutOfRange {
                vertex: target as u64,
                limit: limit as u64,
            }));
        }
        if !self.fixed_size {
            let needed = source.max(target) + 1;
            if needed > self.adjacency.len() {
                self.adjacency.resize_with(needed, Vec::new);
            }
        }

        // Parallel edges collapse into the cheapest one
        if let Some(edge_idx) = self.find_edge(edge.source, edge.target) {
            let old_edge = &mut self.edges[edge_idx.index()];
            if edge.weight < old_edge.weight {
                old_edge.weight = edge.weight;
            }
            return Ok(edge_idx);
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.adjacency[source].push(edge_idx);
        if source != target {
            self.adjacency[target].push(edge_idx);
        }
        self.edges.push(edge);

        Ok(edge_idx)
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Number of vertices known to the graph
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.adjacency.len()
    }

    pub fn edge(&self, edge_idx: EdgeIndex) -> Option<&Edge> {
        self.edges.get(edge_idx.index())
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Neighbors of `node_idx` together with the weight of the connecting
    /// edge. A self-loop yields `node_idx` itself.
    ///
    /// **Panics** if `node_idx` is not a vertex of the graph
    pub fn neighbors(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.opposite(node_idx), edge.weight)
        })
    }

    pub fn degree(&self, node_idx: NodeIndex) -> usize {
        self.adjacency
            .get(node_idx.index())
            .map_or(0, |edges| edges.len())
    }

    pub fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        // Scan the shorter adjacency list
        let (from, to) = if self.degree(a) <= self.degree(b) {
            (a, b)
        } else {
            (b, a)
        };
        self.adjacency
            .get(from.index())?
            .iter()
            .find(|edge_idx| self.edges[edge_idx.index()].connects(from, to))
            .copied()
    }

    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        self.find_edge(a, b)
            .map(|edge_idx| self.edges[edge_idx.index()].weight)
    }
}

fn invalid(reason: InvalidEdgeReason) -> Error {
    Error::InvalidEdge {
        record: None,
        reason,
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create an undirected edge between two vertices with a weight
///
/// edge!(0, 1, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
}
