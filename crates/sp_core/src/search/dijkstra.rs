use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::search::shortest_path::{ShortestPath, ShortestPathTree};
use crate::statistics::SearchStats;
use log::{debug, info};

#[derive(Debug)]
pub struct Candidate<Idx = DefaultIdx> {
    pub node_idx: NodeIndex<Idx>,
    pub weight: Weight,
}

impl Candidate {
    pub fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

// Reversed so that `BinaryHeap` pops the smallest weight first
impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Single source Dijkstra over a [`Graph`].
///
/// Edge weights must be non-negative, which [`Graph::add_edge`] guarantees.
/// Every run allocates its own distance and predecessor tables, so one graph
/// can serve any number of searches.
pub struct Dijkstra<'a, Idx = DefaultIdx> {
    pub stats: SearchStats,
    g: &'a Graph<Idx>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the distance from `source` to every vertex.
    pub fn run(&mut self, source: NodeIndex) -> Result<ShortestPathTree> {
        let num_nodes = self.g.vertex_count();
        if !self.g.contains(source) {
            return Err(Error::VertexOutOfRange {
                vertex: source.index(),
                vertex_count: num_nodes,
            });
        }

        self.stats.init();

        let mut distances = vec![f64::INFINITY; num_nodes];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        let mut settled = vec![false; num_nodes];

        distances[source.index()] = 0.0;

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            // Stale entry, the node was settled through a shorter path
            if settled[node_idx.index()] {
                continue;
            }
            settled[node_idx.index()] = true;
            self.stats.nodes_settled += 1;

            for (neighbor, edge_weight) in self.g.neighbors(node_idx) {
                let new_distance = weight + edge_weight;
                if new_distance < distances[neighbor.index()] {
                    distances[neighbor.index()] = new_distance;
                    predecessors[neighbor.index()] = Some(node_idx);
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        info!(
            "Search from {} finished: {:?}/{} of {} nodes settled",
            source,
            self.stats.duration.unwrap_or_default(),
            self.stats.nodes_settled,
            num_nodes
        );

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
        })
    }

    /// Shortest path from `source` to `target`.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath> {
        if !self.g.contains(target) {
            return Err(Error::VertexOutOfRange {
                vertex: target.index(),
                vertex_count: self.g.vertex_count(),
            });
        }

        let tree = self.run(source)?;
        let sp = super::reconstruct_path(&tree, target);
        match &sp {
            Ok(sp) => debug!("Path found: {:?}", sp),
            Err(err) => debug!("No path found: {}", err),
        }

        sp
    }
}
