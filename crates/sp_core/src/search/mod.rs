use crate::error::{Error, Result};
use crate::graph::NodeIndex;

use self::shortest_path::{ShortestPath, ShortestPathTree};

pub mod dijkstra;
pub mod shortest_path;

/// Backtraces the predecessor links of `tree` from `target` to the source.
///
/// The collected nodes run target to source and are reversed before they are
/// returned. A chain that does not end at the source within `vertex_count`
/// steps is reported as [`Error::CorruptPredecessorChain`].
pub fn reconstruct_path(tree: &ShortestPathTree, target: NodeIndex) -> Result<ShortestPath> {
    let num_nodes = tree.vertex_count();
    if target.index() >= num_nodes {
        return Err(Error::VertexOutOfRange {
            vertex: target.index(),
            vertex_count: num_nodes,
        });
    }

    let weight = tree.distances[target.index()];
    let no_path = Error::NoPathExists {
        from: tree.source.index(),
        to: target.index(),
    };
    if weight.is_infinite() {
        return Err(no_path);
    }
    if target != tree.source && tree.predecessors[target.index()].is_none() {
        return Err(no_path);
    }

    let mut path = vec![target];
    let mut current = target;
    while current != tree.source {
        current = match tree.predecessors[current.index()] {
            Some(prev_node) if prev_node.index() < num_nodes => prev_node,
            _ => {
                return Err(Error::CorruptPredecessorChain {
                    vertex: current.index(),
                })
            }
        };
        path.push(current);

        // A simple path visits every vertex at most once
        if path.len() > num_nodes {
            return Err(Error::CorruptPredecessorChain {
                vertex: current.index(),
            });
        }
    }

    path.reverse();
    Ok(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Result<ShortestPath>,
) {
    let expected = expected_path.into_iter().map(NodeIndex::new).collect();
    assert_eq!(Ok(ShortestPath::new(expected, expected_weight)), path);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<ShortestPath>) {
    assert!(
        matches!(path, Err(Error::NoPathExists { .. })),
        "expected no path, got {:?}",
        path
    );
}
