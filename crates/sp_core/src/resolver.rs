//! Looks up the start and end vertex of a query by their labels.
use log::debug;
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::builder::as_vertex;
use crate::error::{Error, MissingEndpoint, Result};
use crate::graph::NodeIndex;

/// How a node record maps to a vertex of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexScheme {
    /// The position of the record in the node list is its vertex index.
    #[default]
    Positional,
    /// Every record carries its vertex index in an integer `id` field. The ids
    /// must be distinct and below the number of node records.
    ExplicitId,
}

impl IndexScheme {
    fn vertex_of(
        self,
        position: usize,
        node: &Value,
        num_nodes: usize,
        seen_ids: &mut FxHashSet<u64>,
    ) -> Result<NodeIndex> {
        match self {
            IndexScheme::Positional => Ok(NodeIndex::new(position)),
            IndexScheme::ExplicitId => {
                let malformed = Error::MalformedNodeRecord {
                    index: position,
                    field: "id",
                };
                let id = node
                    .get("id")
                    .and_then(as_vertex)
                    .filter(|&id| id < num_nodes as u64)
                    .ok_or(malformed.clone())?;
                // Duplicate ids would map two labels to the same vertex
                if !seen_ids.insert(id) {
                    return Err(malformed);
                }
                NodeIndex::try_from_raw(id).ok_or(malformed)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start: NodeIndex,
    pub end: NodeIndex,
}

/// Number of vertices declared by `nodes`, one per record.
///
/// Validates the `id` of every record under [`IndexScheme::ExplicitId`].
pub fn vertex_count(nodes: &[Value], scheme: IndexScheme) -> Result<usize> {
    if scheme == IndexScheme::ExplicitId {
        let mut seen_ids = FxHashSet::default();
        for (position, node) in nodes.iter().enumerate() {
            scheme.vertex_of(position, node, nodes.len(), &mut seen_ids)?;
        }
    }
    Ok(nodes.len())
}

/// Scans `nodes` once, in order, for the first record labelled `start` and
/// the first labelled `end`. Stops as soon as both are found.
///
/// Equal labels resolve both endpoints to the same vertex.
pub fn resolve_endpoints(
    nodes: &[Value],
    start: &str,
    end: &str,
    scheme: IndexScheme,
) -> Result<Endpoints> {
    let mut start_idx = None;
    let mut end_idx = None;
    let mut seen_ids = FxHashSet::default();

    for (position, node) in nodes.iter().enumerate() {
        let label = node
            .get("label")
            .and_then(Value::as_str)
            .ok_or(Error::MalformedNodeRecord {
                index: position,
                field: "label",
            })?;
        let vertex = scheme.vertex_of(position, node, nodes.len(), &mut seen_ids)?;

        if start_idx.is_none() && label == start {
            start_idx = Some(vertex);
        }
        if end_idx.is_none() && label == end {
            end_idx = Some(vertex);
        }

        if start_idx.is_some() && end_idx.is_some() {
            debug!("Both labels found after {} node records", position + 1);
            break;
        }
    }

    let missing = match (start_idx, end_idx) {
        (Some(start), Some(end)) => return Ok(Endpoints { start, end }),
        (None, Some(_)) => MissingEndpoint::Start,
        (Some(_), None) => MissingEndpoint::End,
        (None, None) => MissingEndpoint::Both,
    };

    Err(Error::VertexNotFound {
        missing,
        start: start.to_string(),
        end: end.to_string(),
    })
}
