//! Builds a [`Graph`] from loosely typed edge records.
//!
//! Each record must be a JSON object with a `source` and `target` vertex index
//! and a `cost`. Numbers may also be given as numeric strings. The build is
//! all or nothing: the first bad record aborts it.
use log::{debug, info};
use serde_json::{Map, Value};

use crate::constants::Weight;
use crate::error::{Error, InvalidEdgeReason, Result};
use crate::graph::{Edge, Graph, NodeIndex};

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    vertex_count: Option<usize>,
}

impl GraphBuilder {
    /// Builder whose graph grows to the largest vertex index it sees
    pub fn new() -> Self {
        Self { vertex_count: None }
    }

    /// Builder which rejects edges touching vertices `>= vertex_count`
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            vertex_count: Some(vertex_count),
        }
    }

    pub fn build(&self, records: &[Value]) -> Result<Graph> {
        let now = std::time::Instant::now();
        debug!("BEGIN building graph from {} edge records", records.len());

        let mut g = match self.vertex_count {
            Some(n) => Graph::with_vertex_count(n),
            None => Graph::with_capacity(0, records.len()),
        };

        for (index, record) in records.iter().enumerate() {
            let edge = parse_edge(index, record)?;
            g.add_edge(edge).map_err(|err| err.in_record(index))?;
        }

        info!(
            "Built graph with {} vertices and {} edges in {:?}",
            g.vertex_count(),
            g.edge_count(),
            now.elapsed()
        );
        Ok(g)
    }
}

/// Converts a single edge record.
pub fn parse_edge(index: usize, record: &Value) -> Result<Edge> {
    let fields = record.as_object().ok_or(Error::MalformedEdgeRecord {
        index,
        field: "<record>",
    })?;

    let source = vertex_field(fields, index, "source")?;
    let target = vertex_field(fields, index, "target")?;
    let cost = fields
        .get("cost")
        .and_then(as_weight)
        .ok_or(Error::MalformedEdgeRecord {
            index,
            field: "cost",
        })?;

    Ok(Edge::new(source, target, cost))
}

fn vertex_field(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<NodeIndex> {
    let raw = fields
        .get(field)
        .and_then(as_vertex)
        .ok_or(Error::MalformedEdgeRecord { index, field })?;

    NodeIndex::try_from_raw(raw).ok_or_else(|| {
        let limit = NodeIndex::end().index() as u64;
        let reason = if field == "source" {
            InvalidEdgeReason::SourceOutOfRange { vertex: raw, limit }
        } else {
            InvalidEdgeReason::TargetOutOfRange { vertex: raw, limit }
        };
        Error::InvalidEdge {
            record: Some(index),
            reason,
        }
    })
}

pub(crate) fn as_vertex(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_weight(value: &Value) -> Option<Weight> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;
    use serde_json::json;

    #[test]
    fn build_from_records() {
        let records = vec![
            json!({ "source": 0, "target": 1, "cost": 4 }),
            json!({ "source": 1, "target": 2, "cost": 1.0 }),
            json!({ "source": 0, "target": 2, "cost": 10.5 }),
        ];
        let g = GraphBuilder::new().build(&records).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight(node_index(0), node_index(1)), Some(4.0));
        assert_eq!(g.edge_weight(node_index(2), node_index(0)), Some(10.5));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let records = vec![json!({ "source": "0", "target": " 1", "cost": "2.5" })];
        let g = GraphBuilder::new().build(&records).unwrap();

        assert_eq!(g.edge_weight(node_index(0), node_index(1)), Some(2.5));
    }

    #[test]
    fn missing_cost() {
        let records = vec![
            json!({ "source": 0, "target": 1, "cost": 1 }),
            json!({ "source": 1, "target": 2 }),
        ];

        assert_eq!(
            GraphBuilder::new().build(&records).unwrap_err(),
            Error::MalformedEdgeRecord {
                index: 1,
                field: "cost"
            }
        );
    }

    #[test]
    fn malformed_fields() {
        let cases = [
            (json!({ "target": 1, "cost": 1 }), "source"),
            (json!({ "source": -1, "target": 1, "cost": 1 }), "source"),
            (json!({ "source": 0, "target": 1.5, "cost": 1 }), "target"),
            (json!({ "source": 0, "target": "x", "cost": 1 }), "target"),
            (json!({ "source": 0, "target": 1, "cost": null }), "cost"),
            (json!({ "source": 0, "target": 1, "cost": "far" }), "cost"),
            (json!([0, 1, 1.0]), "<record>"),
        ];

        for (record, field) in cases {
            assert_eq!(
                GraphBuilder::new().build(&[record]).unwrap_err(),
                Error::MalformedEdgeRecord { index: 0, field }
            );
        }
    }

    #[test]
    fn invalid_edges_name_their_record() {
        let records = vec![
            json!({ "source": 0, "target": 1, "cost": 1 }),
            json!({ "source": 1, "target": 2, "cost": 1 }),
            json!({ "source": 2, "target": 0, "cost": -3 }),
        ];
        assert_eq!(
            GraphBuilder::new().build(&records).unwrap_err(),
            Error::InvalidEdge {
                record: Some(2),
                reason: InvalidEdgeReason::NegativeCost(-3.0)
            }
        );

        let records = vec![json!({ "source": 0, "target": 3, "cost": 1 })];
        assert_eq!(
            GraphBuilder::with_vertex_count(3).build(&records).unwrap_err(),
            Error::InvalidEdge {
                record: Some(0),
                reason: InvalidEdgeReason::TargetOutOfRange {
                    vertex: 3,
                    limit: 3
                }
            }
        );

        let records = vec![json!({ "source": u64::MAX, "target": 0, "cost": 1 })];
        assert!(matches!(
            GraphBuilder::new().build(&records).unwrap_err(),
            Error::InvalidEdge {
                record: Some(0),
                reason: InvalidEdgeReason::SourceOutOfRange { .. }
            }
        ));
    }

    #[test]
    fn declared_vertex_count_is_kept() {
        let records = vec![json!({ "source": 0, "target": 1, "cost": 1 })];
        let g = GraphBuilder::with_vertex_count(5).build(&records).unwrap();

        assert_eq!(g.vertex_count(), 5);
    }

    #[test]
    fn empty_input() {
        let g = GraphBuilder::new().build(&[]).unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
