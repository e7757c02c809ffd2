//! Error kinds surfaced by graph construction and path queries.
//!
//! Every error is terminal for the current query. The core never prints or
//! exits, callers decide how to report these.
use std::fmt;

use thiserror::Error;

use crate::constants::Weight;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge record lacks a field or the field has the wrong type.
    #[error("edge record {index}: field `{field}` is missing or malformed")]
    MalformedEdgeRecord { index: usize, field: &'static str },

    /// A node record lacks a field or the field has the wrong type.
    #[error("node record {index}: field `{field}` is missing or malformed")]
    MalformedNodeRecord { index: usize, field: &'static str },

    /// The edge was well formed but cannot be part of the graph.
    #[error("invalid edge{}: {reason}", record_suffix(.record))]
    InvalidEdge {
        record: Option<usize>,
        reason: InvalidEdgeReason,
    },

    /// One or both query labels do not occur in the node records.
    #[error("{missing} not found (start `{start}`, end `{end}`)")]
    VertexNotFound {
        missing: MissingEndpoint,
        start: String,
        end: String,
    },

    #[error("vertex {vertex} is out of range, graph has {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("no path exists from vertex {from} to vertex {to}")]
    NoPathExists { from: usize, to: usize },

    /// The predecessor links do not lead back to the source. Indicates a bug
    /// in the search, never bad input.
    #[error("predecessor chain is corrupt at vertex {vertex}")]
    CorruptPredecessorChain { vertex: usize },
}

impl Error {
    /// Attaches the position of the offending edge record.
    pub(crate) fn in_record(self, index: usize) -> Self {
        match self {
            Error::InvalidEdge { reason, .. } => Error::InvalidEdge {
                record: Some(index),
                reason,
            },
            other => other,
        }
    }
}

fn record_suffix(record: &Option<usize>) -> String {
    record
        .map(|index| format!(" in record {}", index))
        .unwrap_or_default()
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidEdgeReason {
    #[error("cost {0} is negative")]
    NegativeCost(Weight),
    #[error("cost {0} is not a finite number")]
    NonFiniteCost(Weight),
    #[error("cost {0} exceeds the largest supported cost")]
    CostTooLarge(Weight),
    #[error("source vertex {vertex} is not below {limit}")]
    SourceOutOfRange { vertex: u64, limit: u64 },
    #[error("target vertex {vertex} is not below {limit}")]
    TargetOutOfRange { vertex: u64, limit: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEndpoint {
    Start,
    End,
    Both,
}

impl fmt::Display for MissingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingEndpoint::Start => write!(f, "start vertex"),
            MissingEndpoint::End => write!(f, "end vertex"),
            MissingEndpoint::Both => write!(f, "start and end vertices"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let err = Error::MalformedEdgeRecord {
            index: 3,
            field: "cost",
        };
        assert_eq!(
            err.to_string(),
            "edge record 3: field `cost` is missing or malformed"
        );

        let err = Error::InvalidEdge {
            record: None,
            reason: InvalidEdgeReason::NegativeCost(-1.0),
        };
        assert_eq!(err.to_string(), "invalid edge: cost -1 is negative");
        assert_eq!(
            err.in_record(7).to_string(),
            "invalid edge in record 7: cost -1 is negative"
        );

        let err = Error::VertexNotFound {
            missing: MissingEndpoint::End,
            start: "Erde".into(),
            end: "Mond".into(),
        };
        assert_eq!(
            err.to_string(),
            "end vertex not found (start `Erde`, end `Mond`)"
        );
    }

    #[test]
    fn in_record_keeps_other_kinds() {
        let err = Error::NoPathExists { from: 0, to: 1 };
        assert_eq!(err.clone().in_record(5), err);
    }
}
