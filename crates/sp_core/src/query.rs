//! Answers a single start/end query against a graph document.
use graph_reader::GraphDocument;
use log::info;

use crate::builder::GraphBuilder;
use crate::constants::{DEFAULT_END_LABEL, DEFAULT_START_LABEL};
use crate::error::Result;
use crate::resolver::{self, IndexScheme};
use crate::search::{dijkstra::Dijkstra, reconstruct_path, shortest_path::ShortestPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub start: String,
    pub end: String,
    pub scheme: IndexScheme,
}

impl Query {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Query {
            start: start.into(),
            end: end.into(),
            scheme: IndexScheme::default(),
        }
    }

    pub fn index_scheme(mut self, scheme: IndexScheme) -> Self {
        self.scheme = scheme;
        self
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::new(DEFAULT_START_LABEL, DEFAULT_END_LABEL)
    }
}

/// Builds the graph of `doc`, resolves both labels and returns the shortest
/// path between them.
///
/// The node records declare the vertex range, so an edge referring to a
/// vertex without a node record is rejected.
pub fn run_query(doc: &GraphDocument, query: &Query) -> Result<ShortestPath> {
    info!(
        "BEGIN query from `{}` to `{}` ({:?})",
        query.start, query.end, query.scheme
    );

    let vertex_count = resolver::vertex_count(doc.get_nodes(), query.scheme)?;
    let g = GraphBuilder::with_vertex_count(vertex_count).build(doc.get_edges())?;
    let endpoints =
        resolver::resolve_endpoints(doc.get_nodes(), &query.start, &query.end, query.scheme)?;

    let mut dijkstra = Dijkstra::new(&g);
    let tree = dijkstra.run(endpoints.start)?;
    let sp = reconstruct_path(&tree, endpoints.end)?;

    info!(
        "FINISHED query: {} nodes, total distance {}",
        sp.nodes.len(),
        sp.weight
    );
    Ok(sp)
}
