//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::builder::GraphBuilder;
pub use crate::error::{Error, Result};
pub use crate::query::{run_query, Query};
pub use crate::resolver::{resolve_endpoints, IndexScheme};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::reconstruct_path;
pub use crate::search::shortest_path::{ShortestPath, ShortestPathTree};

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::cli;

pub use graph_reader::GraphDocument;
