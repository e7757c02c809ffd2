//! Crate to find the cheapest path between two labelled vertices of an
//! undirected, weighted graph.
//!
//! # Basic usage
//! ```
//! use sp_core::prelude::*;
//!
//! let doc = GraphDocument::from_json_str(
//!     r#"{
//!         "nodes": [{ "label": "A" }, { "label": "B" }, { "label": "C" }],
//!         "edges": [
//!             { "source": 0, "target": 1, "cost": 4 },
//!             { "source": 1, "target": 2, "cost": 1 },
//!             { "source": 0, "target": 2, "cost": 10 }
//!         ]
//!     }"#,
//! )
//! .expect("Failed to parse graph document");
//!
//! let shortest_path = run_query(&doc, &Query::new("A", "C")).expect("Failed to find path");
//!
//! assert_eq!(shortest_path.nodes, vec![node_index(0), node_index(1), node_index(2)]);
//! assert_eq!(shortest_path.weight, 5.0);
//!```
pub mod builder;
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod query;
pub mod resolver;
pub mod search;
pub mod statistics;
pub mod util;

pub use error::{Error, Result};
