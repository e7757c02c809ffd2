use std::{ffi::OsString, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use graph_reader::GraphDocument;

use crate::{
    constants::{DEFAULT_END_LABEL, DEFAULT_GRAPH_FILE, DEFAULT_START_LABEL},
    query::{run_query, Query},
    resolver::IndexScheme,
    search::shortest_path::ShortestPath,
};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the .json graph file
    #[arg(default_value = DEFAULT_GRAPH_FILE)]
    graph_file: String,

    /// Label of the start vertex
    #[arg(short, long, value_name = "label", default_value = DEFAULT_START_LABEL)]
    start: String,

    /// Label of the end vertex
    #[arg(short, long, value_name = "label", default_value = DEFAULT_END_LABEL)]
    end: String,

    /// Take vertex indices from the `id` field of the node records instead of their position
    #[arg(long)]
    explicit_ids: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub graph_file: PathBuf,
    pub query: Query,
    pub json: bool,
}

impl Cfg {
    /// Runs the configured query on `doc`. The core error stays the root
    /// cause of the returned report.
    pub fn run_query(&self, doc: &GraphDocument) -> anyhow::Result<ShortestPath> {
        run_query(doc, &self.query).with_context(|| {
            format!(
                "Query from `{}` to `{}` on {} failed",
                self.query.start,
                self.query.end,
                self.graph_file.display()
            )
        })
    }
}

pub fn parse() -> Cfg {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Cfg
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let scheme = if cli.explicit_ids {
        IndexScheme::ExplicitId
    } else {
        IndexScheme::Positional
    };

    Cfg {
        graph_file: PathBuf::from(cli.graph_file),
        query: Query::new(cli.start, cli.end).index_scheme(scheme),
        json: cli.json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::util::test_graphs::triangle_document;
    use serde_json::json;

    #[test]
    fn defaults() {
        let cfg = parse_from(["shortest_path"]);

        assert_eq!(cfg.graph_file, PathBuf::from("generatedGraph.json"));
        assert_eq!(cfg.query, Query::default());
        assert!(!cfg.json);
    }

    #[test]
    fn all_options() {
        let cfg = parse_from([
            "shortest_path",
            "galaxy.json",
            "--start",
            "A",
            "-e",
            "C",
            "--explicit-ids",
            "--json",
        ]);

        assert_eq!(cfg.graph_file, PathBuf::from("galaxy.json"));
        assert_eq!(
            cfg.query,
            Query::new("A", "C").index_scheme(IndexScheme::ExplicitId)
        );
        assert!(cfg.json);
    }

    #[test]
    fn query_errors_keep_their_kind() {
        let cfg = parse_from(["shortest_path", "triangle.json", "-s", "A", "-e", "C"]);
        let mut doc = triangle_document();
        doc.edges.push(json!({ "source": 0, "target": 2, "cost": "far" }));

        let err = cfg.run_query(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Query from `A` to `C` on triangle.json failed"
        );
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::MalformedEdgeRecord {
                index: 3,
                field: "cost"
            })
        );

        let sp = cfg.run_query(&triangle_document()).unwrap();
        assert_eq!(sp.weight, 5.0);
    }
}
