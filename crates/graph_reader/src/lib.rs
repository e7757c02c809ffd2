//! Reads graph description files into loosely typed node and edge records.
//!
//! A graph file is a JSON object with two arrays:
//!
//! ```json
//! {
//!   "nodes": [{ "label": "Erde" }, { "label": "b3-r7-r4nd7" }],
//!   "edges": [{ "source": 0, "target": 1, "cost": 1.5 }]
//! }
//! ```
//!
//! The records are kept as [`serde_json::Value`] on purpose. Field validation
//! happens when the graph is built, so that a malformed record can be reported
//! together with its position in the file.
use anyhow::{anyhow, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Raw content of a graph file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Value>,
    pub edges: Vec<Value>,
}

impl GraphDocument {
    pub fn new(nodes: Vec<Value>, edges: Vec<Value>) -> Self {
        GraphDocument { nodes, edges }
    }

    pub fn get_nodes(&self) -> &[Value] {
        &self.nodes
    }

    pub fn get_edges(&self) -> &[Value] {
        &self.edges
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<GraphDocument> {
        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", path.display());

        let file =
            File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        let root: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        let doc = Self::from_value(root)?;

        info!("FINISHED parsing. Took {:?}", now.elapsed());
        info!(
            "Document has {} nodes and {} edges",
            doc.nodes.len(),
            doc.edges.len()
        );
        Ok(doc)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<GraphDocument> {
        let root: Value = serde_json::from_str(json).context("Input is not valid JSON")?;
        Self::from_value(root)
    }

    /// Extracts the `nodes` and `edges` arrays from an already parsed document.
    pub fn from_value(mut root: Value) -> anyhow::Result<GraphDocument> {
        let nodes = take_array(&mut root, "nodes")?;
        let edges = take_array(&mut root, "edges")?;
        debug!("Extracted {} node and {} edge records", nodes.len(), edges.len());
        Ok(GraphDocument { nodes, edges })
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file =
            File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
        debug!("BEGIN writing {}", path.display());
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!("FINISHED writing {}", path.display());
        Ok(())
    }
}

fn take_array(root: &mut Value, key: &str) -> anyhow::Result<Vec<Value>> {
    let object = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("Graph document must be a JSON object"))?;
    match object.remove(key) {
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(anyhow!("Member `{}` must be an array", key)),
        None => Err(anyhow!("Graph document has no `{}` member", key)),
    }
}
