use std::path::Path;

use graph_reader::*;

fn main() -> anyhow::Result<()> {
    let now = std::time::Instant::now();
    // Read path to file from command line
    let json_path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("No path to JSON file given"))?;

    let doc = GraphDocument::from_json_file(Path::new(&json_path))?;

    let elapsed = now.elapsed();

    println!(
        "Finished reading JSON file in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "Document has {} node records and {} edge records",
        doc.get_nodes().len(),
        doc.get_edges().len()
    );
    Ok(())
}
