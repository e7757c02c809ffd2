use std::path::Path;

use rand::prelude::*;
use sp_core::prelude::*;
use sp_core::util::test_graphs::random_document;

// Measures the average query time on a random graph, or on the graph file
// given as argument.
// - Select random pairs of node labels.
// - Run the full query (build, resolve, search, backtrace) for each pair.
// - Report the average time and how many pairs were connected.
fn main() {
    const ITERATIONS: usize = 100;

    let mut rng = StdRng::seed_from_u64(42);

    let doc = if let Some(path) = std::env::args().skip(1).find(|p| p.ends_with(".json")) {
        GraphDocument::from_json_file(Path::new(&path)).expect("Invalid path")
    } else {
        random_document(&mut rng, 10_000, 40_000, 100.0)
    };

    let labels: Vec<String> = doc
        .get_nodes()
        .iter()
        .filter_map(|node| node["label"].as_str().map(str::to_string))
        .collect();
    assert!(!labels.is_empty(), "Graph has no labelled nodes");

    let mut time_total = 0;
    let mut connected = 0;
    for _ in 0..ITERATIONS {
        let start = labels.choose(&mut rng).unwrap();
        let end = labels.choose(&mut rng).unwrap();

        let now = std::time::Instant::now();
        if run_query(&doc, &Query::new(start.as_str(), end.as_str())).is_ok() {
            connected += 1;
        }
        time_total += now.elapsed().as_micros();
    }

    println!("Connected pairs: {}/{}", connected, ITERATIONS);
    println!("Avg. query time: {} μs", time_total / ITERATIONS as u128);
}
