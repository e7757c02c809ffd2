use log::info;
use sp_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = cli::parse();

    let doc = GraphDocument::from_json_file(&cfg.graph_file)?;

    let now = std::time::Instant::now();
    let shortest_path = cfg.run_query(&doc)?;
    info!("Query took {:?}", now.elapsed());

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&shortest_path)?);
    } else {
        for node in &shortest_path.nodes {
            println!("{}", node);
        }
        println!("totalDistance: {}", shortest_path.weight);
    }

    Ok(())
}
