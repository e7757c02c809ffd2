use graph_reader::GraphDocument;
use rand::Rng;
use serde_json::json;

/// Nodes `A`, `B`, `C` with edges A-B (4), B-C (1) and A-C (10)
pub fn triangle_document() -> GraphDocument {
    GraphDocument::new(
        vec![
            json!({ "label": "A" }),
            json!({ "label": "B" }),
            json!({ "label": "C" }),
        ],
        vec![
            json!({ "source": 0, "target": 1, "cost": 4 }),
            json!({ "source": 1, "target": 2, "cost": 1 }),
            json!({ "source": 0, "target": 2, "cost": 10 }),
        ],
    )
}

/// Random graph document with `num_nodes` labelled nodes (`n0`, `n1`, ...)
/// and `num_edges` edges with costs in `[0, max_cost)`.
pub fn random_document<R: Rng>(
    rng: &mut R,
    num_nodes: usize,
    num_edges: usize,
    max_cost: f64,
) -> GraphDocument {
    let nodes = (0..num_nodes)
        .map(|i| json!({ "label": format!("n{}", i) }))
        .collect();

    let edges = if num_nodes == 0 {
        Vec::new()
    } else {
        (0..num_edges)
            .map(|_| {
                json!({
                    "source": rng.gen_range(0..num_nodes),
                    "target": rng.gen_range(0..num_nodes),
                    "cost": rng.gen_range(0.0..max_cost),
                })
            })
            .collect()
    };

    GraphDocument::new(nodes, edges)
}
