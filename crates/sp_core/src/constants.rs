/// Edge weight type
pub type Weight = f64;
/// Label of the start vertex if none is given on the command line
pub const DEFAULT_START_LABEL: &str = "Erde";
/// Label of the end vertex if none is given on the command line
pub const DEFAULT_END_LABEL: &str = "b3-r7-r4nd7";
/// File read by the CLI if no path is given
pub const DEFAULT_GRAPH_FILE: &str = "generatedGraph.json";
/// Upper bound on the vertex range of a graph that grows with its edges
pub const MAX_VERTEX_COUNT: usize = 1 << 26;
/// Largest accepted edge cost. A simple path has fewer than `2^32` edges, so
/// path costs built from such edges stay finite.
pub const MAX_EDGE_COST: Weight = f64::MAX / 4_294_967_296.0;
