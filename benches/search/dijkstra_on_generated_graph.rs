use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sp_core::{
    builder::GraphBuilder, graph::node_index, search::dijkstra::Dijkstra,
    util::test_graphs::random_document,
};

criterion_group!(benches, criterion_benchmark, build_graph);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_on_generated_graph");
    for size in [1_000usize, 10_000, 100_000].iter() {
        let mut rng = StdRng::seed_from_u64(1);
        let doc = random_document(&mut rng, *size, size * 4, 100.0);
        let g = GraphBuilder::with_vertex_count(*size)
            .build(&doc.edges)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                black_box(dijkstra.run(node_index(0)).unwrap());
            })
        });
    }
    group.finish();
}

fn build_graph(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let doc = random_document(&mut rng, 10_000, 40_000, 100.0);

    c.bench_with_input(
        BenchmarkId::new("build_graph", stringify!(random_10k)),
        &doc,
        |b, doc| {
            b.iter(|| {
                GraphBuilder::with_vertex_count(doc.nodes.len())
                    .build(&doc.edges)
                    .unwrap()
            })
        },
    );
}
