use criterion::{criterion_group, criterion_main, Criterion};
use graph_reader::GraphDocument;
use rand::{rngs::StdRng, SeedableRng};
use sp_core::util::test_graphs::random_document;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let path = std::env::temp_dir().join("parse_json_bench.json");
    random_document(&mut rng, 10_000, 40_000, 100.0)
        .write_json(&path)
        .unwrap();

    c.bench_function("parse_json_10k", |b| {
        b.iter(|| GraphDocument::from_json_file(&path).unwrap())
    });

    let _ = std::fs::remove_file(&path);
}
