use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use u_growth::prefix::PrefixAlgorithm;
use u_growth::random::{create_rng, random_i32_vec, uniform_unit_vec};
use u_growth::uniqueness::UniquenessAlgorithm;

fn bench_prefix_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_average");
    let mut rng = create_rng(42);
    for n in [100, 1_000, 4_000] {
        let data = uniform_unit_vec(n, &mut rng);
        for algorithm in PrefixAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &data, |b, data| {
                b.iter(|| algorithm.run(black_box(data)))
            });
        }
    }
    group.finish();
}

fn bench_uniqueness(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniqueness");
    let mut rng = create_rng(42);
    for n in [100, 1_000, 4_000] {
        let data = random_i32_vec(n, &mut rng);
        for algorithm in UniquenessAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &data, |b, data| {
                b.iter(|| algorithm.run(black_box(data.as_slice())))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_prefix_average, bench_uniqueness);
criterion_main!(benches);
