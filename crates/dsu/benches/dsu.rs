use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use dsu::Dsu;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 16_384, 131_072, 1_048_576];

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16_384 {
        apply_small_runtime_config(group);
    } else if size <= 131_072 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_dsu(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("dsu/random_merge_then_same");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let pairs = (0..size)
            .map(|_| (rng.random_range(0..size), rng.random_range(0..size)))
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("dsu", size), |bencher| {
            bencher.iter(|| {
                let mut dsu = Dsu::new(size);
                let mut acc = 0_usize;
                for &(a, b) in &pairs {
                    acc ^= dsu.merge(black_box(a), black_box(b));
                }
                for &(a, b) in &pairs {
                    acc += dsu.same(b, a) as usize;
                }
                black_box((acc, dsu.group_count()));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dsu);
criterion_main!(benches);
