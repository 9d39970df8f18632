use algebraic::Addition;
use algebraic::Affine;
use algebraic::actions::RangeAddRangeSum;
use algebraic::actions::RangeAffineRangeSum;
use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_segment;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use lazy_segment_tree::LazySegmentTree;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_024, 16_384, 131_072];

#[derive(Clone, Copy, Debug)]
enum Query {
    Apply(usize, usize, i64, i64),
    Fold(usize, usize),
}

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 1_024 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn generate_queries<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<Query> {
    (0..q)
        .map(|_| {
            let (l, r) = random_segment(rng, n);
            if rng.random_bool(0.5) {
                Query::Apply(l, r, rng.random_range(-3..=3), rng.random_range(-1_000..=1_000))
            } else {
                Query::Fold(l, r)
            }
        })
        .collect()
}

fn bench_lazy_segment_tree(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("lazy_segment_tree/mixed");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let initial = random_values(&mut rng, size, -1_000..=1_000);
        let queries = generate_queries(&mut rng, size, size);

        group.bench_function(BenchmarkId::new("add_sum", size), |bencher| {
            bencher.iter(|| {
                let mut st = initial
                    .iter()
                    .copied()
                    .map(Addition)
                    .collect::<LazySegmentTree<RangeAddRangeSum<i64>>>();
                let mut acc = 0_i64;
                for &query in &queries {
                    match query {
                        Query::Apply(l, r, _, b) => st.apply(black_box(l)..r, Addition(b)),
                        Query::Fold(l, r) => acc ^= st.fold(black_box(l)..r).val(),
                    }
                }
                black_box(acc)
            })
        });

        group.bench_function(BenchmarkId::new("affine_sum", size), |bencher| {
            bencher.iter(|| {
                let mut st = initial
                    .iter()
                    .copied()
                    .map(Addition)
                    .collect::<LazySegmentTree<RangeAffineRangeSum<i64>>>();
                let mut acc = 0_i64;
                for &query in &queries {
                    match query {
                        Query::Apply(l, r, a, b) => st.apply(black_box(l)..r, Affine::new(a, b)),
                        Query::Fold(l, r) => acc ^= st.fold(black_box(l)..r).val(),
                    }
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lazy_segment_tree);
criterion_main!(benches);
