use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use linkedbst::LinkedBst;

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let t = Lfsr::default()
        .sample(n_values)
        .into_iter()
        .collect::<LinkedBst<_>>();

    bench_inorder(n_values, g, &t);
    bench_preorder(n_values, g, &t);
    bench_postorder(n_values, g, &t);
    bench_levelorder(n_values, g, &t);
    bench_range_find(n_values, g, &t);
}

macro_rules! iter_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &LinkedBst<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for v in t.$name() {
                            black_box(v);
                        }
                    })
                });
            }
        }
    }
}

iter_bench!(inorder);
iter_bench!(preorder);
iter_bench!(postorder);
iter_bench!(levelorder);

fn bench_range_find<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &LinkedBst<u16>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "range_find",
    };

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.range_find(&4_200, &10_000) {
                black_box(v);
            }
        })
    });
}
