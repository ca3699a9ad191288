use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use linkedbst::LinkedBst;

use crate::Lfsr;

/// The order values are inserted into the tree.
#[derive(Debug, Clone, Copy)]
enum Order {
    /// Sample order, producing a roughly balanced tree.
    Random,
    /// Ascending order, producing a right-leaning chain.
    Sorted,
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        for order in [Order::Random, Order::Sorted] {
            bench_param(&mut g, n_values, order)
        }
    }
}

/// Measure the time needed to insert `n_values` values into an empty tree, in
/// the given `order`.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, order: Order)
where
    M: Measurement,
{
    let mut values = Lfsr::default().sample(n_values);
    if let Order::Sorted = order {
        values.sort_unstable();
    }

    let id = BenchmarkId::new(format!("{order:?}/n_values").to_lowercase(), n_values);

    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(id, |b| {
        b.iter_batched(
            || values.clone(),
            |values| values.into_iter().collect::<LinkedBst<_>>(),
            BatchSize::PerIteration,
        );
    });
}
