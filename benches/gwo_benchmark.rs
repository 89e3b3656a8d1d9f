use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use greywolf::{BatchFn, Bounds, GWOSolver, SimpleProblem, SolverConfig};
use ndarray::{ArrayView1, ArrayView2, Axis};

fn rastrigin(x: ArrayView1<'_, f64>) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|&v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
            .sum::<f64>()
}

/// Benchmark a full run against population size, point-wise objective
fn bench_population_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("gwo_population_size");
    let problem = SimpleProblem::new(rastrigin);

    for size in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let bounds = Bounds::uniform(10, -5.12, 5.12).unwrap();
                let config = SolverConfig::new(size, 100).with_seed(1);
                let mut solver = GWOSolver::new(config, bounds).unwrap();
                criterion::black_box(solver.solve(&problem).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark a full run against dimension count, vectorized batch objective
fn bench_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("gwo_dimension");
    let problem = BatchFn::new(|m: ArrayView2<'_, f64>| m.map_axis(Axis(1), |row| row.dot(&row)));

    for dim in [2, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(dim), dim, |b, &dim| {
            b.iter(|| {
                let bounds = Bounds::uniform(dim, -10.0, 10.0).unwrap();
                let config = SolverConfig::new(50, 100).with_seed(1);
                let mut solver = GWOSolver::new(config, bounds).unwrap();
                criterion::black_box(solver.solve(&problem).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_population_size, bench_dimension);
criterion_main!(benches);
