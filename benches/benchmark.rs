//! Benchmark comparing the three square root methods on the same radicands.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use square_root_solver::numerical_methods::common::{solve, SolverParams, SquareRootMethod};

fn solve_all_radicands(method: SquareRootMethod, params: &SolverParams) {
    for i in 0..1000 {
        let x = 0.37 * (i as f64);
        black_box(solve(method, black_box(x), params).ok());
    }
}

fn benchmark(c: &mut Criterion) {
    let params = SolverParams::new(1e-9, 1000);
    for method in SquareRootMethod::ALL.iter() {
        c.bench_function(&format!("sqrt_{}", method), |b| {
            b.iter(|| solve_all_radicands(*method, &params));
        });
    }
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
