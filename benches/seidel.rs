use criterion::{criterion_group, criterion_main, Criterion};
use seidel::linalg::{rearrange, rearrange_and_solve, solve};
use seidel::{AugmentedMatrix, DynMatrix};

// ---------------------------------------------------------------------------
// Helpers: strictly diagonally dominant systems
// ---------------------------------------------------------------------------

fn coeff(n: usize, i: usize, j: usize) -> f64 {
    if i == j {
        n as f64 + 10.0
    } else {
        1.0 / (1.0 + i.abs_diff(j) as f64)
    }
}

fn rhs(i: usize) -> f64 {
    (i + 1) as f64
}

fn seidel_system(n: usize) -> AugmentedMatrix<f64> {
    let m = DynMatrix::from_fn(n, n + 1, |i, j| if j == n { rhs(i) } else { coeff(n, i, j) });
    AugmentedMatrix::new(m).unwrap()
}

/// Same system with the row order reversed, so the rearranger has work to do.
fn seidel_system_reversed(n: usize) -> AugmentedMatrix<f64> {
    let order: Vec<usize> = (0..n).rev().collect();
    seidel_system(n).select_rows(&order)
}

fn nalgebra_system(n: usize) -> (nalgebra::DMatrix<f64>, nalgebra::DVector<f64>) {
    (
        nalgebra::DMatrix::from_fn(n, n, |i, j| coeff(n, i, j)),
        nalgebra::DVector::from_fn(n, |i, _| rhs(i)),
    )
}

// ---------------------------------------------------------------------------
// Solve: Gauss-Seidel vs dense LU
// ---------------------------------------------------------------------------

fn solve_dyn(c: &mut Criterion, n: usize) {
    let mut g = c.benchmark_group(format!("solve_dyn_{n}x{n}"));

    g.bench_function("seidel", |b| {
        let m = seidel_system(n);
        b.iter(|| solve(std::hint::black_box(&m), 1e-10).unwrap())
    });

    g.bench_function("nalgebra_lu", |b| {
        let (a, rhs) = nalgebra_system(n);
        b.iter(|| std::hint::black_box(&a).clone().lu().solve(std::hint::black_box(&rhs)).unwrap())
    });

    g.finish();
}

fn solve_dyn_10(c: &mut Criterion) {
    solve_dyn(c, 10);
}

fn solve_dyn_50(c: &mut Criterion) {
    solve_dyn(c, 50);
}

fn solve_dyn_200(c: &mut Criterion) {
    solve_dyn(c, 200);
}

// ---------------------------------------------------------------------------
// Rearrangement
// ---------------------------------------------------------------------------

fn rearrange_dyn_200(c: &mut Criterion) {
    let mut g = c.benchmark_group("rearrange_dyn_200x200");

    g.bench_function("rearrange", |b| {
        let m = seidel_system_reversed(200);
        b.iter(|| rearrange(std::hint::black_box(&m)).unwrap())
    });

    g.bench_function("rearrange_and_solve", |b| {
        let m = seidel_system_reversed(200);
        b.iter(|| rearrange_and_solve(std::hint::black_box(&m), 1e-10).unwrap())
    });

    g.finish();
}

criterion_group!(
    benches,
    solve_dyn_10,
    solve_dyn_50,
    solve_dyn_200,
    rearrange_dyn_200,
);
criterion_main!(benches);
