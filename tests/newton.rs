#![cfg(feature = "optim")]

use seidel::linalg::{LinalgError, SeidelSettings};
use seidel::optim::{finite_difference_jacobian, newton_system, NewtonSystemSettings, OptimError};
use seidel::{DynMatrix, DynVector};

const TOL: f64 = 1e-8;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// x^2 - y^2 = 1, y = 1; roots (±√2, 1)
fn hyperbola_line(v: &DynVector<f64>) -> DynVector<f64> {
    DynVector::from_slice(&[v[0] * v[0] - v[1] * v[1] - 1.0, v[1] - 1.0])
}

fn hyperbola_line_jacobian(v: &DynVector<f64>) -> DynMatrix<f64> {
    DynMatrix::from_rows(2, 2, &[2.0 * v[0], -2.0 * v[1], 0.0, 1.0])
}

// x^2 + y^2 = 4, y = 3x^2
fn circle_parabola(v: &DynVector<f64>) -> DynVector<f64> {
    DynVector::from_slice(&[v[0] * v[0] + v[1] * v[1] - 4.0, v[1] - 3.0 * v[0] * v[0]])
}

fn circle_parabola_jacobian(v: &DynVector<f64>) -> DynMatrix<f64> {
    DynMatrix::from_rows(2, 2, &[2.0 * v[0], 2.0 * v[1], -6.0 * v[0], 1.0])
}

// ── Built-in systems ─────────────────────────────────────────────────

#[test]
fn hyperbola_and_line() {
    let r = newton_system(
        hyperbola_line,
        hyperbola_line_jacobian,
        &DynVector::from_slice(&[2.0, 1.0]),
        &NewtonSystemSettings::default(),
    )
    .unwrap();
    assert_near(r.x[0], 2.0_f64.sqrt(), TOL, "x");
    assert_near(r.x[1], 1.0, TOL, "y");
}

#[test]
fn hyperbola_and_line_negative_branch() {
    let r = newton_system(
        hyperbola_line,
        hyperbola_line_jacobian,
        &DynVector::from_slice(&[-2.0, 3.0]),
        &NewtonSystemSettings::default(),
    )
    .unwrap();
    assert_near(r.x[0], -(2.0_f64.sqrt()), TOL, "x");
    assert_near(r.x[1], 1.0, TOL, "y");
}

#[test]
fn circle_and_parabola_rearranged() {
    let settings = NewtonSystemSettings {
        rearrange: true,
        ..NewtonSystemSettings::default()
    };
    let r = newton_system(
        circle_parabola,
        circle_parabola_jacobian,
        &DynVector::from_slice(&[1.0, 2.0]),
        &settings,
    )
    .unwrap();
    let t = (-1.0 + 145.0_f64.sqrt()) / 18.0;
    assert_near(r.x[0], t.sqrt(), TOL, "x");
    assert_near(r.x[1], 3.0 * t, TOL, "y");
    assert!(r.fx.norm_inf() < 1e-9);
}

#[test]
fn circle_and_parabola_as_given_fails() {
    let err = newton_system(
        circle_parabola,
        circle_parabola_jacobian,
        &DynVector::from_slice(&[1.0, 2.0]),
        &NewtonSystemSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        OptimError::Linear(LinalgError::ConvergenceLimitExceeded { .. })
    ));
}

// ── Settings ─────────────────────────────────────────────────────────

#[test]
fn f32_newton() {
    let r = newton_system(
        |v: &DynVector<f32>| DynVector::from_slice(&[v[0] * v[0] - v[1] * v[1] - 1.0, v[1] - 1.0]),
        |v: &DynVector<f32>| DynMatrix::from_rows(2, 2, &[2.0 * v[0], -2.0 * v[1], 0.0, 1.0]),
        &DynVector::from_slice(&[2.0_f32, 1.0]),
        &NewtonSystemSettings::<f32>::default(),
    )
    .unwrap();
    assert!((r.x[0] - 2.0_f32.sqrt()).abs() < 1e-4);
}

#[test]
fn inner_sweep_cap_propagates() {
    let settings = NewtonSystemSettings {
        inner: SeidelSettings {
            eps: 1e-12,
            max_iter: 1,
        },
        ..NewtonSystemSettings::default()
    };
    let err = newton_system(
        hyperbola_line,
        hyperbola_line_jacobian,
        &DynVector::from_slice(&[2.0, 3.0]),
        &settings,
    )
    .unwrap_err();
    assert_eq!(
        err,
        OptimError::Linear(LinalgError::ConvergenceLimitExceeded { iterations: 1 })
    );
}

#[test]
fn numeric_jacobian_matches_analytic_root() {
    let r = newton_system(
        hyperbola_line,
        |v: &DynVector<f64>| finite_difference_jacobian(hyperbola_line, v),
        &DynVector::from_slice(&[2.0, 1.0]),
        &NewtonSystemSettings {
            eps: 1e-8,
            ..NewtonSystemSettings::default()
        },
    )
    .unwrap();
    assert_near(r.x[0], 2.0_f64.sqrt(), 1e-7, "x");
    assert_near(r.x[1], 1.0, 1e-7, "y");
}
