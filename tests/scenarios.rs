use seidel::linalg::{
    is_diagonally_dominant, rearrange, rearrange_and_solve, rearrange_with_assignment, solve,
    solve_with, LinalgError, SeidelSettings, ITERATION_LIMIT,
};
use seidel::{AugmentedMatrix, DynVector};

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

fn system(rows: &[&[f64]]) -> AugmentedMatrix<f64> {
    let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    AugmentedMatrix::from_rows(&rows).unwrap()
}

// ── Worked scenarios ─────────────────────────────────────────────────

#[test]
fn scenario_a_already_dominant() {
    let m = system(&[&[4.0, 1.0, 1.0, 6.0], &[1.0, 3.0, 1.0, 5.0], &[1.0, 1.0, 5.0, 7.0]]);
    assert!(is_diagonally_dominant(&m));
    assert_eq!(rearrange(&m).unwrap(), m);

    let sol = solve(&m, 1e-4).unwrap();
    assert!(sol.iterations < 20, "sweeps = {}", sol.iterations);
    for i in 0..3 {
        assert_near(sol.x[i], 1.0, 1e-3, "X");
    }
}

#[test]
fn scenario_b_needs_permutation() {
    let m = system(&[&[1.0, 4.0, 1.0, 6.0], &[3.0, 1.0, 1.0, 5.0], &[1.0, 1.0, 5.0, 7.0]]);
    assert!(!is_diagonally_dominant(&m));

    let r = rearrange_with_assignment(&m).unwrap();
    assert_eq!(r.assignment.as_permutation(), Some(vec![1, 0, 2]));
    assert_eq!(
        r.matrix.to_rows(),
        vec![
            vec![3.0, 1.0, 1.0, 5.0],
            vec![1.0, 4.0, 1.0, 6.0],
            vec![1.0, 1.0, 5.0, 7.0],
        ]
    );
    assert!(is_diagonally_dominant(&r.matrix));

    let sol = solve(&r.matrix, 1e-4).unwrap();
    for i in 0..3 {
        assert_near(sol.x[i], 1.0, 1e-3, "X");
    }
}

#[test]
fn scenario_c_conflict() {
    let m = system(&[&[5.0, 1.0, 1.0, 7.0], &[4.0, 1.0, 1.0, 6.0], &[3.0, 1.0, 1.0, 5.0]]);
    assert!(matches!(
        rearrange(&m),
        Err(LinalgError::ConflictingDiagonalAssignment { column: 0, .. })
    ));
    assert!(matches!(
        rearrange_and_solve(&m, 1e-4),
        Err(LinalgError::ConflictingDiagonalAssignment { column: 0, .. })
    ));
}

#[test]
fn negative_coefficients_use_magnitude() {
    // Row 0 peaks at |-6| in column 1
    let m = system(&[&[1.0, -6.0, 2.0, -3.0], &[-7.0, 2.0, 1.0, -4.0], &[1.0, 1.0, -4.0, -2.0]]);
    let r = rearrange_with_assignment(&m).unwrap();
    assert_eq!(r.assignment.as_permutation(), Some(vec![1, 0, 2]));
    assert!(is_diagonally_dominant(&r.matrix));
}

// ── Round trip ───────────────────────────────────────────────────────

#[test]
fn round_trip_reproduces_rhs() {
    // 4x4 with every row out of place
    let m = system(&[
        &[1.0, 2.0, 10.0, 1.0, 14.0],
        &[12.0, 1.0, 2.0, 1.0, 16.0],
        &[1.0, 1.0, 1.0, 8.0, 11.0],
        &[2.0, 9.0, 1.0, 1.0, 13.0],
    ]);
    for eps in [1e-4, 1e-8, 1e-12] {
        let sol = rearrange_and_solve(&m, eps).unwrap();
        let r = m.residual(&sol.x);
        for i in 0..4 {
            assert!(
                r[i].abs() < 10.0 * eps * 12.0,
                "eps = {}: residual[{}] = {}",
                eps,
                i,
                r[i]
            );
        }
    }
}

#[test]
fn solution_in_original_variable_order() {
    // Unique solution (1, 2); rows swapped on input
    let m = system(&[&[1.0, 5.0, 11.0], &[4.0, 1.0, 6.0]]);
    let sol = rearrange_and_solve(&m, 1e-12).unwrap();
    assert_near(sol.x[0], 1.0, 1e-10, "x");
    assert_near(sol.x[1], 2.0, 1e-10, "y");
}

// ── Iteration cap ────────────────────────────────────────────────────

#[test]
fn cap_is_exact() {
    // Row 0 is strictly dominant, row 1 only weakly; with eps = 0 nothing
    // can converge and every sweep up to the cap runs
    let m = system(&[&[3.0, 1.0, 4.0], &[2.0, 2.0, 4.0]]);
    let err = solve(&m, 0.0).unwrap_err();
    assert_eq!(
        err,
        LinalgError::ConvergenceLimitExceeded {
            iterations: ITERATION_LIMIT
        }
    );

    let settings = SeidelSettings {
        eps: 0.0,
        max_iter: 7,
    };
    assert_eq!(
        solve_with(&m, &settings).unwrap_err(),
        LinalgError::ConvergenceLimitExceeded { iterations: 7 }
    );
}

#[test]
fn residual_of_exact_solution_is_zero() {
    let m = system(&[&[4.0, 1.0, 1.0, 6.0], &[1.0, 3.0, 1.0, 5.0], &[1.0, 1.0, 5.0, 7.0]]);
    let r = m.residual(&DynVector::from_slice(&[1.0, 1.0, 1.0]));
    assert_eq!(r.as_slice(), &[0.0, 0.0, 0.0]);
}
