use crate::dynmatrix::{AugmentedMatrix, DimensionMismatch, DynMatrix, DynVector};
use crate::linalg::{rearrange, solve_with, SeidelSettings, SeidelSolution};
use crate::traits::FloatScalar;

use super::{NewtonSystemResult, OptimError};

/// Settings for [`newton_system`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonSystemSettings<T> {
    /// Stop once both `‖δ‖∞` and `‖F(x + δ) - F(x)‖∞` fall below this.
    pub eps: T,
    /// Accuracy and sweep cap of the inner Gauss-Seidel solve.
    pub inner: SeidelSettings<T>,
    /// Maximum number of outer Newton steps.
    pub max_iter: usize,
    /// Rearrange each linearised system for diagonal dominance before the
    /// inner solve instead of solving it as given.
    pub rearrange: bool,
}

impl Default for NewtonSystemSettings<f64> {
    fn default() -> Self {
        Self {
            eps: 1e-10,
            inner: SeidelSettings::new(1e-12),
            max_iter: 100,
            rearrange: false,
        }
    }
}

impl Default for NewtonSystemSettings<f32> {
    fn default() -> Self {
        Self {
            eps: 1e-5,
            inner: SeidelSettings::new(1e-6),
            max_iter: 100,
            rearrange: false,
        }
    }
}

/// Newton's method for a square nonlinear system `F(x) = 0`.
///
/// Each step solves `J(x) δ = -F(x)` by Gauss-Seidel iteration and moves to
/// `x + δ`. With `settings.rearrange` off the linearised system goes straight
/// to the solver, so `J` should stay diagonally dominant near the path.
///
/// # Arguments
///
/// * `f` — residual function `F(x)`, returning an n-vector
/// * `jacobian` — `J(x)`, an n×n matrix
/// * `x0` — initial guess
/// * `settings` — tolerances, inner-solve settings and iteration limit
///
/// # Errors
///
/// Returns [`OptimError::Linear`] as soon as an inner solve fails; the outer
/// loop never retries.
/// Returns [`OptimError::NotFinite`] if `F` yields NaN or infinity.
/// Returns [`OptimError::DimensionMismatch`] if `F` or `J` have the wrong size.
/// Returns [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use seidel::optim::{newton_system, NewtonSystemSettings};
/// use seidel::{DynMatrix, DynVector};
///
/// // 4x + y^2 = 5, x^2 + 5y = 6, root at (1, 1)
/// let r = newton_system(
///     |v: &DynVector<f64>| DynVector::from_slice(&[
///         4.0 * v[0] + v[1] * v[1] - 5.0,
///         v[0] * v[0] + 5.0 * v[1] - 6.0,
///     ]),
///     |v: &DynVector<f64>| DynMatrix::from_rows(2, 2, &[4.0, 2.0 * v[1], 2.0 * v[0], 5.0]),
///     &DynVector::from_slice(&[0.0, 0.0]),
///     &NewtonSystemSettings::default(),
/// ).unwrap();
/// assert!((r.x[0] - 1.0).abs() < 1e-8);
/// assert!((r.x[1] - 1.0).abs() < 1e-8);
/// ```
pub fn newton_system<T: FloatScalar>(
    mut f: impl FnMut(&DynVector<T>) -> DynVector<T>,
    mut jacobian: impl FnMut(&DynVector<T>) -> DynMatrix<T>,
    x0: &DynVector<T>,
    settings: &NewtonSystemSettings<T>,
) -> Result<NewtonSystemResult<T>, OptimError> {
    let n = x0.len();
    let mut x = x0.clone();
    let mut fx = evaluate(&mut f, &x, n)?;
    let mut inner_sweeps = 0usize;

    for iter in 0..settings.max_iter {
        let j = jacobian(&x);
        let system = AugmentedMatrix::from_parts(&j, &-&fx)?;
        let step = linear_step(&system, settings)?;
        inner_sweeps += step.iterations;
        let delta = step.x;

        let x_new = &x + &delta;
        let fx_new = evaluate(&mut f, &x_new, n)?;
        let step_norm = delta.norm_inf();
        let f_change = fx_new.max_abs_diff(&fx);
        log::debug!(
            "Newton step {}: |dx| = {:?}, |dF| = {:?}, {} sweeps",
            iter + 1,
            step_norm,
            f_change,
            step.iterations
        );

        x = x_new;
        fx = fx_new;

        if step_norm < settings.eps && f_change < settings.eps {
            return Ok(NewtonSystemResult {
                x,
                fx,
                iterations: iter + 1,
                inner_sweeps,
            });
        }
    }

    Err(OptimError::MaxIterations)
}

fn linear_step<T: FloatScalar>(
    system: &AugmentedMatrix<T>,
    settings: &NewtonSystemSettings<T>,
) -> Result<SeidelSolution<T>, OptimError> {
    let step = if settings.rearrange {
        solve_with(&rearrange(system)?, &settings.inner)?
    } else {
        solve_with(system, &settings.inner)?
    };
    Ok(step)
}

fn evaluate<T: FloatScalar>(
    f: &mut impl FnMut(&DynVector<T>) -> DynVector<T>,
    x: &DynVector<T>,
    n: usize,
) -> Result<DynVector<T>, OptimError> {
    let fx = f(x);
    if fx.len() != n {
        return Err(DimensionMismatch {
            expected: (1, n),
            got: (1, fx.len()),
        }
        .into());
    }
    if !fx.is_finite() {
        return Err(OptimError::NotFinite);
    }
    Ok(fx)
}
