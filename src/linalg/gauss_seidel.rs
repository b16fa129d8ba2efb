use crate::dynmatrix::{AugmentedMatrix, DynMatrix, DynVector};
use crate::traits::FloatScalar;

use super::{rearrange, LinalgError};

/// Hard cap on Gauss-Seidel sweeps.
pub const ITERATION_LIMIT: usize = 1000;

/// Settings for the Gauss-Seidel solver.
#[derive(Debug, Clone, Copy)]
pub struct SeidelSettings<T> {
    /// Accept a sweep once `max_i |X[i] - prevX[i]| < eps`.
    pub eps: T,
    /// Maximum number of sweeps.
    pub max_iter: usize,
}

impl<T> SeidelSettings<T> {
    /// Settings with accuracy `eps` and the default sweep cap.
    pub fn new(eps: T) -> Self {
        Self {
            eps,
            max_iter: ITERATION_LIMIT,
        }
    }
}

impl Default for SeidelSettings<f64> {
    fn default() -> Self {
        Self::new(1e-6)
    }
}

impl Default for SeidelSettings<f32> {
    fn default() -> Self {
        Self::new(1e-4)
    }
}

/// Result of a converged Gauss-Seidel solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SeidelSolution<T> {
    /// Accepted iterate.
    pub x: DynVector<T>,
    /// Sweeps performed, counting the accepting one.
    pub iterations: usize,
    /// `|X[i] - prevX[i]|` of the accepting sweep, per component.
    pub error: DynVector<T>,
}

impl<T: FloatScalar> SeidelSolution<T> {
    /// Largest component of [`error`](Self::error); always below the `eps`
    /// the solve was run with.
    pub fn max_error(&self) -> T {
        self.error.norm_inf()
    }
}

/// Fixed-point form `x = C x + d` of a system with nonzero diagonal.
///
/// `C[i][j] = -a[i][j] / a[i][i]` off the diagonal, `C[i][i] = 0`,
/// `d[i] = b[i] / a[i][i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationForm<T> {
    c: DynMatrix<T>,
    d: DynVector<T>,
}

impl<T: FloatScalar> IterationForm<T> {
    /// Build `(C, d)` from `[A | b]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroDiagonal`] if some `a[i][i]` is zero. A matrix
    /// that came out of [`rearrange`](super::rearrange) never has one.
    ///
    /// ```
    /// use seidel::AugmentedMatrix;
    /// use seidel::linalg::IterationForm;
    ///
    /// let m = AugmentedMatrix::from_rows(&[vec![4.0_f64, 2.0, 8.0], vec![1.0, 5.0, 10.0]]).unwrap();
    /// let form = IterationForm::from_augmented(&m).unwrap();
    /// assert_eq!(form.c()[(0, 0)], 0.0);
    /// assert_eq!(form.c()[(0, 1)], -0.5);
    /// assert_eq!(form.c()[(1, 0)], -0.2);
    /// assert_eq!(form.d().as_slice(), &[2.0, 2.0]);
    /// ```
    pub fn from_augmented(m: &AugmentedMatrix<T>) -> Result<Self, LinalgError> {
        let n = m.order();
        if let Some(row) = (0..n).find(|&i| m.coeff(i, i).is_zero()) {
            return Err(LinalgError::ZeroDiagonal { row });
        }

        let c = DynMatrix::from_fn(n, n, |i, j| {
            if i == j {
                T::zero()
            } else {
                T::zero() - m.coeff(i, j) / m.coeff(i, i)
            }
        });
        let mut d = DynVector::zeros(n, T::zero());
        for i in 0..n {
            d[i] = m.rhs(i) / m.coeff(i, i);
        }
        Ok(Self { c, d })
    }

    /// Number of unknowns.
    #[inline]
    pub fn order(&self) -> usize {
        self.d.len()
    }

    /// Iteration matrix `C`.
    #[inline]
    pub fn c(&self) -> &DynMatrix<T> {
        &self.c
    }

    /// Offset vector `d`.
    #[inline]
    pub fn d(&self) -> &DynVector<T> {
        &self.d
    }

    /// One Gauss-Seidel sweep, writing the new iterate into `x`.
    ///
    /// Component `i` uses the components of `x` already updated in this sweep
    /// (`j < i`) and the previous iterate `prev` for the rest (`j >= i`):
    ///
    /// ```text
    /// x[i] = d[i] + Σ_{j<i} C[i][j]·x[j] + Σ_{j≥i} C[i][j]·prev[j]
    /// ```
    pub fn sweep(&self, prev: &DynVector<T>, x: &mut DynVector<T>) {
        let n = self.order();
        debug_assert_eq!(prev.len(), n);
        debug_assert_eq!(x.len(), n);
        for i in 0..n {
            let mut acc = self.d[i];
            for j in 0..i {
                acc = acc + self.c[(i, j)] * x[j];
            }
            for j in i..n {
                acc = acc + self.c[(i, j)] * prev[j];
            }
            x[i] = acc;
        }
    }
}

/// Per-solve iteration state. Lives for one call and is dropped with it.
struct SeidelState<T> {
    prev: DynVector<T>,
    x: DynVector<T>,
    iterations: usize,
}

impl<T: FloatScalar> SeidelState<T> {
    /// `prevX` starts at `d`, i.e. all off-diagonal contributions assumed zero.
    fn new(form: &IterationForm<T>) -> Self {
        Self {
            prev: form.d().clone(),
            x: DynVector::zeros(form.order(), T::zero()),
            iterations: 0,
        }
    }

    /// Run one sweep and return the max-norm change from the previous iterate.
    fn advance(&mut self, form: &IterationForm<T>) -> T {
        form.sweep(&self.prev, &mut self.x);
        self.iterations += 1;
        self.x.max_abs_diff(&self.prev)
    }
}

/// Solve a diagonally dominant system by Gauss-Seidel iteration, with the
/// default sweep cap of [`ITERATION_LIMIT`].
///
/// `m` is used as given: call [`rearrange`](super::rearrange) first unless the
/// system is already known to be dominant. A non-positive `eps` can never be
/// met and runs into the cap.
///
/// # Errors
///
/// - [`LinalgError::ZeroDiagonal`] if some `a[i][i]` is zero.
/// - [`LinalgError::ConvergenceLimitExceeded`] if no sweep within the cap
///   brings the max-norm change below `eps`. No partial solution is returned.
///
/// # Example
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::solve;
///
/// let m = AugmentedMatrix::from_rows(&[
///     vec![4.0_f64, 1.0, 1.0, 6.0],
///     vec![1.0, 3.0, 1.0, 5.0],
///     vec![1.0, 1.0, 5.0, 7.0],
/// ]).unwrap();
/// let sol = solve(&m, 1e-4).unwrap();
/// assert!(sol.iterations < 20);
/// for &xi in sol.x.as_slice() {
///     assert!((xi - 1.0).abs() < 1e-3);
/// }
/// ```
pub fn solve<T: FloatScalar>(m: &AugmentedMatrix<T>, eps: T) -> Result<SeidelSolution<T>, LinalgError> {
    solve_with(m, &SeidelSettings::new(eps))
}

/// [`solve`] with explicit settings.
pub fn solve_with<T: FloatScalar>(
    m: &AugmentedMatrix<T>,
    settings: &SeidelSettings<T>,
) -> Result<SeidelSolution<T>, LinalgError> {
    let form = IterationForm::from_augmented(m)?;
    let mut state = SeidelState::new(&form);

    while state.iterations < settings.max_iter {
        let max_diff = state.advance(&form);
        log::trace!("Gauss-Seidel sweep {}: max change = {:?}", state.iterations, max_diff);

        if max_diff < settings.eps {
            log::debug!(
                "Gauss-Seidel converged after {} sweeps (max change {:?})",
                state.iterations,
                max_diff
            );
            let SeidelState { prev, x, iterations } = state;
            return Ok(SeidelSolution {
                error: x.abs_diff(&prev),
                x,
                iterations,
            });
        }

        state.prev.copy_from(&state.x);
    }

    log::warn!(
        "Gauss-Seidel did not reach eps = {:?} within {} sweeps",
        settings.eps,
        settings.max_iter
    );
    Err(LinalgError::ConvergenceLimitExceeded {
        iterations: state.iterations,
    })
}

/// Rearrange for diagonal dominance, then solve.
///
/// Only rows move, so the solution is in the original variable order.
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::rearrange_and_solve;
///
/// let m = AugmentedMatrix::from_rows(&[
///     vec![1.0_f64, 4.0, 1.0, 6.0],
///     vec![3.0, 1.0, 1.0, 5.0],
///     vec![1.0, 1.0, 5.0, 7.0],
/// ]).unwrap();
/// let sol = rearrange_and_solve(&m, 1e-8).unwrap();
/// assert!(m.residual(&sol.x).norm_inf() < 1e-6);
/// ```
pub fn rearrange_and_solve<T: FloatScalar>(
    m: &AugmentedMatrix<T>,
    eps: T,
) -> Result<SeidelSolution<T>, LinalgError> {
    let dominant = rearrange(m)?;
    solve(&dominant, eps)
}
