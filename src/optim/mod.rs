//! Nonlinear systems: Newton's method with a Gauss-Seidel inner solve.
//!
//! Each outer step linearises `F(x) = 0` around the current point and hands
//! the augmented system `[J(x) | -F(x)]` to [`crate::linalg::solve`]. Any
//! failure of that inner solve ends the whole computation.
//!
//! - [`newton_system`] — Newton iteration on `F: R^n → R^n`
//! - [`finite_difference_jacobian`] — forward-difference Jacobian for callers
//!   without an analytic one

mod jacobian;
mod newton;


pub use jacobian::finite_difference_jacobian;
pub use newton::{newton_system, NewtonSystemSettings};

use crate::dynmatrix::{DimensionMismatch, DynVector};
use crate::linalg::LinalgError;

/// Errors from the nonlinear solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimError {
    /// Maximum number of outer iterations exceeded.
    MaxIterations,
    /// `F(x)` or the Newton step produced NaN or infinity.
    NotFinite,
    /// `F` or `J` returned something of the wrong size.
    DimensionMismatch(DimensionMismatch),
    /// The inner linear solve failed.
    Linear(LinalgError),
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::MaxIterations => write!(f, "maximum iterations exceeded"),
            OptimError::NotFinite => write!(f, "computed value is NaN or infinity"),
            OptimError::DimensionMismatch(e) => write!(f, "{}", e),
            OptimError::Linear(e) => write!(f, "linear step failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OptimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptimError::Linear(e) => Some(e),
            OptimError::DimensionMismatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LinalgError> for OptimError {
    fn from(e: LinalgError) -> Self {
        OptimError::Linear(e)
    }
}

impl From<DimensionMismatch> for OptimError {
    fn from(e: DimensionMismatch) -> Self {
        OptimError::DimensionMismatch(e)
    }
}

/// Result of a nonlinear system solve.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonSystemResult<T> {
    /// Approximate root.
    pub x: DynVector<T>,
    /// `F(x)` at the root.
    pub fx: DynVector<T>,
    /// Number of outer Newton steps.
    pub iterations: usize,
    /// Gauss-Seidel sweeps summed over all inner solves.
    pub inner_sweeps: usize,
}
