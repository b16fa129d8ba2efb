//! Dominance rearrangement and Gauss-Seidel iteration for square systems.
//!
//! The standalone pipeline is [`rearrange`] followed by [`solve`], wrapped up
//! as [`rearrange_and_solve`]. [`solve`] can also be called on its own when
//! the caller already knows the system is diagonally dominant, which is how
//! the Newton driver in [`crate::optim`] uses it.

pub(crate) mod dominance;
pub(crate) mod gauss_seidel;


pub use dominance::{
    dominant_entry, is_diagonally_dominant, rearrange, rearrange_with_assignment,
    DiagonalAssignment, DominantEntry, Rearrangement,
};
pub use gauss_seidel::{
    rearrange_and_solve, solve, solve_with, IterationForm, SeidelSettings, SeidelSolution,
    ITERATION_LIMIT,
};

/// Errors from the dominance rearranger and the Gauss-Seidel solver.
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::{rearrange, LinalgError};
///
/// // Every row peaks in column 0
/// let m = AugmentedMatrix::from_rows(&[
///     vec![5.0_f64, 1.0, 1.0, 7.0],
///     vec![4.0, 1.0, 1.0, 6.0],
///     vec![3.0, 1.0, 1.0, 5.0],
/// ]).unwrap();
/// assert_eq!(
///     rearrange(&m).unwrap_err(),
///     LinalgError::ConflictingDiagonalAssignment { column: 0, first_row: 0, second_row: 1 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// A row's largest coefficient is smaller than the sum of the others
    /// (or the row is all zeros), so no reordering can make it dominant.
    NotDominanceable {
        /// Offending row of the input.
        row: usize,
    },
    /// Two rows peak in the same column, so they would compete for the same
    /// diagonal slot.
    ConflictingDiagonalAssignment {
        /// Contested column.
        column: usize,
        /// Row that claimed the column first.
        first_row: usize,
        /// Row that tried to claim it again.
        second_row: usize,
    },
    /// Every row is only weakly dominant; convergence is not guaranteed.
    NoStrictDominance,
    /// The sweep cap was reached without meeting the accuracy threshold.
    ConvergenceLimitExceeded {
        /// Sweeps performed.
        iterations: usize,
    },
    /// A diagonal coefficient is zero, so the iteration form does not exist.
    ZeroDiagonal {
        /// Row with the zero diagonal.
        row: usize,
    },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::NotDominanceable { row } => {
                write!(f, "can't make the diagonal dominant: row {} has no dominant entry", row)
            }
            LinalgError::ConflictingDiagonalAssignment {
                column,
                first_row,
                second_row,
            } => write!(
                f,
                "can't make the diagonal dominant: rows {} and {} both peak in column {}",
                first_row, second_row, column
            ),
            LinalgError::NoStrictDominance => {
                write!(f, "can't make the diagonal dominant: no row is strictly dominant")
            }
            LinalgError::ConvergenceLimitExceeded { iterations } => {
                write!(f, "iteration limit exceeded after {} sweeps", iterations)
            }
            LinalgError::ZeroDiagonal { row } => {
                write!(f, "zero diagonal coefficient in row {}", row)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
