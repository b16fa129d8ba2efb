use alloc::vec;
use alloc::vec::Vec;

use crate::dynmatrix::AugmentedMatrix;
use crate::traits::{FloatScalar, MatrixRef};

use super::LinalgError;

/// Largest-magnitude coefficient of one row, with the row's absolute sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantEntry<T> {
    /// `max_j |a[i][j]|`.
    pub max_abs: T,
    /// Column of the first coefficient reaching `max_abs`.
    pub column: usize,
    /// `Σ_j |a[i][j]|` over the coefficient columns.
    pub row_sum: T,
}

impl<T: FloatScalar> DominantEntry<T> {
    /// Sum of the magnitudes of all the other coefficients.
    #[inline]
    pub fn others(&self) -> T {
        self.row_sum - self.max_abs
    }

    /// `max_abs >= others`, with an all-zero (or NaN) row never qualifying.
    #[inline]
    pub fn is_weak(&self) -> bool {
        self.max_abs > T::zero() && self.max_abs >= self.others()
    }

    /// `max_abs > others`.
    #[inline]
    pub fn is_strict(&self) -> bool {
        self.max_abs > self.others()
    }
}

/// Scan the coefficient part of row `row`.
///
/// The coefficient columns are the first `m.nrows()` columns, which for an
/// [`AugmentedMatrix`] excludes the right-hand side. Ties go to the lowest
/// column index.
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::dominant_entry;
///
/// let m = AugmentedMatrix::from_rows(&[vec![1.0_f64, -4.0, 6.0], vec![3.0, 1.0, 5.0]]).unwrap();
/// let e = dominant_entry(&m, 0);
/// assert_eq!(e.column, 1);
/// assert_eq!(e.max_abs, 4.0);
/// assert_eq!(e.row_sum, 5.0);
/// ```
pub fn dominant_entry<T: FloatScalar>(m: &impl MatrixRef<T>, row: usize) -> DominantEntry<T> {
    let n = m.nrows();
    let mut max_abs = m.get(row, 0).abs();
    let mut column = 0;
    let mut row_sum = T::zero();
    for j in 0..n {
        let a = m.get(row, j).abs();
        row_sum = row_sum + a;
        if a > max_abs {
            max_abs = a;
            column = j;
        }
    }
    DominantEntry {
        max_abs,
        column,
        row_sum,
    }
}

/// Column → row table built while scanning for a dominant permutation.
///
/// Each diagonal column can be claimed by exactly one source row; a second
/// claim is rejected rather than overwriting the first. Once every row has
/// claimed a column the table is a bijection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalAssignment {
    rows: Vec<Option<usize>>,
}

impl DiagonalAssignment {
    /// Empty assignment for an `n`-unknown system.
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![None; n],
        }
    }

    /// Give diagonal slot `column` to source row `row`.
    ///
    /// ```
    /// use seidel::linalg::{DiagonalAssignment, LinalgError};
    ///
    /// let mut a = DiagonalAssignment::new(2);
    /// a.claim(1, 0).unwrap();
    /// assert_eq!(
    ///     a.claim(1, 1),
    ///     Err(LinalgError::ConflictingDiagonalAssignment { column: 1, first_row: 0, second_row: 1 }),
    /// );
    /// ```
    pub fn claim(&mut self, column: usize, row: usize) -> Result<(), LinalgError> {
        match self.rows[column] {
            Some(first_row) => Err(LinalgError::ConflictingDiagonalAssignment {
                column,
                first_row,
                second_row: row,
            }),
            None => {
                self.rows[column] = Some(row);
                Ok(())
            }
        }
    }

    /// `perm[column] = source row`, or `None` while some slot is unclaimed.
    pub fn as_permutation(&self) -> Option<Vec<usize>> {
        self.rows.iter().copied().collect()
    }

    /// Whether every row stays where it is.
    pub fn is_identity(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(column, row)| *row == Some(column))
    }
}

/// A successful rearrangement: the reordered system and the assignment
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rearrangement<T> {
    /// Row `i` is the source row whose dominant coefficient sits in column `i`.
    pub matrix: AugmentedMatrix<T>,
    /// Column → source row table.
    pub assignment: DiagonalAssignment,
}

/// Reorder the rows of `m` so every row's largest coefficient lands on the
/// diagonal.
///
/// A single pass over the rows, no backtracking: each row must be weakly
/// dominant in its own right, must peak in a column no earlier row peaked
/// in, and at least one row must be strictly dominant. Each row keeps its
/// right-hand side when it moves. The input is left untouched.
///
/// # Errors
///
/// - [`LinalgError::NotDominanceable`] if a row's peak is smaller than the
///   sum of its other coefficients, or the row is all zeros.
/// - [`LinalgError::ConflictingDiagonalAssignment`] if two rows peak in the
///   same column.
/// - [`LinalgError::NoStrictDominance`] if every row is only weakly dominant.
///
/// # Example
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::rearrange;
///
/// let m = AugmentedMatrix::from_rows(&[
///     vec![1.0_f64, 4.0, 1.0, 6.0],
///     vec![3.0, 1.0, 1.0, 5.0],
///     vec![1.0, 1.0, 5.0, 7.0],
/// ]).unwrap();
/// let r = rearrange(&m).unwrap();
/// assert_eq!(r.row(0), vec![3.0, 1.0, 1.0, 5.0]);
/// assert_eq!(r.row(1), vec![1.0, 4.0, 1.0, 6.0]);
/// assert_eq!(r.row(2), vec![1.0, 1.0, 5.0, 7.0]);
/// ```
pub fn rearrange<T: FloatScalar>(m: &AugmentedMatrix<T>) -> Result<AugmentedMatrix<T>, LinalgError> {
    rearrange_with_assignment(m).map(|r| r.matrix)
}

/// Like [`rearrange`], also returning the column → row assignment.
pub fn rearrange_with_assignment<T: FloatScalar>(
    m: &AugmentedMatrix<T>,
) -> Result<Rearrangement<T>, LinalgError> {
    let n = m.order();
    let mut assignment = DiagonalAssignment::new(n);
    let mut any_strict = false;

    for row in 0..n {
        let entry = dominant_entry(m, row);
        if !entry.is_weak() {
            return Err(LinalgError::NotDominanceable { row });
        }
        assignment.claim(entry.column, row)?;
        any_strict |= entry.is_strict();
    }

    if !any_strict {
        return Err(LinalgError::NoStrictDominance);
    }

    let Some(perm) = assignment.as_permutation() else {
        unreachable!("{} rows claimed {} distinct columns", n, n);
    };
    if assignment.is_identity() {
        log::debug!("diagonal dominance: rows already in place");
    } else {
        log::debug!("diagonal dominance rearrangement: column -> row {:?}", perm);
    }

    Ok(Rearrangement {
        matrix: m.select_rows(&perm),
        assignment,
    })
}

/// Whether `m` is diagonally dominant as it stands: every row weakly
/// dominant on its own diagonal, at least one strictly.
///
/// ```
/// use seidel::AugmentedMatrix;
/// use seidel::linalg::is_diagonally_dominant;
///
/// let a = AugmentedMatrix::from_rows(&[vec![4.0_f64, 1.0, 5.0], vec![1.0, 3.0, 4.0]]).unwrap();
/// assert!(is_diagonally_dominant(&a));
/// let b = AugmentedMatrix::from_rows(&[vec![1.0_f64, 4.0, 5.0], vec![3.0, 1.0, 4.0]]).unwrap();
/// assert!(!is_diagonally_dominant(&b));
/// ```
pub fn is_diagonally_dominant<T: FloatScalar>(m: &AugmentedMatrix<T>) -> bool {
    let n = m.order();
    let mut any_strict = false;
    for i in 0..n {
        let entry = dominant_entry(m, i);
        let diag = m.coeff(i, i).abs();
        let others = entry.row_sum - diag;
        if !(diag > T::zero() && diag >= others) {
            return false;
        }
        any_strict |= diag > others;
    }
    any_strict
}
