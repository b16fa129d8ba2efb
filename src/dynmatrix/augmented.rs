use alloc::vec::Vec;

use crate::traits::{FloatScalar, MatrixRef, Scalar};

use super::{DimensionMismatch, DynMatrix, DynVector};

/// Augmented matrix `[A | b]` of a square linear system `A x = b`.
///
/// Wraps an `n x (n + 1)` [`DynMatrix`]: the first `n` columns are the
/// coefficients, the last column is the right-hand side. The shape is
/// checked once at construction, so everything downstream can index
/// without re-validating.
///
/// # Example
///
/// ```
/// use seidel::AugmentedMatrix;
///
/// let m = AugmentedMatrix::from_rows(&[
///     vec![4.0_f64, 1.0, 1.0, 6.0],
///     vec![1.0, 3.0, 1.0, 5.0],
///     vec![1.0, 1.0, 5.0, 7.0],
/// ]).unwrap();
/// assert_eq!(m.order(), 3);
/// assert_eq!(m.coeff(1, 1), 3.0);
/// assert_eq!(m.rhs(2), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    inner: DynMatrix<T>,
}

impl<T: Scalar> AugmentedMatrix<T> {
    /// Wrap an existing matrix, checking it is `n x (n + 1)` with `n >= 1`.
    pub fn new(m: DynMatrix<T>) -> Result<Self, DimensionMismatch> {
        let n = m.nrows();
        if n == 0 || m.ncols() != n + 1 {
            return Err(DimensionMismatch {
                expected: (n.max(1), n.max(1) + 1),
                got: (n, m.ncols()),
            });
        }
        Ok(Self { inner: m })
    }

    /// Build from a list of rows, each `n` coefficients followed by the
    /// right-hand side.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, DimensionMismatch> {
        if let Some(first) = rows.first() {
            let expected = (rows.len(), rows.len() + 1);
            if first.len() != expected.1 {
                return Err(DimensionMismatch {
                    expected,
                    got: (rows.len(), first.len()),
                });
            }
        }
        Self::new(DynMatrix::from_row_vecs(rows)?)
    }

    /// Assemble `[a | b]` from a square coefficient matrix and a right-hand side.
    ///
    /// ```
    /// use seidel::{AugmentedMatrix, DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
    /// let b = DynVector::from_slice(&[3.0, 4.0]);
    /// let m = AugmentedMatrix::from_parts(&a, &b).unwrap();
    /// assert_eq!(m.rhs(1), 4.0);
    /// ```
    pub fn from_parts(a: &DynMatrix<T>, b: &DynVector<T>) -> Result<Self, DimensionMismatch> {
        let n = a.nrows();
        if !a.is_square() || b.len() != n {
            return Err(DimensionMismatch {
                expected: (n, n + 1),
                got: (b.len(), a.ncols() + 1),
            });
        }
        Self::new(DynMatrix::from_fn(n, n + 1, |i, j| {
            if j < n {
                a[(i, j)]
            } else {
                b[i]
            }
        }))
    }

    /// Number of unknowns `n`.
    #[inline]
    pub fn order(&self) -> usize {
        self.inner.nrows()
    }

    /// Coefficient `a[i][j]`, `j < n`.
    #[inline]
    pub fn coeff(&self, i: usize, j: usize) -> T {
        debug_assert!(j < self.order(), "column {} is not a coefficient column", j);
        self.inner[(i, j)]
    }

    /// Right-hand side `b[i]`.
    #[inline]
    pub fn rhs(&self, i: usize) -> T {
        self.inner[(i, self.order())]
    }

    /// Full row `i` (coefficients then right-hand side).
    pub fn row(&self, i: usize) -> Vec<T> {
        self.inner.row(i)
    }

    /// All rows, in the shape accepted by [`from_rows`](Self::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.order()).map(|i| self.row(i)).collect()
    }

    /// Copy with the rows reordered: row `i` of the result is row `order[i]`.
    pub fn select_rows(&self, order: &[usize]) -> Self {
        Self {
            inner: self.inner.select_rows(order),
        }
    }
}

impl<T: FloatScalar> AugmentedMatrix<T> {
    /// Residual `A x - b`, component `i` being how far equation `i` is off.
    ///
    /// ```
    /// use seidel::{AugmentedMatrix, DynVector};
    /// let m = AugmentedMatrix::from_rows(&[vec![2.0_f64, 1.0, 3.0], vec![1.0, 3.0, 4.0]]).unwrap();
    /// let r = m.residual(&DynVector::from_slice(&[1.0, 1.0]));
    /// assert_eq!(r.as_slice(), &[0.0, 0.0]);
    /// ```
    pub fn residual(&self, x: &DynVector<T>) -> DynVector<T> {
        let n = self.order();
        assert_eq!(x.len(), n, "solution length must match system order");
        let mut r = DynVector::zeros(n, T::zero());
        for i in 0..n {
            let mut sum = T::zero() - self.rhs(i);
            for j in 0..n {
                sum = sum + self.coeff(i, j) * x[j];
            }
            r[i] = sum;
        }
        r
    }
}

impl<T> MatrixRef<T> for AugmentedMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        self.inner.get(row, col)
    }
}

impl<T: Scalar> TryFrom<DynMatrix<T>> for AugmentedMatrix<T> {
    type Error = DimensionMismatch;

    fn try_from(m: DynMatrix<T>) -> Result<Self, Self::Error> {
        Self::new(m)
    }
}

impl<T> From<AugmentedMatrix<T>> for DynMatrix<T> {
    fn from(m: AugmentedMatrix<T>) -> Self {
        m.inner
    }
}
