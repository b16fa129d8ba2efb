use alloc::vec::Vec;
use core::ops::{Add, Index, IndexMut, Neg, Sub};

use crate::traits::Scalar;

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Used for solution iterates, right-hand sides and residuals.
///
/// # Examples
///
/// ```
/// use seidel::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use seidel::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix {
                data,
                nrows: 1,
                ncols: n,
            },
        }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy every component of `src` into `self`.
    ///
    /// Panics if the lengths differ.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        self.as_mut_slice().copy_from_slice(src.as_slice());
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner.data
    }

    fn zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_vec(
            self.as_slice()
                .iter()
                .zip(rhs.as_slice())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: Scalar> Add for &DynVector<T> {
    type Output = DynVector<T>;

    /// Element-wise sum.
    ///
    /// ```
    /// use seidel::DynVector;
    /// let a = DynVector::from_slice(&[1.0, 2.0]);
    /// let b = DynVector::from_slice(&[0.5, -1.0]);
    /// assert_eq!((&a + &b).as_slice(), &[1.5, 1.0]);
    /// ```
    fn add(self, rhs: Self) -> DynVector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: Self) -> DynVector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Neg for &DynVector<T> {
    type Output = DynVector<T>;

    fn neg(self) -> DynVector<T> {
        DynVector::from_vec(self.as_slice().iter().map(|&a| T::zero() - a).collect())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn zeros() {
        let v = DynVector::zeros(4, 0.0_f64);
        assert_eq!(v.len(), 4);
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn index_mut() {
        let mut v = DynVector::zeros(3, 0.0_f64);
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn arithmetic() {
        let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!((&a + &b).as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!((&b - &a).as_slice(), &[3.0, 3.0, 3.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, -2.0, -3.0]);
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn add_length_mismatch() {
        let a = DynVector::from_slice(&[1.0, 2.0]);
        let b = DynVector::from_slice(&[1.0]);
        let _ = &a + &b;
    }

    #[test]
    fn copy_from() {
        let mut a = DynVector::zeros(2, 0.0_f64);
        a.copy_from(&DynVector::from_slice(&[3.0, 4.0]));
        assert_eq!(a.as_slice(), &[3.0, 4.0]);
    }
}
