use crate::traits::FloatScalar;

use super::vector::DynVector;

// ── Max-norm helpers ────────────────────────────────────────────────

impl<T: FloatScalar> DynVector<T> {
    /// Infinity norm (largest absolute component). Zero for an empty vector.
    ///
    /// ```
    /// use seidel::DynVector;
    /// let v = DynVector::from_slice(&[1.0_f64, -4.0, 3.0]);
    /// assert_eq!(v.norm_inf(), 4.0);
    /// ```
    pub fn norm_inf(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }

    /// Component-wise `|self[i] - other[i]|`.
    ///
    /// ```
    /// use seidel::DynVector;
    /// let a = DynVector::from_slice(&[1.0_f64, 2.0]);
    /// let b = DynVector::from_slice(&[1.5_f64, 1.0]);
    /// assert_eq!(a.abs_diff(&b).as_slice(), &[0.5, 1.0]);
    /// ```
    pub fn abs_diff(&self, other: &Self) -> Self {
        (self - other).map_abs()
    }

    /// `max_i |self[i] - other[i]|`, the max-norm convergence measure.
    ///
    /// A NaN component propagates, so a diverged iterate never compares
    /// below a tolerance.
    ///
    /// ```
    /// use seidel::DynVector;
    /// let a = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
    /// let b = DynVector::from_slice(&[1.0_f64, 2.5, 2.9]);
    /// assert!((a.max_abs_diff(&b) - 0.5).abs() < 1e-12);
    /// ```
    pub fn max_abs_diff(&self, other: &Self) -> T {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        let mut max = T::zero();
        for (&a, &b) in self.as_slice().iter().zip(other.as_slice()) {
            let d = (a - b).abs();
            if d.is_nan() {
                return d;
            }
            if d > max {
                max = d;
            }
        }
        max
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|x| x.is_finite())
    }

    fn map_abs(mut self) -> Self {
        for x in self.as_mut_slice() {
            *x = x.abs();
        }
        self
    }
}
