use crate::dynmatrix::{DynMatrix, DynVector};
use crate::traits::FloatScalar;

/// Approximate the Jacobian of `f: R^n → R^m` using forward finite differences.
///
/// Uses step size `h_j = sqrt(ε) * max(|x_j|, 1)` for each component,
/// requiring `n + 1` function evaluations (one base evaluation + n perturbed).
///
/// Panics if `f` does not return the same number of components every call.
///
/// # Example
///
/// ```
/// use seidel::optim::finite_difference_jacobian;
/// use seidel::DynVector;
///
/// // f(x) = [x0^2, x0*x1], Jacobian = [[2*x0, 0], [x1, x0]]
/// let x = DynVector::from_slice(&[3.0_f64, 4.0]);
/// let j = finite_difference_jacobian(|x: &DynVector<f64>| {
///     DynVector::from_slice(&[x[0] * x[0], x[0] * x[1]])
/// }, &x);
/// assert!((j[(0, 0)] - 6.0).abs() < 1e-6);
/// assert!((j[(0, 1)] - 0.0).abs() < 1e-6);
/// assert!((j[(1, 0)] - 4.0).abs() < 1e-6);
/// assert!((j[(1, 1)] - 3.0).abs() < 1e-6);
/// ```
pub fn finite_difference_jacobian<T: FloatScalar>(
    mut f: impl FnMut(&DynVector<T>) -> DynVector<T>,
    x: &DynVector<T>,
) -> DynMatrix<T> {
    let sqrt_eps = T::epsilon().sqrt();
    let f0 = f(x);
    let m = f0.len();
    let n = x.len();
    let mut jac = DynMatrix::zeros(m, n, T::zero());
    let mut x_pert = x.clone();

    for j in 0..n {
        let h = sqrt_eps * x[j].abs().max(T::one());
        x_pert[j] = x[j] + h;
        let f_pert = f(&x_pert);
        x_pert[j] = x[j];
        assert_eq!(
            f_pert.len(),
            m,
            "f returned {} components at the perturbed point, {} at the base point",
            f_pert.len(),
            m
        );

        for i in 0..m {
            jac[(i, j)] = (f_pert[i] - f0[i]) / h;
        }
    }

    jac
}
