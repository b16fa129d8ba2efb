//! # seidel
//!
//! Iterative solution of dense linear systems by Gauss-Seidel, with an
//! automatic row rearrangement that makes the coefficient matrix diagonally
//! dominant first. no-std compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use seidel::AugmentedMatrix;
//! use seidel::linalg::rearrange_and_solve;
//!
//! // x + 4y + z = 6, 3x + y + z = 5, x + y + 5z = 7; the first two rows
//! // have their dominant entries in the wrong place
//! let m = AugmentedMatrix::from_rows(&[
//!     vec![1.0_f64, 4.0, 1.0, 6.0],
//!     vec![3.0, 1.0, 1.0, 5.0],
//!     vec![1.0, 1.0, 5.0, 7.0],
//! ]).unwrap();
//! let sol = rearrange_and_solve(&m, 1e-8).unwrap();
//! for &xi in sol.x.as_slice() {
//!     assert!((xi - 1.0).abs() < 1e-6);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions,
//!   the [`DynVector<T>`] newtype, and [`AugmentedMatrix<T>`], the `[A | b]`
//!   form every solver in the crate consumes.
//!
//! - [`linalg`] — Diagonal-dominance rearrangement ([`linalg::rearrange`])
//!   and Gauss-Seidel iteration ([`linalg::solve`]) with a hard cap of
//!   [`linalg::ITERATION_LIMIT`] sweeps.
//!
//! - [`optim`] — Newton's method for square nonlinear systems, each step
//!   solved by Gauss-Seidel. Finite-difference Jacobian for callers without
//!   an analytic one. Requires `optim` feature.
//!
//! - [`config`] — Problem files (`accuracy` + `matrix`) in TOML or JSON.
//!   Requires `config` feature.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by the solvers
//!   - [`MatrixRef`] — generic read access for algorithms
//!
//! ## Logging
//!
//! The solvers report progress through the [`log`] facade: one `debug!` per
//! convergence or Newton step, `trace!` per sweep, `warn!` when the sweep cap
//! is hit. Nothing is printed unless the application installs a logger.
//!
//! ## Cargo features
//!
//! | Feature  | Default  | Description |
//! |----------|----------|-------------|
//! | `std`    | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`   | no       | Pure-Rust software float; needed without `std` |
//! | `optim`  | yes      | Newton driver for nonlinear systems |
//! | `config` | no       | TOML / JSON problem files via `serde` |
//! | `cli`    | no       | The `seidel` binary (`clap`, `env_logger`) |
//! | `all`    | no       | All of the above |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for float math");

extern crate alloc;

#[cfg(feature = "config")]
pub mod config;
pub mod dynmatrix;
pub mod linalg;
#[cfg(feature = "optim")]
pub mod optim;
pub mod traits;

pub use dynmatrix::{AugmentedMatrix, DimensionMismatch, DynMatrix, DynVector};
pub use linalg::LinalgError;
pub use traits::{FloatScalar, MatrixRef, Scalar};
