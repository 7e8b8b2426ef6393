//! # matrust
//!
//! **Lazy matrix views and numeric analysis for real and complex scalars.**
//!
//! matrust builds matrices as cheap re-indexings of one another:
//! extracting a row, a column, a sub-block, a diagonal, a triangle, or a
//! transposition is O(1) and copies nothing until the result is forced.
//! On top of that view layer sit entrywise norms with overflow-safe
//! scaling, Hermitian inner products, row/column functional combinators,
//! and approximate zero/orthogonality predicates.
//!
//! ## Features
//!
//! - **Views**: structural extraction and concatenation without copying;
//!   element data moves only on [`Matrix::force`]
//! - **Norms**: 1-, 2-, infinity-, and general p-norms; the 2-/p-norms
//!   divide by the largest magnitude before exponentiation, so large
//!   entries cannot overflow and small ones cannot underflow
//! - **Real and complex**: one generic code path over [`Scalar`];
//!   conjugation vanishes to the identity for real elements
//! - **Recoverable failures**: a zero row or column surfaces as a marker
//!   (`Ok(None)`) through the `try_` operations, not as a mandatory error
//!
//! ## Quick Start
//!
//! ```
//! use matrust::prelude::*;
//! use matrust::matrix;
//!
//! let m: Matrix<f64> = matrix!([[3.0, 4.0]]);
//! assert_eq!(two_norm(&m), 5.0);
//!
//! let t = transpose(&m);
//! assert_eq!(t.shape(), (2, 1));
//!
//! let unit = normalize(&m)?;
//! assert!((two_norm(&unit) - 1.0).abs() < 1e-12);
//! # Ok::<(), matrust::MatrustError>(())
//! ```

pub mod error;
mod macros;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod view;

pub use error::{MatrustError, Result};
pub use matrix::Matrix;
pub use num_complex::Complex;
pub use scalar::Scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MatrustError, Result};
    pub use crate::matrix::Matrix;
    pub use crate::ops::*;
    pub use crate::scalar::Scalar;
    pub use crate::view::{augment, stack};
}
