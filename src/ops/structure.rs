//! Structural operators: transpose, conjugate, hermitian, trace.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::view::IndexMap;

/// Transposition as an O(1) axis-swap view: `transpose(a)[i, j] == a[j, i]`.
pub fn transpose<A: Scalar>(a: &Matrix<A>) -> Matrix<A> {
    Matrix::view_of(a, IndexMap::AxisSwap, a.cols(), a.rows())
}

/// Elementwise complex conjugate; the identity map for real elements.
pub fn conjugate<A: Scalar>(a: &Matrix<A>) -> Matrix<A> {
    a.conjugate_elementwise()
}

/// Conjugate transpose; equals [`transpose`] for real elements.
pub fn hermitian<A: Scalar>(a: &Matrix<A>) -> Matrix<A> {
    transpose(&conjugate(a))
}

/// Sum of the diagonal entries.
///
/// # Errors
///
/// Returns a shape error on non-square input.
pub fn trace<A: Scalar>(a: &Matrix<A>) -> Result<A> {
    Ok(a.diagonal()?.sum())
}
