//! Approximate numeric predicates built on the norm engine.

use crate::error::{MatrustError, Result};
use crate::matrix::Matrix;
use crate::ops::norm::{cos_angle, inf_norm};
use crate::scalar::Scalar;
use num_traits::{Float, Zero};

fn default_orthogonality_eps<R: Float>() -> R {
    R::epsilon() * R::from(10.0).unwrap()
}

/// True when every entry is within `eps` of zero, measured by the
/// infinity norm.
///
/// # Errors
///
/// A negative tolerance is an invalid argument.
pub fn is_zero_within<A: Scalar>(m: &Matrix<A>, eps: A::Real) -> Result<bool> {
    if eps < A::Real::zero() {
        return Err(MatrustError::invalid_argument(
            "eps",
            "tolerance must be non-negative",
        ));
    }
    Ok(inf_norm(m) <= eps)
}

/// Zero-tolerance form of [`is_zero_within`]: true when every entry is
/// exactly zero.
pub fn is_zero<A: Scalar>(m: &Matrix<A>) -> bool {
    inf_norm(m) <= A::Real::zero()
}

fn pairwise_orthogonal<A: Scalar>(slices: &[Matrix<A>], eps: A::Real) -> Result<bool> {
    for i0 in 0..slices.len() {
        for i1 in (i0 + 1)..slices.len() {
            let c = cos_angle(&slices[i0], &slices[i1])?;
            if c.modulus() >= eps {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// True when every pair of distinct rows is numerically orthogonal,
/// using a tolerance of ten machine epsilons.
///
/// Pairs are tested in ascending index order and the first pair with
/// `|cos_angle| >= eps` returns false immediately. A zero row yields
/// non-finite cosines, whose comparisons never trip the cutoff.
///
/// # Errors
///
/// Propagates shape errors from the pairwise inner products.
pub fn rows_orthogonal<A: Scalar>(m: &Matrix<A>) -> Result<bool> {
    rows_orthogonal_within(m, default_orthogonality_eps())
}

/// [`rows_orthogonal`] with a caller-supplied tolerance.
///
/// # Errors
///
/// A negative tolerance is an invalid argument.
pub fn rows_orthogonal_within<A: Scalar>(m: &Matrix<A>, eps: A::Real) -> Result<bool> {
    if eps < A::Real::zero() {
        return Err(MatrustError::invalid_argument(
            "eps",
            "tolerance must be non-negative",
        ));
    }
    pairwise_orthogonal(&m.row_views(), eps)
}

/// True when every pair of distinct columns is numerically orthogonal,
/// using a tolerance of ten machine epsilons.
///
/// # Errors
///
/// Propagates shape errors from the pairwise inner products.
pub fn cols_orthogonal<A: Scalar>(m: &Matrix<A>) -> Result<bool> {
    cols_orthogonal_within(m, default_orthogonality_eps())
}

/// [`cols_orthogonal`] with a caller-supplied tolerance.
///
/// # Errors
///
/// A negative tolerance is an invalid argument.
pub fn cols_orthogonal_within<A: Scalar>(m: &Matrix<A>, eps: A::Real) -> Result<bool> {
    if eps < A::Real::zero() {
        return Err(MatrustError::invalid_argument(
            "eps",
            "tolerance must be non-negative",
        ));
    }
    pairwise_orthogonal(&m.col_views(), eps)
}
