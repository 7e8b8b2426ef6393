//! Row and column functional combinators.
//!
//! These decompose a matrix into its row or column views, apply a
//! per-slice transform, and reassemble the results with `stack` or
//! `augment`. The `try_` forms thread a failure marker instead of an
//! error: the first transform returning `None` short-circuits the whole
//! combinator, which returns `Ok(None)` without touching the remaining
//! slices. The normalize family routes "zero row/column" through that
//! marker so callers can recover without an error in the common path.

use crate::error::{MatrustError, Result};
use crate::matrix::Matrix;
use crate::ops::norm::try_normalize;
use crate::scalar::Scalar;
use crate::view::{augment, stack};
use num_traits::NumCast;

/// Applies `f` to each row view in order and reassembles with `stack`.
///
/// # Errors
///
/// Propagates errors from `f`; reassembly fails if a result's column
/// count differs from the first result's.
pub fn map_rows<A, F>(m: &Matrix<A>, mut f: F) -> Result<Matrix<A>>
where
    A: Scalar,
    F: FnMut(&Matrix<A>) -> Result<Matrix<A>>,
{
    let mut mapped = Vec::with_capacity(m.rows());
    for row in m.row_views() {
        mapped.push(f(&row)?);
    }
    stack(&mapped)
}

/// Applies `f` to each column view in order and reassembles with `augment`.
///
/// # Errors
///
/// Propagates errors from `f`; reassembly fails if a result's row count
/// differs from the first result's.
pub fn map_cols<A, F>(m: &Matrix<A>, mut f: F) -> Result<Matrix<A>>
where
    A: Scalar,
    F: FnMut(&Matrix<A>) -> Result<Matrix<A>>,
{
    let mut mapped = Vec::with_capacity(m.cols());
    for col in m.col_views() {
        mapped.push(f(&col)?);
    }
    augment(&mapped)
}

/// Marker form of [`map_rows`]: rows are processed left to right, and the
/// first `None` from `f` makes the whole call return `Ok(None)`
/// immediately, with the remaining rows unprocessed.
///
/// # Errors
///
/// Propagates errors from `f` and from reassembly.
pub fn try_map_rows<A, F>(m: &Matrix<A>, mut f: F) -> Result<Option<Matrix<A>>>
where
    A: Scalar,
    F: FnMut(&Matrix<A>) -> Result<Option<Matrix<A>>>,
{
    let mut mapped = Vec::with_capacity(m.rows());
    for row in m.row_views() {
        match f(&row)? {
            Some(out) => mapped.push(out),
            None => return Ok(None),
        }
    }
    stack(&mapped).map(Some)
}

/// Marker form of [`map_cols`]; see [`try_map_rows`].
///
/// # Errors
///
/// Propagates errors from `f` and from reassembly.
pub fn try_map_cols<A, F>(m: &Matrix<A>, mut f: F) -> Result<Option<Matrix<A>>>
where
    A: Scalar,
    F: FnMut(&Matrix<A>) -> Result<Option<Matrix<A>>>,
{
    let mut mapped = Vec::with_capacity(m.cols());
    for col in m.col_views() {
        match f(&col)? {
            Some(out) => mapped.push(out),
            None => return Ok(None),
        }
    }
    augment(&mapped).map(Some)
}

/// Normalizes every row to unit 2-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the first zero row.
pub fn normalize_rows<A: Scalar>(m: &Matrix<A>) -> Result<Matrix<A>> {
    normalize_rows_with(m, <A::Real as NumCast>::from(2.0).unwrap())
}

/// Normalizes every row to unit p-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the first zero row and
/// with an invalid argument error for a norm order below 1.
pub fn normalize_rows_with<A: Scalar>(m: &Matrix<A>, p: A::Real) -> Result<Matrix<A>> {
    try_normalize_rows(m, p)?.ok_or(MatrustError::ZeroMatrix)
}

/// Marker form of [`normalize_rows_with`]: a zero row yields `Ok(None)`
/// instead of an error, with the remaining rows unprocessed.
///
/// # Errors
///
/// Returns an invalid argument error for a norm order below 1.
pub fn try_normalize_rows<A: Scalar>(m: &Matrix<A>, p: A::Real) -> Result<Option<Matrix<A>>> {
    try_map_rows(m, |row| try_normalize(row, p))
}

/// Normalizes every column to unit 2-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the first zero column.
pub fn normalize_cols<A: Scalar>(m: &Matrix<A>) -> Result<Matrix<A>> {
    normalize_cols_with(m, <A::Real as NumCast>::from(2.0).unwrap())
}

/// Normalizes every column to unit p-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the first zero column and
/// with an invalid argument error for a norm order below 1.
pub fn normalize_cols_with<A: Scalar>(m: &Matrix<A>, p: A::Real) -> Result<Matrix<A>> {
    try_normalize_cols(m, p)?.ok_or(MatrustError::ZeroMatrix)
}

/// Marker form of [`normalize_cols_with`]; see [`try_normalize_rows`].
///
/// # Errors
///
/// Returns an invalid argument error for a norm order below 1.
pub fn try_normalize_cols<A: Scalar>(m: &Matrix<A>, p: A::Real) -> Result<Option<Matrix<A>>> {
    try_map_cols(m, |col| try_normalize(col, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;
    use crate::ops::two_norm;
    use approx::assert_relative_eq;

    #[test]
    fn test_map_rows_reassembles_in_order() {
        let m = matrix!([[1.0, 2.0], [3.0, 4.0]]);
        let doubled = map_rows(&m, |row| Ok(row.scale(2.0))).unwrap();
        assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_map_cols_reassembles_in_order() {
        let m = matrix!([[1.0, 2.0], [3.0, 4.0]]);
        let negated = map_cols(&m, |col| Ok(col.scale(-1.0))).unwrap();
        assert_eq!(negated.to_vec(), vec![-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_map_rows_rejects_width_change() {
        let m = matrix!([[1.0, 2.0], [3.0, 4.0]]);
        let mut n = 0;
        let result = map_rows(&m, |row| {
            n += 1;
            if n == 1 {
                row.submatrix(0..1, 0..1)
            } else {
                Ok(row.clone())
            }
        });
        assert!(matches!(
            result.unwrap_err(),
            MatrustError::ConcatMismatch { axis: "cols", .. }
        ));
    }

    #[test]
    fn test_try_map_rows_short_circuits() {
        let m = matrix!([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let mut calls = 0;
        let result = try_map_rows(&m, |row| {
            calls += 1;
            if calls == 2 {
                Ok(None)
            } else {
                Ok(Some(row.clone()))
            }
        })
        .unwrap();
        assert!(result.is_none());
        // The third row was never visited.
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_map_rows_success() {
        let m = matrix!([[1.0, 2.0], [3.0, 4.0]]);
        let out = try_map_rows(&m, |row| Ok(Some(row.scale(10.0))))
            .unwrap()
            .unwrap();
        assert_eq!(out.to_vec(), vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_normalize_rows() {
        let m = matrix!([[3.0, 4.0], [5.0, 12.0]]);
        let unit = normalize_rows(&m).unwrap();
        assert_eq!(unit.shape(), (2, 2));
        for row in unit.row_views() {
            assert_relative_eq!(two_norm(&row), 1.0);
        }
        assert_relative_eq!(unit.at(0, 0), 0.6);
        assert_relative_eq!(unit.at(1, 1), 12.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_cols() {
        let m = matrix!([[3.0, 0.0], [4.0, 2.0]]);
        let unit = normalize_cols(&m).unwrap();
        for col in unit.col_views() {
            assert_relative_eq!(two_norm(&col), 1.0);
        }
        assert_relative_eq!(unit.at(0, 0), 0.6);
        assert_relative_eq!(unit.at(0, 1), 0.0);
        assert_relative_eq!(unit.at(1, 1), 1.0);
    }

    #[test]
    fn test_normalize_rows_zero_row() {
        let m = matrix!([[3.0, 4.0], [0.0, 0.0]]);
        assert!(matches!(
            normalize_rows(&m).unwrap_err(),
            MatrustError::ZeroMatrix
        ));
        assert!(try_normalize_rows(&m, 2.0).unwrap().is_none());
    }

    #[test]
    fn test_normalize_cols_zero_col() {
        let m = matrix!([[3.0, 0.0], [4.0, 0.0]]);
        assert!(matches!(
            normalize_cols(&m).unwrap_err(),
            MatrustError::ZeroMatrix
        ));
        assert!(try_normalize_cols(&m, 2.0).unwrap().is_none());
    }

    #[test]
    fn test_normalize_rows_with_one_norm() {
        let m = matrix!([[1.0, 3.0], [2.0, 2.0]]);
        let unit = normalize_rows_with(&m, 1.0).unwrap();
        assert_eq!(unit.to_vec(), vec![0.25, 0.75, 0.5, 0.5]);
    }
}
