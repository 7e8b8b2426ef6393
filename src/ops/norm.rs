//! Entrywise norms and inner products.
//!
//! All norms operate on the magnitude matrix and are non-negative reals,
//! even for complex input. The 2-norm and the general p-norm divide by
//! the largest magnitude before exponentiation, keeping every term in
//! `[0, 1]`: large entries cannot overflow and small entries cannot
//! underflow relative to the largest.

use crate::error::{MatrustError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use num_traits::{Float, NumCast, One, Zero};

/// Entrywise 1-norm: the sum of all element magnitudes.
pub fn one_norm<A: Scalar>(a: &Matrix<A>) -> A::Real {
    a.magnitude().sum()
}

/// Entrywise infinity norm: the largest element magnitude.
pub fn inf_norm<A: Scalar>(a: &Matrix<A>) -> A::Real {
    a.magnitude().max()
}

/// Entrywise 2-norm (Frobenius norm).
///
/// Returns the infinity norm directly when it is zero or non-finite,
/// which covers the all-zero matrix and propagates non-finite entries.
pub fn two_norm<A: Scalar>(a: &Matrix<A>) -> A::Real {
    // Magnitudes are materialized once; both passes read stored values.
    let mags = a.magnitude();
    let mx = mags.max();
    if !(mx.is_finite() && mx > A::Real::zero()) {
        return mx;
    }
    let total = mags.iter().fold(A::Real::zero(), |acc, m| {
        let r = m / mx;
        acc + r * r
    });
    mx * total.sqrt()
}

/// Entrywise p-norm: `(sum |a[i,j]|^p)^(1/p)`.
///
/// Callers must supply `p > 1`; [`norm`] validates the order before
/// dispatching here. Scaling matches [`two_norm`].
pub fn p_norm<A: Scalar>(a: &Matrix<A>, p: A::Real) -> A::Real {
    let mags = a.magnitude();
    let mx = mags.max();
    if !(mx.is_finite() && mx > A::Real::zero()) {
        return mx;
    }
    let total = mags
        .iter()
        .fold(A::Real::zero(), |acc, m| acc + (m / mx).powf(p));
    mx * total.powf(p.recip())
}

/// Entrywise norm of order `p`.
///
/// Dispatch: `1` to [`one_norm`], `2` to [`two_norm`], positive infinity
/// to [`inf_norm`], any other `p > 1` to [`p_norm`].
///
/// # Errors
///
/// Any order below 1 that is not positive infinity (including NaN) is an
/// invalid argument.
pub fn norm<A: Scalar>(a: &Matrix<A>, p: A::Real) -> Result<A::Real> {
    let one = A::Real::one();
    let two = <A::Real as NumCast>::from(2.0).unwrap();
    if p == one {
        Ok(one_norm(a))
    } else if p == two {
        Ok(two_norm(a))
    } else if p.is_infinite() && p > A::Real::zero() {
        Ok(inf_norm(a))
    } else if p > one {
        Ok(p_norm(a, p))
    } else {
        Err(MatrustError::invalid_argument(
            "p",
            format!("norm order must be at least 1 or +inf, got {p:?}"),
        ))
    }
}

/// Frobenius self inner product `sum a[i,j] * conj(a[i,j])` as a real.
///
/// Non-negative even for complex input; equals the real part of
/// [`dot`]`(a, a)`.
pub fn self_dot<A: Scalar>(a: &Matrix<A>) -> A::Real {
    a.iter()
        .fold(A::Real::zero(), |acc, x| acc + (x * x.conj()).re())
}

/// Frobenius inner product `sum a[i,j] * conj(b[i,j])`.
///
/// The conjugate is applied to the second argument only (the Hermitian
/// convention), so the result is not symmetric under swap for complex
/// input.
///
/// # Errors
///
/// Returns a shape mismatch error unless the shapes are identical.
pub fn dot<A: Scalar>(a: &Matrix<A>, b: &Matrix<A>) -> Result<A> {
    if a.shape() != b.shape() {
        return Err(MatrustError::shape_mismatch(a.shape(), b.shape()));
    }
    Ok(a.iter()
        .zip(b.iter())
        .fold(A::zero(), |acc, (x, y)| acc + x * y.conj()))
}

/// Cosine of the angle between two matrices under the Frobenius inner
/// product: `dot(a, b) / (two_norm(a) * two_norm(b))`.
///
/// # Errors
///
/// Returns a shape mismatch error unless the shapes are identical.
pub fn cos_angle<A: Scalar>(a: &Matrix<A>, b: &Matrix<A>) -> Result<A> {
    let d = dot(a, b)?;
    Ok(d / A::from_real(two_norm(a) * two_norm(b)))
}

/// Angle between two matrices: the arc cosine of [`cos_angle`].
///
/// Real-valued for real inputs; for complex inputs this is the
/// generalized complex arccosine.
///
/// # Errors
///
/// Returns a shape mismatch error unless the shapes are identical.
pub fn angle<A: Scalar>(a: &Matrix<A>, b: &Matrix<A>) -> Result<A> {
    Ok(cos_angle(a, b)?.acos())
}

/// Normalizes to unit p-norm, returning `None` when the norm is exactly
/// zero.
///
/// The input is forced first, so the norm pass and the scaling pass read
/// stored values. The zero check is exact, not tolerance-based; the
/// approximate predicate is [`is_zero_within`](crate::ops::is_zero_within).
///
/// # Errors
///
/// Returns an invalid argument error for a norm order below 1.
pub fn try_normalize<A: Scalar>(a: &Matrix<A>, p: A::Real) -> Result<Option<Matrix<A>>> {
    let forced = a.force();
    let x = norm(&forced, p)?;
    if x == A::Real::zero() {
        return Ok(None);
    }
    Ok(Some(forced.scale(x.recip())))
}

/// Normalizes to unit 2-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the zero matrix; callers
/// wanting a sentinel instead match on [`try_normalize`].
pub fn normalize<A: Scalar>(a: &Matrix<A>) -> Result<Matrix<A>> {
    normalize_with(a, <A::Real as NumCast>::from(2.0).unwrap())
}

/// Normalizes to unit p-norm.
///
/// # Errors
///
/// Fails with [`MatrustError::ZeroMatrix`] on the zero matrix and with an
/// invalid argument error for a norm order below 1.
pub fn normalize_with<A: Scalar>(a: &Matrix<A>, p: A::Real) -> Result<Matrix<A>> {
    try_normalize(a, p)?.ok_or(MatrustError::ZeroMatrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    #[test]
    fn test_norms_of_three_four() {
        let m = matrix!([[3.0, 4.0]]);
        assert_relative_eq!(two_norm(&m), 5.0);
        assert_relative_eq!(inf_norm(&m), 4.0);
        assert_relative_eq!(one_norm(&m), 7.0);
    }

    #[test]
    fn test_p_norm() {
        let m = matrix!([[1.0, 2.0, 2.0]]);
        assert_relative_eq!(p_norm(&m, 3.0), 17.0f64.powf(1.0 / 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_norm_dispatch() {
        let m = matrix!([[3.0, 4.0]]);
        assert_relative_eq!(norm(&m, 1.0).unwrap(), 7.0);
        assert_relative_eq!(norm(&m, 2.0).unwrap(), 5.0);
        assert_relative_eq!(norm(&m, f64::INFINITY).unwrap(), 4.0);
        assert_relative_eq!(norm(&m, 3.0).unwrap(), p_norm(&m, 3.0));
        assert!(norm(&m, 0.5).is_err());
        assert!(norm(&m, -1.0).is_err());
        assert!(norm(&m, f64::NEG_INFINITY).is_err());
        assert!(norm(&m, f64::NAN).is_err());
    }

    #[test]
    fn test_scaling_survives_large_entries() {
        // A naive sum of squares overflows to infinity at 1e300.
        let m = matrix!([[3.0e300, 4.0e300]]);
        assert_relative_eq!(two_norm(&m), 5.0e300, max_relative = 1e-12);
    }

    #[test]
    fn test_scaling_survives_small_entries() {
        // A naive sum of squares underflows to zero at 1e-300.
        let m = matrix!([[3.0e-300, 4.0e-300]]);
        assert_relative_eq!(two_norm(&m), 5.0e-300, max_relative = 1e-12);
    }

    #[test]
    fn test_norm_propagates_non_finite() {
        let m = matrix!([[f64::INFINITY, 1.0]]);
        assert_eq!(two_norm(&m), f64::INFINITY);
        assert!(two_norm(&matrix!([[f64::NAN]])).is_nan());
    }

    #[test]
    fn test_zero_matrix_norms() {
        let z = crate::Matrix::<f64>::zeros(2, 3);
        assert_eq!(one_norm(&z), 0.0);
        assert_eq!(two_norm(&z), 0.0);
        assert_eq!(inf_norm(&z), 0.0);
        assert_eq!(p_norm(&z, 3.0), 0.0);
    }

    #[test]
    fn test_complex_norms_are_real() {
        let m = crate::Matrix::from_vec(vec![Complex::new(3.0f64, 4.0)], 1, 1).unwrap();
        assert_relative_eq!(two_norm(&m), 5.0);
        assert_relative_eq!(one_norm(&m), 5.0);
        assert_relative_eq!(inf_norm(&m), 5.0);
    }

    #[test]
    fn test_dot_real_case() {
        let a = matrix!([[1.0, 1.0]]);
        let b = matrix!([[2.0, 3.0]]);
        assert_relative_eq!(dot(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn test_dot_rejects_shape_mismatch() {
        let a = matrix!([[1.0, 2.0]]);
        let b = matrix!([[1.0], [2.0]]);
        assert!(matches!(
            dot(&a, &b).unwrap_err(),
            MatrustError::ShapeMismatch {
                expected: (1, 2),
                actual: (2, 1),
            }
        ));
    }

    #[test]
    fn test_dot_conjugates_second_argument() {
        let i = Complex::new(0.0f64, 1.0);
        let one = Complex::new(1.0f64, 0.0);
        let a = crate::Matrix::from_vec(vec![i], 1, 1).unwrap();
        let b = crate::Matrix::from_vec(vec![one], 1, 1).unwrap();
        assert_eq!(dot(&a, &b).unwrap(), i);
        assert_eq!(dot(&b, &a).unwrap(), -i);
    }

    #[test]
    fn test_self_dot_matches_dot() {
        let m = crate::Matrix::from_vec(
            vec![Complex::new(1.0f64, 2.0), Complex::new(-3.0, 0.5)],
            1,
            2,
        )
        .unwrap();
        let d = self_dot(&m);
        assert!(d >= 0.0);
        let dd = dot(&m, &m).unwrap();
        assert_relative_eq!(dd.re, d);
        assert_relative_eq!(dd.im, 0.0);
    }

    #[test]
    fn test_cos_angle_and_angle() {
        let a = matrix!([[1.0, 0.0]]);
        let b = matrix!([[0.0, 1.0]]);
        assert_relative_eq!(cos_angle(&a, &b).unwrap(), 0.0);
        assert_relative_eq!(angle(&a, &b).unwrap(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(cos_angle(&a, &a).unwrap(), 1.0);
        assert_relative_eq!(angle(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let m = matrix!([[3.0, 4.0]]);
        let unit = normalize(&m).unwrap();
        assert_relative_eq!(unit.at(0, 0), 0.6);
        assert_relative_eq!(unit.at(0, 1), 0.8);
        assert_relative_eq!(two_norm(&unit), 1.0);
    }

    #[test]
    fn test_normalize_zero_matrix() {
        let z = matrix!([[0.0, 0.0], [0.0, 0.0]]);
        assert!(matches!(
            normalize(&z).unwrap_err(),
            MatrustError::ZeroMatrix
        ));
        assert!(try_normalize(&z, 2.0).unwrap().is_none());
    }

    #[test]
    fn test_normalize_with_one_norm() {
        let m = matrix!([[1.0, 3.0]]);
        let unit = normalize_with(&m, 1.0).unwrap();
        assert_relative_eq!(one_norm(&unit), 1.0);
        assert_eq!(unit.to_vec(), vec![0.25, 0.75]);
    }
}
