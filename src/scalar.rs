//! Scalar element support for real and complex matrices.
//!
//! The numeric-analysis operations are generic over a minimal capability
//! set rather than over `Float` directly, so that real and complex
//! matrices share one code path: conjugation is the identity for reals
//! and the complex conjugate for `Complex<T>`, and every norm comes back
//! as the scalar's underlying real type.

use num_complex::Complex;
use num_traits::{Float, Num};
use std::fmt::Debug;
use std::ops::Neg;

/// Numeric capability required of matrix elements.
pub trait Scalar: Num + Neg<Output = Self> + Copy + Debug + Send + Sync + 'static {
    /// The real type underlying this scalar. Norms, magnitudes, and
    /// tolerances are always values of this type, even for complex input.
    type Real: Float + Scalar<Real = Self::Real>;

    /// Complex conjugate; the identity for real scalars.
    fn conj(self) -> Self;

    /// Absolute value / complex modulus.
    fn modulus(self) -> Self::Real;

    /// Embed a real value into this scalar type.
    fn from_real(re: Self::Real) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Multiply by a real factor.
    fn scale(self, k: Self::Real) -> Self;

    /// Arc cosine; the generalized complex arccosine for complex scalars.
    fn acos(self) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn modulus(self) -> Self::Real {
                self.abs()
            }

            #[inline]
            fn from_real(re: Self::Real) -> Self {
                re
            }

            #[inline]
            fn re(self) -> Self::Real {
                self
            }

            #[inline]
            fn scale(self, k: Self::Real) -> Self {
                self * k
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }
        }
    )*};
}

impl_real_scalar!(f32, f64);

impl<T> Scalar for Complex<T>
where
    T: Float + Scalar<Real = T>,
{
    type Real = T;

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn modulus(self) -> Self::Real {
        self.norm()
    }

    #[inline]
    fn from_real(re: T) -> Self {
        Complex::new(re, T::zero())
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn scale(self, k: T) -> Self {
        Complex::new(self.re * k, self.im * k)
    }

    #[inline]
    fn acos(self) -> Self {
        Complex::acos(self)
    }
}
