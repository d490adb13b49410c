//! Implementations of `std::ops`.
//!
//! Binary operators panic when the operand dimensions differ. The `try_*` methods on [`Vector`]
//! are the non-panicking equivalents.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{or_panic, Vector};

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Exact, element-wise comparison.
///
/// Vectors of different dimension are never equal.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.as_slice() == other
    }
}

/// Approximate, element-wise comparison.
///
/// Vectors of different dimension are never approximately equal.
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dim() == other.dim()
            && <[f64] as AbsDiffEq>::abs_diff_eq(self.as_slice(), other.as_slice(), epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.dim() == other.dim()
            && <[f64] as RelativeEq>::relative_eq(
                self.as_slice(),
                other.as_slice(),
                epsilon,
                max_relative,
            )
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.dim() == other.dim()
            && <[f64] as UlpsEq>::ulps_eq(self.as_slice(), other.as_slice(), epsilon, max_ulps)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Element-wise addition.
impl Add<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn add(self, rhs: &Vector) -> Self::Output {
        or_panic(self.try_add(rhs))
    }
}

/// Element-wise subtraction.
impl Sub<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(self, rhs: &Vector) -> Self::Output {
        or_panic(self.try_sub(rhs))
    }
}

// Forwards the owned/borrowed operand combinations to the `&Vector op &Vector` impl.
macro_rules! forward_binop {
    ($($imp:ident::$method:ident),+) => {
        $(
            impl $imp<Vector> for Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(self, rhs: Vector) -> Self::Output {
                    (&self).$method(&rhs)
                }
            }

            impl $imp<&Vector> for Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(self, rhs: &Vector) -> Self::Output {
                    (&self).$method(rhs)
                }
            }

            impl $imp<Vector> for &Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(self, rhs: Vector) -> Self::Output {
                    self.$method(&rhs)
                }
            }
        )+
    };
}
forward_binop!(Add::add, Sub::sub);

/// Element-wise addition.
impl AddAssign<&Vector> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector) {
        or_panic(crate::VectorError::check_dims(self.dim(), rhs.dim()));
        self.0
            .iter_mut()
            .zip(rhs.iter())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

impl AddAssign<Vector> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: Vector) {
        *self += &rhs;
    }
}

/// Element-wise subtraction.
impl SubAssign<&Vector> for Vector {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Vector) {
        or_panic(crate::VectorError::check_dims(self.dim(), rhs.dim()));
        self.0
            .iter_mut()
            .zip(rhs.iter())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

impl SubAssign<Vector> for Vector {
    #[track_caller]
    fn sub_assign(&mut self, rhs: Vector) {
        *self -= &rhs;
    }
}

// NB: scaling is only offered on owned vectors. Scaling a borrowed vector has to go through an
// explicit `clone()`.

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}
