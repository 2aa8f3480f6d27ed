//! Implementations of `std::ops`.
//!
//! Operators whose result is undefined for some operands (mismatched dimensions, division by zero)
//! return a [`Result`] as their `Output`. Use `?` on the result, or the `try_*_assign` methods on
//! [`Vector`] for the compound forms.

use std::ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::approx::ApproxEq;
use crate::error::{Error, Result};

use super::Vector;

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

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<&[f64]> for Vector {
    fn eq(&self, other: &&[f64]) -> bool {
        *self.0 == **other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<Vec<f64>> for Vector {
    fn eq(&self, other: &Vec<f64>) -> bool {
        *self.0 == **other
    }
}

impl PartialEq<Vector> for [f64] {
    fn eq(&self, other: &Vector) -> bool {
        *self == *other.0
    }
}

impl ApproxEq for Vector {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_slice()
            .ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Self::Output {
        self.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Implements an element-wise binary operator for all combinations of owned and borrowed
/// operands.
///
/// Owned left operands have their buffer reused for the result.
macro_rules! elementwise_binop {
    ($Op:ident :: $op:ident, $try_assign:ident, $f:expr, $doc:literal) => {
        #[doc = $doc]
        impl $Op<&Vector> for &Vector {
            type Output = Result<Vector>;

            fn $op(self, rhs: &Vector) -> Self::Output {
                self.zip_map(rhs, $f)
            }
        }

        #[doc = $doc]
        impl $Op<&Vector> for Vector {
            type Output = Result<Vector>;

            fn $op(mut self, rhs: &Vector) -> Self::Output {
                self.$try_assign(rhs)?;
                Ok(self)
            }
        }

        #[doc = $doc]
        impl $Op<Vector> for Vector {
            type Output = Result<Vector>;

            fn $op(self, rhs: Vector) -> Self::Output {
                $Op::$op(self, &rhs)
            }
        }

        #[doc = $doc]
        impl $Op<Vector> for &Vector {
            type Output = Result<Vector>;

            fn $op(self, rhs: Vector) -> Self::Output {
                $Op::$op(self, &rhs)
            }
        }
    };
}

elementwise_binop!(Add::add, try_add_assign, |l, r| l + r, "Element-wise addition.");
elementwise_binop!(Sub::sub, try_sub_assign, |l, r| l - r, "Element-wise subtraction.");

/// Dot product.
impl Mul<&Vector> for &Vector {
    type Output = Result<f64>;

    #[inline]
    fn mul(self, rhs: &Vector) -> Self::Output {
        self.dot(rhs)
    }
}

/// Dot product.
impl Mul<Vector> for &Vector {
    type Output = Result<f64>;

    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

/// Dot product.
impl Mul<&Vector> for Vector {
    type Output = Result<f64>;

    #[inline]
    fn mul(self, rhs: &Vector) -> Self::Output {
        self.dot(rhs)
    }
}

/// Dot product.
impl Mul<Vector> for Vector {
    type Output = Result<f64>;

    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

// NB: `*` between two vectors is the dot product, so there is no element-wise multiplication
// operator.

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

/// Scalar-Vector multiplication (scaling).
impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs * self
    }
}

/// Vector-Scalar multiplication (scaling).
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-Scalar division. Fails with [`Error::DivisionByZero`] if the divisor is zero.
impl Div<f64> for Vector {
    type Output = Result<Vector>;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.try_div_assign(rhs)?;
        Ok(self)
    }
}

/// Vector-Scalar division. Fails with [`Error::DivisionByZero`] if the divisor is zero.
impl Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Self::Output {
        Error::check_divisor(rhs)?;
        Ok(self.map(|elem| elem / rhs))
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    fn v(values: &[f64]) -> Vector {
        Vector::from_slice(values)
    }

    #[test]
    fn add_sub() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!((&a + &b).unwrap(), [5.0, 7.0, 9.0]);
        assert_eq!((&b - &a).unwrap(), [3.0, 3.0, 3.0]);
        assert_eq!((a.clone() + &b).unwrap(), [5.0, 7.0, 9.0]);
        assert_eq!((a.clone() - b.clone()).unwrap(), [-3.0, -3.0, -3.0]);
        assert_eq!((&a + b.clone()).unwrap(), [5.0, 7.0, 9.0]);

        // Borrowed operands are not touched.
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(b, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn mismatch_reports_lhs_first() {
        let a = Vector::new(2);
        let b = Vector::new(4);
        assert_eq!(&a + &b, Err(Error::DimensionMismatch { lhs: 2, rhs: 4 }));
        assert_eq!(&b - &a, Err(Error::DimensionMismatch { lhs: 4, rhs: 2 }));
        assert_eq!(
            a.clone() - b.clone(),
            Err(Error::DimensionMismatch { lhs: 2, rhs: 4 })
        );
        assert_eq!(&a * &b, Err(Error::DimensionMismatch { lhs: 2, rhs: 4 }));
    }

    #[test]
    fn dot_operator() {
        let a = v(&[1.0, 3.0, -5.0]);
        let b = v(&[4.0, -2.0, -1.0]);
        assert_eq!(&a * &b, Ok(3.0));
        assert_eq!(&a * b.clone(), Ok(3.0));
        assert_eq!(a.clone() * &b, Ok(3.0));
        assert_eq!(a * b, Ok(3.0));

        let short = Vector::new(2);
        assert_eq!(
            &short * Vector::new(4),
            Err(Error::DimensionMismatch { lhs: 2, rhs: 4 })
        );
        assert_eq!(
            Vector::new(4) * &short,
            Err(Error::DimensionMismatch { lhs: 4, rhs: 2 })
        );
    }

    #[test]
    fn scale() {
        let a = v(&[2.0, -3.0, 0.5]);
        assert_eq!(&a * 3.0, [6.0, -9.0, 1.5]);
        assert_eq!(3.0 * &a, [6.0, -9.0, 1.5]);
        assert_eq!(a.clone() * 0.0, [0.0, 0.0, 0.0]);

        let mut b = a.clone();
        b *= -2.0;
        assert_eq!(b, [-4.0, 6.0, -1.0]);
        assert_eq!(-b, [4.0, -6.0, 1.0]);
        assert_eq!(-&a, [-2.0, 3.0, -0.5]);
    }

    #[test]
    fn div() {
        let a = v(&[2.0, -3.0]);
        assert_eq!((&a / 2.0).unwrap(), [1.0, -1.5]);
        assert_eq!(&a / 0.0, Err(Error::DivisionByZero));
        assert_eq!(a.clone() / -0.0, Err(Error::DivisionByZero));
        assert_eq!((a / 4.0).unwrap(), [0.5, -0.75]);
    }

    #[test]
    fn eq() {
        let a = v(&[5.0, 4.0]);
        assert_eq!(a, [5.0, 4.0]);
        assert_eq!(a, vec![5.0, 4.0]);
        assert_eq!(a, &[5.0, 4.0][..]);
        assert_ne!(a, v(&[4.0, 5.0]));
        assert_ne!(a, v(&[5.0, 4.0, 0.0]));
        assert_ne!(v(&[f64::NAN]), v(&[f64::NAN]));
        assert_eq!(Vector::new(0), Vector::default());
    }

    #[test]
    fn approx() {
        let a = v(&[0.1 + 0.2, 1.0]);
        assert_ne!(a, [0.3, 1.0]);
        assert_approx_eq!(a, v(&[0.3, 1.0]));
        assert_approx_ne!(a, v(&[0.3, 1.1]));
        assert_approx_ne!(v(&[0.3]), v(&[0.3, 1.0])).abs(10.0);
    }
}
