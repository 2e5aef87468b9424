//! # Vector Module
//!
//! Mutable single precision vectors of dimension 2, 3 and 4.
//!
//! All vectors implement [`Vector`]. Mutating operations work in place and
//! return `&mut Self`, so calls chain:
//!
//! ```
//! use mathlib_core::{Vector, Vector3f};
//!
//! let mut v = Vector3f::new(3.0, 0.0, 4.0);
//! v.scl(2.0).nor();
//! assert!(v.is_unit_eps(1e-6));
//! ```
//!
//! Copying is plain `Copy`; there is no separate copy method.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2f;
pub use vector3::Vector3f;
pub use vector4::Vector4f;

use crate::primitives::EPSILON;
use std::fmt;

// =============================================================================
// VECTOR TRAIT
// =============================================================================

/// Interface shared by all mutable vectors.
///
/// Implementors provide the three component-wise primitives
/// ([`apply`](Vector::apply), [`combine`](Vector::combine) and
/// [`fold_with`](Vector::fold_with)); everything else is derived from them.
pub trait Vector: Copy + Default + PartialEq + fmt::Debug + fmt::Display {
    /// Number of components.
    const DIMENSIONS: usize;

    /// Applies `f` to every component.
    fn apply(&mut self, f: impl FnMut(f32) -> f32) -> &mut Self;

    /// Replaces every component `a` with `f(a, b)`, where `b` is the matching
    /// component of `v`.
    fn combine(&mut self, v: &Self, f: impl FnMut(f32, f32) -> f32) -> &mut Self;

    /// Folds over component pairs of `self` and `v`.
    fn fold_with<T>(&self, v: &Self, init: T, f: impl FnMut(T, f32, f32) -> T) -> T;

    /// A zero vector.
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }

    /// Sets the components of this vector to the components of `v`.
    fn set(&mut self, v: &Self) -> &mut Self {
        *self = *v;
        self
    }

    /// Sets every component of this vector to `value`.
    fn set_scalar(&mut self, value: f32) -> &mut Self {
        self.apply(|_| value)
    }

    /// Sets this vector to zero.
    fn set_zero(&mut self) -> &mut Self {
        self.set_scalar(0.0)
    }

    /// Normalizes this vector. Does nothing if the length is zero.
    fn nor(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        let len = self.len();
        self.div(len)
    }

    /// The length of this vector.
    fn len(&self) -> f32 {
        self.len2().sqrt()
    }

    /// The squared length of this vector.
    ///
    /// Avoids the square root; prefer it for comparisons.
    fn len2(&self) -> f32 {
        self.dot(self)
    }

    /// Limits the length of this vector to `limit`.
    fn limit(&mut self, limit: f32) -> &mut Self {
        self.limit2(limit * limit)
    }

    /// Limits the squared length of this vector to `limit2`.
    fn limit2(&mut self, limit2: f32) -> &mut Self {
        let len2 = self.len2();
        if len2 > limit2 {
            self.scl((limit2 / len2).sqrt());
        }
        self
    }

    /// Rescales this vector to the given length. A zero vector stays zero.
    fn set_length(&mut self, length: f32) -> &mut Self {
        self.set_length2(length * length)
    }

    /// Rescales this vector to the given squared length. A zero vector stays zero.
    fn set_length2(&mut self, length2: f32) -> &mut Self {
        let old = self.len2();
        if old == 0.0 || old == length2 {
            return self;
        }
        self.scl((length2 / old).sqrt())
    }

    /// Clamps the length of this vector between `min_length` and `max_length`.
    fn clamp(&mut self, min_length: f32, max_length: f32) -> &mut Self {
        let len2 = self.len2();
        if len2 == 0.0 {
            return self;
        }
        let max2 = max_length * max_length;
        if len2 > max2 {
            return self.scl((max2 / len2).sqrt());
        }
        let min2 = min_length * min_length;
        if len2 < min2 {
            return self.scl((min2 / len2).sqrt());
        }
        self
    }

    /// Adds `v` to this vector.
    fn add(&mut self, v: &Self) -> &mut Self {
        self.combine(v, |a, b| a + b)
    }

    /// Adds `value` to every component.
    fn add_scalar(&mut self, value: f32) -> &mut Self {
        self.apply(|a| a + value)
    }

    /// Subtracts `v` from this vector.
    fn sub(&mut self, v: &Self) -> &mut Self {
        self.combine(v, |a, b| a - b)
    }

    /// Subtracts `value` from every component.
    fn sub_scalar(&mut self, value: f32) -> &mut Self {
        self.apply(|a| a - value)
    }

    /// Scales this vector by `scalar`.
    fn scl(&mut self, scalar: f32) -> &mut Self {
        self.apply(|a| a * scalar)
    }

    /// Coordinate-wise multiplication (Hadamard product) with `v`.
    fn scl_vec(&mut self, v: &Self) -> &mut Self {
        self.combine(v, |a, b| a * b)
    }

    /// Divides every component by `divisor`.
    fn div(&mut self, divisor: f32) -> &mut Self {
        self.apply(|a| a / divisor)
    }

    /// Coordinate-wise division by `v`.
    fn div_vec(&mut self, v: &Self) -> &mut Self {
        self.combine(v, |a, b| a / b)
    }

    /// The distance to `v`.
    fn dst(&self, v: &Self) -> f32 {
        self.dst2(v).sqrt()
    }

    /// The squared distance to `v`.
    fn dst2(&self, v: &Self) -> f32 {
        self.fold_with(v, 0.0, |acc, a, b| {
            let d = b - a;
            acc + d * d
        })
    }

    /// Linearly interpolates from this vector towards `v`.
    ///
    /// `alpha = 0` keeps this vector, `alpha = 1` yields `v`.
    fn lerp(&mut self, v: &Self, alpha: f32) -> &mut Self {
        self.combine(v, |a, b| a + (b - a) * alpha)
    }

    /// Adds `v` scaled by `scalar` to this vector.
    fn add_mul(&mut self, v: &Self, scalar: f32) -> &mut Self {
        self.combine(v, |a, b| a + b * scalar)
    }

    /// The dot product between this vector and `v`.
    fn dot(&self, v: &Self) -> f32 {
        self.fold_with(v, 0.0, |acc, a, b| acc + a * b)
    }

    /// Sets this vector to the vector pointing from this vector to `v`.
    fn to(&mut self, v: &Self) -> &mut Self {
        self.combine(v, |a, b| b - a)
    }

    /// Whether this vector lies on the line spanned by `v`.
    fn is_on_line(&self, v: &Self) -> bool {
        self.is_on_line_eps(v, EPSILON)
    }

    /// Whether this vector approximately lies on the line spanned by `v`.
    ///
    /// Compares `sin²θ` against `epsilon` through the Lagrange identity
    /// `|a|²|b|² - (a·b)² = |a|²|b|² sin²θ`, so the result does not depend on
    /// the scale of either vector. A zero vector lies on every line.
    fn is_on_line_eps(&self, v: &Self, epsilon: f32) -> bool {
        // Accumulated in f64: the residual cancels almost entirely for parallel inputs.
        let (dot, a2, b2) = self.fold_with(v, (0.0f64, 0.0f64, 0.0f64), |(d, aa, bb), a, b| {
            let (a, b) = (f64::from(a), f64::from(b));
            (d + a * b, aa + a * a, bb + b * b)
        });
        let product = a2 * b2;
        if product == 0.0 {
            return true;
        }
        (product - dot * dot).abs() <= f64::from(epsilon) * product
    }

    /// Whether this vector is collinear with `v` and points the same way.
    fn is_collinear(&self, v: &Self) -> bool {
        self.is_collinear_eps(v, EPSILON)
    }

    fn is_collinear_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.is_on_line_eps(v, epsilon) && self.has_same_direction(v)
    }

    /// Whether this vector is collinear with `v` and points the opposite way.
    fn is_collinear_opposite(&self, v: &Self) -> bool {
        self.is_collinear_opposite_eps(v, EPSILON)
    }

    fn is_collinear_opposite_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.is_on_line_eps(v, epsilon) && self.has_opposite_direction(v)
    }

    /// Whether the dot product with `v` is zero.
    fn is_orthogonal(&self, v: &Self) -> bool {
        self.is_orthogonal_eps(v, EPSILON)
    }

    fn is_orthogonal_eps(&self, v: &Self, epsilon: f32) -> bool {
        self.dot(v).abs() <= epsilon
    }

    /// Whether the dot product with `v` is positive.
    fn has_same_direction(&self, v: &Self) -> bool {
        self.dot(v) > 0.0
    }

    /// Whether the dot product with `v` is negative.
    fn has_opposite_direction(&self, v: &Self) -> bool {
        self.dot(v) < 0.0
    }

    /// Whether this vector has unit length.
    fn is_unit(&self) -> bool {
        self.is_unit_eps(EPSILON)
    }

    fn is_unit_eps(&self, epsilon: f32) -> bool {
        (self.len2() - 1.0).abs() <= epsilon
    }

    /// Whether every component is exactly zero.
    fn is_zero(&self) -> bool {
        self.fold_with(self, true, |acc, a, _| acc && a == 0.0)
    }

    /// Whether every component is within `epsilon` of the matching component of `v`.
    fn eps_equals(&self, v: &Self, epsilon: f32) -> bool {
        self.fold_with(v, true, |acc, a, b| acc && (a - b).abs() <= epsilon)
    }

    /// Whether every component is identical to the matching component of `v`.
    fn idt(&self, v: &Self) -> bool {
        self.fold_with(v, true, |acc, a, b| acc && a == b)
    }

    /// Approximate identity: every component within `epsilon`.
    fn eps_idt(&self, v: &Self, epsilon: f32) -> bool {
        self.eps_equals(v, epsilon)
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Implements the arithmetic operators for a vector type in terms of the
/// [`Vector`] trait.
macro_rules! impl_vector_ops {
    ($ty:ty) => {
        impl std::ops::Add for $ty {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                $crate::Vector::add(&mut self, &rhs);
                self
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                $crate::Vector::sub(&mut self, &rhs);
                self
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = Self;

            fn mul(mut self, rhs: f32) -> Self {
                $crate::Vector::scl(&mut self, rhs);
                self
            }
        }

        impl std::ops::Mul<$ty> for f32 {
            type Output = $ty;

            fn mul(self, mut rhs: $ty) -> $ty {
                $crate::Vector::scl(&mut rhs, self);
                rhs
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = Self;

            fn div(mut self, rhs: f32) -> Self {
                $crate::Vector::div(&mut self, rhs);
                self
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;

            fn neg(mut self) -> Self {
                $crate::Vector::apply(&mut self, |a| -a);
                self
            }
        }

        impl std::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $crate::Vector::add(self, &rhs);
            }
        }

        impl std::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $crate::Vector::sub(self, &rhs);
            }
        }

        impl std::ops::MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                $crate::Vector::scl(self, rhs);
            }
        }

        impl std::ops::DivAssign<f32> for $ty {
            fn div_assign(&mut self, rhs: f32) {
                $crate::Vector::div(self, rhs);
            }
        }
    };
}

pub(crate) use impl_vector_ops;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::eps_equals;

    #[test]
    fn operators_match_methods() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3f::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3f::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3f::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, b);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vector2f::new(0.0, 10.0);
        let b = Vector2f::new(10.0, 0.0);

        let (mut start, mut end, mut mid) = (a, a, a);
        start.lerp(&b, 0.0);
        end.lerp(&b, 1.0);
        mid.lerp(&b, 0.5);

        assert_eq!(start, a);
        assert_eq!(end, b);
        assert_eq!(mid, Vector2f::new(5.0, 5.0));
    }

    #[test]
    fn add_mul_scales_argument() {
        let mut v = Vector2f::new(1.0, 1.0);
        v.add_mul(&Vector2f::new(2.0, -1.0), 3.0);
        assert_eq!(v, Vector2f::new(7.0, -2.0));
    }

    #[test]
    fn to_points_from_self() {
        let mut v = Vector3f::new(1.0, 1.0, 1.0);
        v.to(&Vector3f::new(4.0, 5.0, 6.0));
        assert_eq!(v, Vector3f::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn distance() {
        let a = Vector2f::new(1.0, 1.0);
        let b = Vector2f::new(4.0, 5.0);
        assert_eq!(a.dst2(&b), 25.0);
        assert_eq!(a.dst(&b), 5.0);
    }

    #[test]
    fn line_relations() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let same = Vector3f::new(2.0, 4.0, 6.0);
        let opposite = Vector3f::new(-3.0, -6.0, -9.0);
        let other = Vector3f::new(3.0, 0.0, -1.0);

        assert!(v.is_on_line(&same));
        assert!(v.is_on_line(&opposite));
        assert!(v.is_collinear(&same));
        assert!(!v.is_collinear(&opposite));
        assert!(v.is_collinear_opposite(&opposite));
        assert!(!v.is_on_line(&other));
        assert!(v.is_orthogonal(&other));
        assert!(v.has_same_direction(&same));
        assert!(v.has_opposite_direction(&opposite));
    }

    #[test]
    fn approximate_line_relations() {
        let v = Vector2f::new(1.0, 0.0);
        let nearly = Vector2f::new(1.0, 0.001);

        assert!(!v.is_on_line(&nearly));
        assert!(v.is_on_line_eps(&nearly, 1e-5));
        assert!(v.is_collinear_eps(&nearly, 1e-5));
        assert!(!v.is_orthogonal_eps(&nearly, 1e-5));
        assert!(v.is_orthogonal_eps(&Vector2f::new(0.001, 1.0), 1e-2));
    }

    #[test]
    fn line_test_ignores_scale() {
        let tiny = Vector2f::new(0.001, 0.0);
        assert!(!tiny.is_on_line(&Vector2f::new(0.0, 0.001)));
        assert!(!Vector2f::new(0.01, 0.0).is_collinear(&Vector2f::new(0.01, 0.01)));

        let a = Vector3f::new(1.1, 2.2, 3.3);
        let b = Vector3f::new(3.3, 6.6, 9.9);
        assert!(a.is_on_line(&b));
        assert!(a.is_collinear(&b));

        let mut huge = a;
        huge.scl(1.0e4);
        assert!(huge.is_collinear(&b));
        assert!(!huge.is_on_line(&Vector3f::new(3.3, 6.6, -9.9)));
    }

    #[test]
    fn zero_vector_lies_on_every_line() {
        let zero = Vector2f::zero();
        assert!(zero.is_on_line(&Vector2f::new(1.0, 2.0)));
        assert!(Vector2f::new(1.0, 2.0).is_on_line(&zero));
        assert!(!zero.is_collinear_opposite(&Vector2f::new(1.0, 2.0)));
    }

    #[test]
    fn zero_vector_has_no_direction() {
        let zero = Vector3f::zero();
        let v = Vector3f::unit_x();

        assert!(!zero.has_same_direction(&v));
        assert!(!zero.has_opposite_direction(&v));
        assert!(!zero.is_collinear(&v));
        assert!(zero.is_orthogonal(&v));
    }

    #[test]
    fn limit_set_length_and_clamp_leave_zero_alone() {
        let mut v = Vector4f::zero();
        v.limit(1.0).set_length(5.0).clamp(2.0, 3.0).nor();
        assert!(v.is_zero());
    }

    #[test]
    fn set_length_rescales() {
        let mut v = Vector2f::new(3.0, 4.0);
        v.set_length(10.0);
        assert!(eps_equals(v.len(), 10.0, 1e-5));
        assert!(v.is_collinear_eps(&Vector2f::new(3.0, 4.0), 1e-3));
    }
}
