//! # Scalar Helpers
//!
//! Common math operations on plain floats and integers.

use crate::primitives::{EPSILON, EPSILON_D};

/// Square root of a single precision float.
#[inline]
#[must_use]
pub fn sqrt(a: f32) -> f32 {
    a.sqrt()
}

/// Whether `a` and `b` differ by at most `epsilon`.
#[inline]
#[must_use]
pub fn eps_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// [`eps_equals`] with the default [`EPSILON`].
#[inline]
#[must_use]
pub fn nearly_equal(a: f32, b: f32) -> bool {
    eps_equals(a, b, EPSILON)
}

/// Double precision variant of [`eps_equals`].
#[inline]
#[must_use]
pub fn eps_equals_f64(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// [`eps_equals_f64`] with the default [`EPSILON_D`].
#[inline]
#[must_use]
pub fn nearly_equal_f64(a: f64, b: f64) -> bool {
    eps_equals_f64(a, b, EPSILON_D)
}

/// Clamps `v` between `min` and `max`.
///
/// Works for any ordered type (floats, `i16`, `i32`, `i64`, ...). NaN inputs
/// compare false on both sides and are returned unchanged.
#[inline]
#[must_use]
pub fn clamp<T: PartialOrd>(v: T, min: T, max: T) -> T {
    if v > max {
        return max;
    }
    if v < min {
        return min;
    }
    v
}

/// Clamps `v` between 0 and 1.
#[inline]
#[must_use]
pub fn clamp01<T: PartialOrd + From<u8>>(v: T) -> T {
    clamp(v, T::from(0), T::from(1))
}

/// Maps `v` from the range `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Values outside the input range are extrapolated, not clamped.
#[inline]
#[must_use]
pub fn map(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (v - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Linear interpolation from `a` to `b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, alpha: f32) -> f32 {
    a + (b - a) * alpha
}

#[inline]
#[must_use]
pub fn to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[inline]
#[must_use]
pub fn to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eps_equals_within_epsilon() {
        assert!(eps_equals(1.0, 1.05, 0.1));
        assert!(!eps_equals(1.0, 1.2, 0.1));
        assert!(nearly_equal(0.5, 0.5));
        assert!(!nearly_equal(0.5, 0.5001));
    }

    #[test]
    fn eps_equals_double_precision() {
        assert!(eps_equals_f64(2.0, 2.0 + 1e-9, 1e-8));
        assert!(nearly_equal_f64(0.1 + 0.2, 0.3));
        assert!(!nearly_equal_f64(0.1, 0.2));
    }

    #[test]
    fn clamp_all_types() {
        assert_eq!(clamp(5.0_f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0_f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7_i32, 0, 10), 7);
        assert_eq!(clamp(-3_i16, -2, 2), -2);
        assert_eq!(clamp(i64::MAX, 0, 100), 100);
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(1.5_f32), 1.0);
        assert_eq!(clamp01(-0.5_f64), 0.0);
        assert_eq!(clamp01(0.25_f32), 0.25);
    }

    #[test]
    fn map_between_ranges() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map(0.0, -1.0, 1.0, 0.0, 1.0), 0.5);
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn sqrt_and_lerp() {
        assert_eq!(sqrt(16.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert!(eps_equals(to_degrees(to_radians(90.0)), 90.0, 1e-4));
    }
}
