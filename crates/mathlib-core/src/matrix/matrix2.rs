//! 2x2 matrix.

use super::{Matrix, checked_inverse_det, fmt_rows, impl_matrix_ops};
use crate::{MathError, Vector2f};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable 2x2 float matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2f {
    values: [f32; 4],
}

impl Matrix2f {
    /// Constructs a matrix from its values, row by row.
    #[must_use]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            values: [m00, m01, m10, m11],
        }
    }

    /// Constructs a matrix from a row-major slice of exactly 4 values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut m = Self::zero();
        m.set_values(values)?;
        Ok(m)
    }

    /// Counter-clockwise rotation by `radians`.
    #[must_use]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    /// Scaling along the axes.
    #[must_use]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }
}

impl Matrix for Matrix2f {
    type Vector = Vector2f;
    const DIMENSION: usize = 2;

    fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    fn zero() -> Self {
        Self { values: [0.0; 4] }
    }

    fn values(&self) -> &[f32] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    fn det(&self) -> f32 {
        let [a, b, c, d] = self.values;
        a * d - b * c
    }

    fn inv(&mut self) -> Result<&mut Self, MathError> {
        let inv_det = checked_inverse_det(self.det())?;
        let [a, b, c, d] = self.values;
        self.values = [d * inv_det, -b * inv_det, -c * inv_det, a * inv_det];
        Ok(self)
    }

    fn transform(&self, v: &Vector2f) -> Vector2f {
        let [a, b, c, d] = self.values;
        Vector2f::new(a * v.x + b * v.y, c * v.x + d * v.y)
    }
}

impl_matrix_ops!(Matrix2f, Vector2f);

impl From<[f32; 4]> for Matrix2f {
    fn from(values: [f32; 4]) -> Self {
        Self { values }
    }
}

impl fmt::Display for Matrix2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "m2f", &self.values, 2)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    const VALUES_1: [f32; 4] = [3.0, 5.0, -2.0, 1.0];
    const VALUES_2: [f32; 4] = [2.0, 4.0, -3.0, 5.0];
    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn identity_determinant_is_one() {
        let mut m = Matrix2f::zero();
        m.set_identity();
        assert_eq!(m.det(), 1.0);
    }

    #[test]
    fn det_returns_expected_value() {
        assert_eq!(Matrix2f::from(VALUES_1).det(), 13.0);
        assert_eq!(Matrix2f::from(VALUES_2).det(), 22.0);
    }

    #[test]
    fn transpose_does_not_affect_determinant() {
        let m1 = Matrix2f::from(VALUES_1);
        let mut m2 = m1;
        m2.tra();

        assert_eq!(m2, Matrix2f::new(3.0, -2.0, 5.0, 1.0));
        assert_eq!(m1.det(), m2.det());
    }

    #[test]
    fn transposed_multiplication() {
        let m1 = Matrix2f::from(VALUES_1);
        let m2 = Matrix2f::from(VALUES_2);

        let mut r1 = m1;
        r1.mul(&m2).tra();

        let mut m1t = m1;
        m1t.tra();
        let mut r2 = m2;
        r2.tra().mul(&m1t);

        assert_eq!(r1, r2);
    }

    #[test]
    fn inverse_matrix_properties() {
        let m1 = Matrix2f::from(VALUES_1);
        let mut m2 = m1;
        m2.inv().expect("invertible");

        let r1 = m1 * m2;
        let r2 = m2 * m1;

        assert!(r1.eps_equals(&r2, TOLERANCE));
        assert!(r1.is_identity(TOLERANCE));
        assert!(r2.is_identity(TOLERANCE));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let mut m = Matrix2f::new(1.0, 2.0, 2.0, 4.0);
        assert!(matches!(m.inv(), Err(MathError::SingularMatrix)));
        assert_eq!(m, Matrix2f::new(1.0, 2.0, 2.0, 4.0));
    }

    #[test]
    fn set_values_requires_exact_length() {
        let mut m = Matrix2f::identity();
        assert!(matches!(
            m.set_values(&[1.0, 2.0, 3.0]),
            Err(MathError::InvalidLength {
                expected: 4,
                actual: 3
            })
        ));
        assert!(Matrix2f::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    }

    #[test]
    fn transform_vector() {
        let m = Matrix2f::from(VALUES_1);
        assert_eq!(m * Vector2f::new(1.0, 1.0), Vector2f::new(8.0, -1.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let v = Matrix2f::rotation(std::f32::consts::FRAC_PI_2) * Vector2f::unit_x();
        assert!(v.eps_equals(&Vector2f::unit_y(), 1e-6));
    }

    #[test]
    fn get_and_trace() {
        let m = Matrix2f::from(VALUES_1);
        assert_eq!(m.get(0, 1), Some(5.0));
        assert_eq!(m.get(1, 0), Some(-2.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.trace(), 4.0);
    }

    #[test]
    fn display_format() {
        let m = Matrix2f::from(VALUES_1);
        assert_eq!(m.to_string(), "m2f[[3.0, 5.0], [-2.0, 1.0]]");
    }
}
