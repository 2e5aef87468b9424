//! 3x3 matrix.
//!
//! Doubles as the homogeneous transform of the 2D plane: points are
//! `(x, y, 1)`, directions are `(x, y, 0)`.

use super::{Matrix, checked_inverse_det, fmt_rows, impl_matrix_ops};
use crate::{MathError, Vector2f, Vector3f};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable 3x3 float matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3f {
    values: [f32; 9],
}

impl Matrix3f {
    /// Constructs a matrix from its rows.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = rows;
        Self {
            values: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    /// Constructs a matrix from a row-major slice of exactly 9 values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut m = Self::zero();
        m.set_values(values)?;
        Ok(m)
    }

    /// Translation of the plane by `(x, y)`.
    #[must_use]
    pub const fn translation(x: f32, y: f32) -> Self {
        Self::from_rows([[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]])
    }

    /// Scaling of the plane along its axes.
    #[must_use]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation of the plane by `radians` around the origin.
    #[must_use]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Transforms the point `p`, dividing through the resulting homogeneous
    /// coordinate.
    pub fn transform_point(&self, p: &Vector2f) -> Result<Vector2f, MathError> {
        let h = self.transform(&Vector3f::from_xy(*p, 1.0));
        if h.z == 0.0 {
            return Err(MathError::InvalidParameter(
                "point maps to infinity".to_string(),
            ));
        }
        Ok(Vector2f::new(h.x / h.z, h.y / h.z))
    }

    /// Transforms the direction `d`; translation does not apply.
    #[must_use]
    pub fn transform_direction(&self, d: &Vector2f) -> Vector2f {
        let h = self.transform(&Vector3f::from_xy(*d, 0.0));
        Vector2f::new(h.x, h.y)
    }
}

impl Matrix for Matrix3f {
    type Vector = Vector3f;
    const DIMENSION: usize = 3;

    fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    fn zero() -> Self {
        Self { values: [0.0; 9] }
    }

    fn values(&self) -> &[f32] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    fn det(&self) -> f32 {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.values;
        m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }

    fn inv(&mut self) -> Result<&mut Self, MathError> {
        let inv_det = checked_inverse_det(self.det())?;
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.values;
        self.values = [
            (m11 * m22 - m12 * m21) * inv_det,
            (m02 * m21 - m01 * m22) * inv_det,
            (m01 * m12 - m02 * m11) * inv_det,
            (m12 * m20 - m10 * m22) * inv_det,
            (m00 * m22 - m02 * m20) * inv_det,
            (m02 * m10 - m00 * m12) * inv_det,
            (m10 * m21 - m11 * m20) * inv_det,
            (m01 * m20 - m00 * m21) * inv_det,
            (m00 * m11 - m01 * m10) * inv_det,
        ];
        Ok(self)
    }

    fn transform(&self, v: &Vector3f) -> Vector3f {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.values;
        Vector3f::new(
            m00 * v.x + m01 * v.y + m02 * v.z,
            m10 * v.x + m11 * v.y + m12 * v.z,
            m20 * v.x + m21 * v.y + m22 * v.z,
        )
    }
}

impl_matrix_ops!(Matrix3f, Vector3f);

impl From<[f32; 9]> for Matrix3f {
    fn from(values: [f32; 9]) -> Self {
        Self { values }
    }
}

impl fmt::Display for Matrix3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "m3f", &self.values, 3)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use std::f32::consts::FRAC_PI_2;

    const VALUES: [f32; 9] = [2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0];

    #[test]
    fn determinant_by_cofactors() {
        assert_eq!(Matrix3f::identity().det(), 1.0);
        // 2(3-2) - 0 + 1(1-3) = 0
        assert_eq!(Matrix3f::from(VALUES).det(), 0.0);
        let m = Matrix3f::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.det(), -306.0);
    }

    #[test]
    fn singular_inverse_rejected() {
        let mut m = Matrix3f::from(VALUES);
        assert!(matches!(m.inv(), Err(MathError::SingularMatrix)));
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Matrix3f::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        let mut inv = m;
        inv.inv().expect("invertible");

        assert!((m * inv).is_identity(1e-5));
        assert!((inv * m).is_identity(1e-5));
    }

    #[test]
    fn transpose_swaps_off_diagonal() {
        let mut m = Matrix3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        m.tra();
        assert_eq!(
            m,
            Matrix3f::from_rows([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
        );
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Matrix3f::translation(3.0, -1.0);
        let p = t.transform_point(&Vector2f::new(1.0, 1.0)).expect("affine");
        assert_eq!(p, Vector2f::new(4.0, 0.0));
        assert_eq!(t.transform_direction(&Vector2f::new(1.0, 1.0)), Vector2f::new(1.0, 1.0));
    }

    #[test]
    fn composition_applies_right_to_left() {
        // Rotate first, then translate.
        let m = Matrix3f::translation(10.0, 0.0) * Matrix3f::rotation(FRAC_PI_2);
        let p = m.transform_point(&Vector2f::unit_x()).expect("affine");
        assert!(p.eps_equals(&Vector2f::new(10.0, 1.0), 1e-5));
    }

    #[test]
    fn scaling_and_mul_left() {
        let mut m = Matrix3f::translation(1.0, 1.0);
        m.mul_left(&Matrix3f::scaling(2.0, 3.0));
        let p = m.transform_point(&Vector2f::zero()).expect("affine");
        assert_eq!(p, Vector2f::new(2.0, 3.0));
    }

    #[test]
    fn point_at_infinity_rejected() {
        let m = Matrix3f::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        assert!(m.transform_point(&Vector2f::new(1.0, 1.0)).is_err());
    }
}
