//! 4x4 matrix.
//!
//! The homogeneous transform of 3D space used by the render pipeline:
//! model and view matrices are built from [`translation`](Matrix4f::translation),
//! [`rotation`](Matrix4f::rotation), [`scaling`](Matrix4f::scaling) and
//! [`look_at`](Matrix4f::look_at); projections follow the right-handed
//! OpenGL clip-space convention (camera looks down `-z`, NDC depth in `[-1, 1]`).

use super::{Matrix, checked_inverse_det, fmt_rows, impl_matrix_ops};
use crate::{MathError, Vector, Vector3f, Vector4f};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

/// A mutable 4x4 float matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4f {
    values: [f32; 16],
}

impl Matrix4f {
    /// Constructs a matrix from its rows.
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ] = rows;
        Self {
            values: [
                m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
            ],
        }
    }

    /// Constructs a matrix from a row-major slice of exactly 16 values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut m = Self::zero();
        m.set_values(values)?;
        Ok(m)
    }

    /// Translation by `(x, y, z)`.
    #[must_use]
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Scaling along the axes.
    #[must_use]
    pub const fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation by `radians` around `axis` (right-hand rule).
    ///
    /// The axis does not need to be normalized but must not be zero.
    pub fn rotation(axis: &Vector3f, radians: f32) -> Result<Self, MathError> {
        if axis.is_zero() {
            return Err(MathError::ZeroVector);
        }
        let mut a = *axis;
        a.nor();
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (a.x, a.y, a.z);

        Ok(Self::from_rows([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s, 0.0],
            [y * x * t + z * s, c + y * y * t, y * z * t - x * s, 0.0],
            [z * x * t - y * s, z * y * t + x * s, c + z * z * t, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Fails with [`MathError::ZeroVector`] when `eye == target` and with
    /// [`MathError::InvalidParameter`] when `up` is parallel to the view
    /// direction.
    pub fn look_at(eye: &Vector3f, target: &Vector3f, up: &Vector3f) -> Result<Self, MathError> {
        let mut forward = *eye;
        forward.to(target);
        if forward.is_zero() {
            return Err(MathError::ZeroVector);
        }
        forward.nor();

        let mut side = Vector3f::cross(&forward, up);
        if side.is_zero() {
            return Err(MathError::InvalidParameter(
                "up vector is parallel to the view direction".to_string(),
            ));
        }
        side.nor();
        let up = Vector3f::cross(&side, &forward);

        Ok(Self::from_rows([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians and must lie in
    /// `(0, π)`; `aspect` is width over height; `0 < near < far`.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Self, MathError> {
        if fov_y.is_nan() || fov_y <= 0.0 || fov_y >= PI {
            return Err(MathError::InvalidParameter(format!(
                "field of view {} outside (0, pi)",
                fov_y
            )));
        }
        if aspect <= 0.0 || !aspect.is_finite() {
            return Err(MathError::InvalidParameter(format!(
                "aspect ratio {} must be positive",
                aspect
            )));
        }
        if near.is_nan() || far.is_nan() || near <= 0.0 || far <= near {
            return Err(MathError::InvalidParameter(format!(
                "clip planes near={} far={} must satisfy 0 < near < far",
                near, far
            )));
        }

        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = near - far;
        Ok(Self::from_rows([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / depth, 2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ]))
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] × [-near, -far]`.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, MathError> {
        let (width, height, depth) = (right - left, top - bottom, far - near);
        if width == 0.0 || height == 0.0 || depth == 0.0 {
            return Err(MathError::InvalidParameter(
                "orthographic volume has zero extent".to_string(),
            ));
        }

        Ok(Self::from_rows([
            [2.0 / width, 0.0, 0.0, -(right + left) / width],
            [0.0, 2.0 / height, 0.0, -(top + bottom) / height],
            [0.0, 0.0, -2.0 / depth, -(far + near) / depth],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Transforms the point `p` (`w = 1`) and divides through the resulting `w`.
    pub fn transform_point(&self, p: &Vector3f) -> Result<Vector3f, MathError> {
        Vector3f::from_homogeneous(self.transform(&Vector4f::from(*p)))
    }

    /// Transforms the direction `d` (`w = 0`); translation does not apply.
    #[must_use]
    pub fn transform_direction(&self, d: &Vector3f) -> Vector3f {
        self.transform(&Vector4f::from_xyz(*d, 0.0)).xyz()
    }

    /// The 2x2 sub-determinants of the top two rows (`s`) and the bottom two
    /// rows (`c`) shared by [`det`](Matrix::det) and [`inv`](Matrix::inv).
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let [
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        ] = self.values;
        let s = [
            m00 * m11 - m10 * m01,
            m00 * m12 - m10 * m02,
            m00 * m13 - m10 * m03,
            m01 * m12 - m11 * m02,
            m01 * m13 - m11 * m03,
            m02 * m13 - m12 * m03,
        ];
        let c = [
            m20 * m31 - m30 * m21,
            m20 * m32 - m30 * m22,
            m20 * m33 - m30 * m23,
            m21 * m32 - m31 * m22,
            m21 * m33 - m31 * m23,
            m22 * m33 - m32 * m23,
        ];
        (s, c)
    }
}

impl Matrix for Matrix4f {
    type Vector = Vector4f;
    const DIMENSION: usize = 4;

    fn identity() -> Self {
        Self::scaling(1.0, 1.0, 1.0)
    }

    fn zero() -> Self {
        Self { values: [0.0; 16] }
    }

    fn values(&self) -> &[f32] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    fn det(&self) -> f32 {
        let (s, c) = self.minors();
        det_from_minors(&s, &c)
    }

    fn inv(&mut self) -> Result<&mut Self, MathError> {
        let (s, c) = self.minors();
        let k = checked_inverse_det(det_from_minors(&s, &c))?;
        let [
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        ] = self.values;

        self.values = [
            (m11 * c[5] - m12 * c[4] + m13 * c[3]) * k,
            (-m01 * c[5] + m02 * c[4] - m03 * c[3]) * k,
            (m31 * s[5] - m32 * s[4] + m33 * s[3]) * k,
            (-m21 * s[5] + m22 * s[4] - m23 * s[3]) * k,
            (-m10 * c[5] + m12 * c[2] - m13 * c[1]) * k,
            (m00 * c[5] - m02 * c[2] + m03 * c[1]) * k,
            (-m30 * s[5] + m32 * s[2] - m33 * s[1]) * k,
            (m20 * s[5] - m22 * s[2] + m23 * s[1]) * k,
            (m10 * c[4] - m11 * c[2] + m13 * c[0]) * k,
            (-m00 * c[4] + m01 * c[2] - m03 * c[0]) * k,
            (m30 * s[4] - m31 * s[2] + m33 * s[0]) * k,
            (-m20 * s[4] + m21 * s[2] - m23 * s[0]) * k,
            (-m10 * c[3] + m11 * c[1] - m12 * c[0]) * k,
            (m00 * c[3] - m01 * c[1] + m02 * c[0]) * k,
            (-m30 * s[3] + m31 * s[1] - m32 * s[0]) * k,
            (m20 * s[3] - m21 * s[1] + m22 * s[0]) * k,
        ];
        Ok(self)
    }

    fn transform(&self, v: &Vector4f) -> Vector4f {
        let m = &self.values;
        let row = |r: usize| {
            m[r * 4] * v.x + m[r * 4 + 1] * v.y + m[r * 4 + 2] * v.z + m[r * 4 + 3] * v.w
        };
        Vector4f::new(row(0), row(1), row(2), row(3))
    }
}

/// Laplace expansion along the top two rows.
fn det_from_minors(s: &[f32; 6], c: &[f32; 6]) -> f32 {
    s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
}

impl_matrix_ops!(Matrix4f, Vector4f);

impl From<[f32; 16]> for Matrix4f {
    fn from(values: [f32; 16]) -> Self {
        Self { values }
    }
}

impl fmt::Display for Matrix4f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "m4f", &self.values, 4)
    }
}

// =============================================================================
// TESTS
// =============================================================================
