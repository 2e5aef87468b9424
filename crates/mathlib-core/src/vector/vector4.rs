//! Four-dimensional vector.
//!
//! Used as a homogeneous coordinate by [`Matrix4f`](crate::Matrix4f):
//! converting a [`Vector3f`] sets `w = 1`, converting a [`Vector2f`] leaves
//! `z = w = 0`.

use super::{Vector, Vector2f, Vector3f, impl_vector_ops};
use crate::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable four-dimensional float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector4f {
    /// The x coordinate of this vector.
    pub x: f32,
    /// The y coordinate of this vector.
    pub y: f32,
    /// The z coordinate of this vector.
    pub z: f32,
    /// The w coordinate of this vector.
    pub w: f32,
}

impl Vector4f {
    /// Constructs a vector with the given coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// An x unit vector.
    #[must_use]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// A y unit vector.
    #[must_use]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// A z unit vector.
    #[must_use]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// A w unit vector.
    #[must_use]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Constructs a vector from a 2D vector and explicit z and w coordinates.
    #[must_use]
    pub const fn from_xy(v: Vector2f, z: f32, w: f32) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// Constructs a vector from a 3D vector and an explicit w coordinate.
    #[must_use]
    pub const fn from_xyz(v: Vector3f, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Constructs a vector from the first four values of `values`.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut v = Self::default();
        v.set_slice(values)?;
        Ok(v)
    }

    /// The length of the vector `(x, y, z, w)`.
    #[must_use]
    pub fn length_of(x: f32, y: f32, z: f32, w: f32) -> f32 {
        Self::length2_of(x, y, z, w).sqrt()
    }

    /// The squared length of the vector `(x, y, z, w)`.
    #[must_use]
    pub fn length2_of(x: f32, y: f32, z: f32, w: f32) -> f32 {
        x * x + y * y + z * z + w * w
    }

    /// Sets the coordinates of this vector to the specified values.
    pub fn set_xyzw(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Sets the coordinates from the first four values of `values`.
    ///
    /// Extra values are ignored. The vector is untouched on error.
    pub fn set_slice(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        match values {
            [x, y, z, w, ..] => Ok(self.set_xyzw(*x, *y, *z, *w)),
            _ => Err(MathError::InvalidLength {
                expected: Self::DIMENSIONS,
                actual: values.len(),
            }),
        }
    }

    /// Sets x and y from `v`; z and w become zero.
    pub fn set_vec2(&mut self, v: &Vector2f) -> &mut Self {
        self.set_vec2_zw(v, 0.0, 0.0)
    }

    pub fn set_vec2_zw(&mut self, v: &Vector2f, z: f32, w: f32) -> &mut Self {
        self.set_xyzw(v.x, v.y, z, w)
    }

    /// Sets x, y and z from `v`; w becomes one.
    pub fn set_vec3(&mut self, v: &Vector3f) -> &mut Self {
        self.set_vec3_w(v, 1.0)
    }

    pub fn set_vec3_w(&mut self, v: &Vector3f, w: f32) -> &mut Self {
        self.set_xyzw(v.x, v.y, v.z, w)
    }

    /// Individually scales the coordinates of this vector.
    pub fn scl_xyzw(&mut self, scale_x: f32, scale_y: f32, scale_z: f32, scale_w: f32) -> &mut Self {
        self.x *= scale_x;
        self.y *= scale_y;
        self.z *= scale_z;
        self.w *= scale_w;
        self
    }

    /// Individually divides the coordinates of this vector.
    pub fn div_xyzw(&mut self, scale_x: f32, scale_y: f32, scale_z: f32, scale_w: f32) -> &mut Self {
        self.x /= scale_x;
        self.y /= scale_y;
        self.z /= scale_z;
        self.w /= scale_w;
        self
    }

    /// The x, y and z coordinates, dropping w.
    #[must_use]
    pub const fn xyz(&self) -> Vector3f {
        Vector3f::new(self.x, self.y, self.z)
    }

    /// The coordinates as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Vector for Vector4f {
    const DIMENSIONS: usize = 4;

    fn apply(&mut self, mut f: impl FnMut(f32) -> f32) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self.z = f(self.z);
        self.w = f(self.w);
        self
    }

    fn combine(&mut self, v: &Self, mut f: impl FnMut(f32, f32) -> f32) -> &mut Self {
        self.x = f(self.x, v.x);
        self.y = f(self.y, v.y);
        self.z = f(self.z, v.z);
        self.w = f(self.w, v.w);
        self
    }

    fn fold_with<T>(&self, v: &Self, init: T, mut f: impl FnMut(T, f32, f32) -> T) -> T {
        let acc = f(init, self.x, v.x);
        let acc = f(acc, self.y, v.y);
        let acc = f(acc, self.z, v.z);
        f(acc, self.w, v.w)
    }
}

impl_vector_ops!(Vector4f);

impl From<Vector2f> for Vector4f {
    fn from(v: Vector2f) -> Self {
        Self::from_xy(v, 0.0, 0.0)
    }
}

impl From<Vector3f> for Vector4f {
    /// Homogeneous point: `w = 1`.
    fn from(v: Vector3f) -> Self {
        Self::from_xyz(v, 1.0)
    }
}

impl From<[f32; 4]> for Vector4f {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl fmt::Display for Vector4f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v4f(x={:?}, y={:?}, z={:?}, w={:?})",
            self.x, self.y, self.z, self.w
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
