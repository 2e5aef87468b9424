//! Three-dimensional vector.

use super::{Vector, Vector2f, Vector4f, impl_vector_ops};
use crate::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable three-dimensional float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3f {
    /// The x coordinate of this vector.
    pub x: f32,
    /// The y coordinate of this vector.
    pub y: f32,
    /// The z coordinate of this vector.
    pub z: f32,
}

impl Vector3f {
    /// Constructs a vector with the given coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// An x unit vector.
    #[must_use]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// A y unit vector.
    #[must_use]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// A z unit vector.
    #[must_use]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Constructs a vector from a 2D vector and a z coordinate.
    #[must_use]
    pub const fn from_xy(v: Vector2f, z: f32) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Constructs a vector from the first three values of `values`.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut v = Self::default();
        v.set_slice(values)?;
        Ok(v)
    }

    /// Converts a homogeneous point back to cartesian coordinates by dividing
    /// through `w`.
    pub fn from_homogeneous(v: Vector4f) -> Result<Self, MathError> {
        if v.w == 0.0 {
            return Err(MathError::InvalidParameter(
                "homogeneous w coordinate is zero".to_string(),
            ));
        }
        Ok(Self::new(v.x / v.w, v.y / v.w, v.z / v.w))
    }

    /// Sets the coordinates of this vector to the specified values.
    pub fn set_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Sets the coordinates from the first three values of `values`.
    ///
    /// Extra values are ignored. The vector is untouched on error.
    pub fn set_slice(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        match values {
            [x, y, z, ..] => Ok(self.set_xyz(*x, *y, *z)),
            _ => Err(MathError::InvalidLength {
                expected: Self::DIMENSIONS,
                actual: values.len(),
            }),
        }
    }

    /// Individually scales the coordinates of this vector.
    pub fn scl_xyz(&mut self, scale_x: f32, scale_y: f32, scale_z: f32) -> &mut Self {
        self.x *= scale_x;
        self.y *= scale_y;
        self.z *= scale_z;
        self
    }

    /// Individually divides the coordinates of this vector.
    pub fn div_xyz(&mut self, scale_x: f32, scale_y: f32, scale_z: f32) -> &mut Self {
        self.x /= scale_x;
        self.y /= scale_y;
        self.z /= scale_z;
        self
    }

    /// Sets this vector to the cross product `self × v`.
    pub fn crs(&mut self, v: &Self) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        self.x = y * v.z - z * v.y;
        self.y = z * v.x - x * v.z;
        self.z = x * v.y - y * v.x;
        self
    }

    /// The cross product `a × b` as a new vector.
    #[must_use]
    pub fn cross(a: &Self, b: &Self) -> Self {
        let mut r = *a;
        r.crs(b);
        r
    }

    /// The coordinates as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector for Vector3f {
    const DIMENSIONS: usize = 3;

    fn apply(&mut self, mut f: impl FnMut(f32) -> f32) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self.z = f(self.z);
        self
    }

    fn combine(&mut self, v: &Self, mut f: impl FnMut(f32, f32) -> f32) -> &mut Self {
        self.x = f(self.x, v.x);
        self.y = f(self.y, v.y);
        self.z = f(self.z, v.z);
        self
    }

    fn fold_with<T>(&self, v: &Self, init: T, mut f: impl FnMut(T, f32, f32) -> T) -> T {
        let acc = f(init, self.x, v.x);
        let acc = f(acc, self.y, v.y);
        f(acc, self.z, v.z)
    }
}

impl_vector_ops!(Vector3f);

impl From<Vector2f> for Vector3f {
    /// Extends a 2D vector with `z = 0`.
    fn from(v: Vector2f) -> Self {
        Self::from_xy(v, 0.0)
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v3f(x={:?}, y={:?}, z={:?})", self.x, self.y, self.z)
    }
}

// =============================================================================
// TESTS
// =============================================================================
