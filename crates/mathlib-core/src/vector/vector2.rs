//! Two-dimensional vector.

use super::{Vector, impl_vector_ops};
use crate::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable two-dimensional float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2f {
    /// The x coordinate of this vector.
    pub x: f32,
    /// The y coordinate of this vector.
    pub y: f32,
}

impl Vector2f {
    /// Constructs a vector with the given coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// An x unit vector.
    #[must_use]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// A y unit vector.
    #[must_use]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Constructs a vector from the first two values of `values`.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut v = Self::default();
        v.set_slice(values)?;
        Ok(v)
    }

    /// Sets the coordinates of this vector to the specified values.
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the coordinates from the first two values of `values`.
    ///
    /// Extra values are ignored. The vector is untouched on error.
    pub fn set_slice(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        match values {
            [x, y, ..] => Ok(self.set_xy(*x, *y)),
            _ => Err(MathError::InvalidLength {
                expected: Self::DIMENSIONS,
                actual: values.len(),
            }),
        }
    }

    /// Individually scales the coordinates of this vector.
    pub fn scl_xy(&mut self, scale_x: f32, scale_y: f32) -> &mut Self {
        self.x *= scale_x;
        self.y *= scale_y;
        self
    }

    /// Individually divides the coordinates of this vector.
    pub fn div_xy(&mut self, scale_x: f32, scale_y: f32) -> &mut Self {
        self.x /= scale_x;
        self.y /= scale_y;
        self
    }

    /// The 2D cross product, i.e. the signed area of the parallelogram
    /// spanned by this vector and `v`.
    #[must_use]
    pub fn crs(&self, v: &Self) -> f32 {
        self.x * v.y - self.y * v.x
    }

    /// The coordinates as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Vector for Vector2f {
    const DIMENSIONS: usize = 2;

    fn apply(&mut self, mut f: impl FnMut(f32) -> f32) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self
    }

    fn combine(&mut self, v: &Self, mut f: impl FnMut(f32, f32) -> f32) -> &mut Self {
        self.x = f(self.x, v.x);
        self.y = f(self.y, v.y);
        self
    }

    fn fold_with<T>(&self, v: &Self, init: T, mut f: impl FnMut(T, f32, f32) -> T) -> T {
        let acc = f(init, self.x, v.x);
        f(acc, self.y, v.y)
    }
}

impl_vector_ops!(Vector2f);

impl From<[f32; 2]> for Vector2f {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v2f(x={:?}, y={:?})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_is_zero() {
        let v = Vector2f::zero();
        assert!(v.is_zero());
        assert_eq!(v.len(), 0.0);
        assert_eq!(v, Vector2f::default());
    }

    #[test]
    fn unit_vectors_are_unit() {
        assert!(Vector2f::unit_x().is_unit());
        assert!(Vector2f::unit_y().is_unit());
        assert!(Vector2f::unit_x().is_orthogonal(&Vector2f::unit_y()));
    }

    #[test]
    fn component_constructor() {
        let v = Vector2f::new(5.0, -2.0);
        assert_eq!(v.x, 5.0);
        assert_eq!(v.y, -2.0);
    }

    #[test]
    fn slice_constructor_takes_leading_values() {
        let v = Vector2f::from_slice(&[1.0, 2.0, 3.0]).expect("two values");
        assert_eq!(v, Vector2f::new(1.0, 2.0));
    }

    #[test]
    fn slice_constructor_rejects_short_input() {
        let result = Vector2f::from_slice(&[1.0]);
        assert!(matches!(
            result,
            Err(MathError::InvalidLength {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn cross_product_sign() {
        let i = Vector2f::unit_x();
        let j = Vector2f::unit_y();
        assert_eq!(i.crs(&j), 1.0);
        assert_eq!(j.crs(&i), -1.0);
        assert_eq!(i.crs(&i), 0.0);
    }

    #[test]
    fn per_component_scale_and_divide() {
        let mut v = Vector2f::new(2.0, 3.0);
        v.scl_xy(2.0, 3.0);
        assert_eq!(v, Vector2f::new(4.0, 9.0));
        v.div_xy(4.0, 3.0);
        assert_eq!(v, Vector2f::new(1.0, 3.0));
    }

    #[test]
    fn normalize_makes_unit_length() {
        let mut v = Vector2f::new(3.0, 4.0);
        v.nor();
        assert_eq!(v, Vector2f::new(0.6, 0.8));
        assert!(v.is_unit_eps(1e-6));
    }

    #[test]
    fn display_format() {
        let v = Vector2f::new(1.0, 2.5);
        assert_eq!(v.to_string(), "v2f(x=1.0, y=2.5)");
    }
}
