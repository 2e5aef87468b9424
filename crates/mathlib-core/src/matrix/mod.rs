//! # Matrix Module
//!
//! Mutable square float matrices of dimension 2, 3 and 4.
//!
//! Storage is row-major: `values()[row * N + col]`. Vectors are columns, so
//! [`Matrix::transform`] computes `M * v` and composing `A.mul(&B)` applies
//! `B` first when the product transforms a vector.
//!
//! | Type        | Vector      | Typical use                      |
//! |-------------|-------------|----------------------------------|
//! | `Matrix2f`  | `Vector2f`  | 2D linear maps                   |
//! | `Matrix3f`  | `Vector3f`  | 2D homogeneous transforms        |
//! | `Matrix4f`  | `Vector4f`  | 3D model/view/projection         |

mod matrix2;
mod matrix3;
mod matrix4;

pub use matrix2::Matrix2f;
pub use matrix3::Matrix3f;
pub use matrix4::Matrix4f;

use crate::{MathError, Vector};
use std::fmt;

// =============================================================================
// MATRIX TRAIT
// =============================================================================

/// Interface shared by all square matrices.
pub trait Matrix: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// The column vector type this matrix transforms.
    type Vector: Vector;

    /// Number of rows (and columns).
    const DIMENSION: usize;

    /// The identity matrix.
    #[must_use]
    fn identity() -> Self;

    /// The zero matrix.
    #[must_use]
    fn zero() -> Self;

    /// The values in row-major order.
    fn values(&self) -> &[f32];

    fn values_mut(&mut self) -> &mut [f32];

    /// The determinant of this matrix.
    fn det(&self) -> f32;

    /// Inverts this matrix in place.
    ///
    /// Returns [`MathError::SingularMatrix`] when the determinant is zero or
    /// not finite; the matrix is left untouched in that case.
    fn inv(&mut self) -> Result<&mut Self, MathError>;

    /// Computes `M * v`.
    fn transform(&self, v: &Self::Vector) -> Self::Vector;

    /// The value at `row`, `col`, or `None` when out of range.
    fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= Self::DIMENSION || col >= Self::DIMENSION {
            return None;
        }
        self.values().get(row * Self::DIMENSION + col).copied()
    }

    /// Sets the value at `row`, `col`.
    fn set_value(&mut self, row: usize, col: usize, value: f32) -> Result<&mut Self, MathError> {
        let n = Self::DIMENSION;
        if row >= n || col >= n {
            return Err(MathError::InvalidParameter(format!(
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, n, n
            )));
        }
        if let Some(slot) = self.values_mut().get_mut(row * n + col) {
            *slot = value;
        }
        Ok(self)
    }

    /// Sets this matrix to `m`.
    fn set(&mut self, m: &Self) -> &mut Self {
        *self = *m;
        self
    }

    /// Sets the values from a row-major slice of exactly N² values.
    fn set_values(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        let expected = Self::DIMENSION * Self::DIMENSION;
        if values.len() != expected {
            return Err(MathError::InvalidLength {
                expected,
                actual: values.len(),
            });
        }
        self.values_mut().copy_from_slice(values);
        Ok(self)
    }

    fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    fn set_zero(&mut self) -> &mut Self {
        *self = Self::zero();
        self
    }

    /// Transposes this matrix in place.
    fn tra(&mut self) -> &mut Self {
        let n = Self::DIMENSION;
        let values = self.values_mut();
        for row in 0..n {
            for col in (row + 1)..n {
                values.swap(row * n + col, col * n + row);
            }
        }
        self
    }

    /// Sets this matrix to `self * m`.
    fn mul(&mut self, m: &Self) -> &mut Self {
        let lhs = *self;
        multiply_into(lhs.values(), m.values(), self.values_mut(), Self::DIMENSION);
        self
    }

    /// Sets this matrix to `m * self`.
    fn mul_left(&mut self, m: &Self) -> &mut Self {
        let rhs = *self;
        multiply_into(m.values(), rhs.values(), self.values_mut(), Self::DIMENSION);
        self
    }

    /// Adds `m` component-wise.
    fn add(&mut self, m: &Self) -> &mut Self {
        for (a, b) in self.values_mut().iter_mut().zip(m.values()) {
            *a += b;
        }
        self
    }

    /// Subtracts `m` component-wise.
    fn sub(&mut self, m: &Self) -> &mut Self {
        for (a, b) in self.values_mut().iter_mut().zip(m.values()) {
            *a -= b;
        }
        self
    }

    /// Scales every value by `scalar`.
    fn scl(&mut self, scalar: f32) -> &mut Self {
        for a in self.values_mut() {
            *a *= scalar;
        }
        self
    }

    /// The sum of the diagonal.
    fn trace(&self) -> f32 {
        let n = Self::DIMENSION;
        (0..n).filter_map(|i| self.values().get(i * n + i)).sum()
    }

    /// Whether every value is within `epsilon` of the matching value of `m`.
    fn eps_equals(&self, m: &Self, epsilon: f32) -> bool {
        self.values()
            .iter()
            .zip(m.values())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    fn is_identity(&self, epsilon: f32) -> bool {
        self.eps_equals(&Self::identity(), epsilon)
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Writes `a * b` into `out`, all row-major `n`×`n`.
fn multiply_into(a: &[f32], b: &[f32], out: &mut [f32], n: usize) {
    for row in 0..n {
        for col in 0..n {
            out[row * n + col] = (0..n).map(|k| a[row * n + k] * b[k * n + col]).sum();
        }
    }
}

/// Rejects determinants that cannot be inverted.
fn checked_inverse_det(det: f32) -> Result<f32, MathError> {
    if det == 0.0 || !det.is_finite() {
        return Err(MathError::SingularMatrix);
    }
    Ok(1.0 / det)
}

/// Writes the rows of an `n`×`n` matrix as `name[[a, b], [c, d]]`.
fn fmt_rows(f: &mut fmt::Formatter<'_>, name: &str, values: &[f32], n: usize) -> fmt::Result {
    write!(f, "{}[", name)?;
    for (i, row) in values.chunks(n).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "[")?;
        for (j, v) in row.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", v)?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

/// Implements `Matrix * Matrix` and `Matrix * Vector` for a matrix type.
macro_rules! impl_matrix_ops {
    ($ty:ty, $vec:ty) => {
        impl std::ops::Mul for $ty {
            type Output = Self;

            fn mul(mut self, rhs: Self) -> Self {
                $crate::Matrix::mul(&mut self, &rhs);
                self
            }
        }

        impl std::ops::Mul<$vec> for $ty {
            type Output = $vec;

            fn mul(self, rhs: $vec) -> $vec {
                $crate::Matrix::transform(&self, &rhs)
            }
        }

        impl std::ops::MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                $crate::Matrix::mul(self, &rhs);
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <$ty as $crate::Matrix>::identity()
            }
        }
    };
}

pub(crate) use impl_matrix_ops;
