//! # Core Type Definitions
//!
//! This module contains the types shared across the library:
//! - Error types (`MathError`)
//! - Dimension-erased wrappers (`VectorValue`, `MatrixValue`)
//! - Evaluation results (`MathValue`)
//!
//! ## Wire Shape
//!
//! `VectorValue` and `MatrixValue` serialize as flat float lists. The list
//! length selects the variant: 2/3/4 values for vectors, 4/9/16 (row-major)
//! for matrices. Any other length is rejected with `InvalidLength`.

use crate::{Matrix, Matrix2f, Matrix3f, Matrix4f, Vector2f, Vector3f, Vector4f};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that can occur in the math library.
///
/// All fallible operations return `Result<T, MathError>`; nothing in the
/// library panics on bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// A slice or list had the wrong number of values.
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Operands of an operation have different dimensions.
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The matrix has a zero (or non-finite) determinant.
    #[error("Matrix is singular")]
    SingularMatrix,

    /// The operation needs a direction but got the zero vector.
    #[error("Zero vector has no direction")]
    ZeroVector,

    /// A parameter lies outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// VECTOR VALUE
// =============================================================================

/// A vector of any supported dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub enum VectorValue {
    V2(Vector2f),
    V3(Vector3f),
    V4(Vector4f),
}

impl VectorValue {
    /// Picks the variant from the number of values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        match values.len() {
            2 => Vector2f::from_slice(values).map(Self::V2),
            3 => Vector3f::from_slice(values).map(Self::V3),
            4 => Vector4f::from_slice(values).map(Self::V4),
            actual => Err(MathError::InvalidLength {
                expected: if actual < 2 { 2 } else { 4 },
                actual,
            }),
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        match self {
            Self::V2(_) => 2,
            Self::V3(_) => 3,
            Self::V4(_) => 4,
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        match self {
            Self::V2(v) => v.to_array().to_vec(),
            Self::V3(v) => v.to_array().to_vec(),
            Self::V4(v) => v.to_array().to_vec(),
        }
    }
}

impl TryFrom<Vec<f32>> for VectorValue {
    type Error = MathError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<VectorValue> for Vec<f32> {
    fn from(value: VectorValue) -> Self {
        value.to_vec()
    }
}

impl From<Vector2f> for VectorValue {
    fn from(v: Vector2f) -> Self {
        Self::V2(v)
    }
}

impl From<Vector3f> for VectorValue {
    fn from(v: Vector3f) -> Self {
        Self::V3(v)
    }
}

impl From<Vector4f> for VectorValue {
    fn from(v: Vector4f) -> Self {
        Self::V4(v)
    }
}

impl fmt::Display for VectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2(v) => fmt::Display::fmt(v, f),
            Self::V3(v) => fmt::Display::fmt(v, f),
            Self::V4(v) => fmt::Display::fmt(v, f),
        }
    }
}

// =============================================================================
// MATRIX VALUE
// =============================================================================

/// A square matrix of any supported dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub enum MatrixValue {
    M2(Matrix2f),
    M3(Matrix3f),
    M4(Matrix4f),
}

impl MatrixValue {
    /// Picks the variant from the number of row-major values.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        match values.len() {
            4 => Matrix2f::from_slice(values).map(Self::M2),
            9 => Matrix3f::from_slice(values).map(Self::M3),
            16 => Matrix4f::from_slice(values).map(Self::M4),
            actual => Err(MathError::InvalidLength {
                expected: match actual {
                    0..=4 => 4,
                    5..=9 => 9,
                    _ => 16,
                },
                actual,
            }),
        }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        match self {
            Self::M2(_) => 2,
            Self::M3(_) => 3,
            Self::M4(_) => 4,
        }
    }

    /// The values in row-major order.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        match self {
            Self::M2(m) => m.values(),
            Self::M3(m) => m.values(),
            Self::M4(m) => m.values(),
        }
    }
}

impl TryFrom<Vec<f32>> for MatrixValue {
    type Error = MathError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<MatrixValue> for Vec<f32> {
    fn from(value: MatrixValue) -> Self {
        value.values().to_vec()
    }
}

impl From<Matrix2f> for MatrixValue {
    fn from(m: Matrix2f) -> Self {
        Self::M2(m)
    }
}

impl From<Matrix3f> for MatrixValue {
    fn from(m: Matrix3f) -> Self {
        Self::M3(m)
    }
}

impl From<Matrix4f> for MatrixValue {
    fn from(m: Matrix4f) -> Self {
        Self::M4(m)
    }
}

impl fmt::Display for MatrixValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::M2(m) => fmt::Display::fmt(m, f),
            Self::M3(m) => fmt::Display::fmt(m, f),
            Self::M4(m) => fmt::Display::fmt(m, f),
        }
    }
}

// =============================================================================
// MATH VALUE
// =============================================================================

/// The result of evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathValue {
    Scalar(f32),
    Bool(bool),
    Vector(VectorValue),
    Matrix(MatrixValue),
}

impl MathValue {
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_vector(&self) -> Option<&VectorValue> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_matrix(&self) -> Option<&MatrixValue> {
        match self {
            Self::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for MathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{:?}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Vector(v) => fmt::Display::fmt(v, f),
            Self::Matrix(m) => fmt::Display::fmt(m, f),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
