//! # Operation Evaluation
//!
//! Structured, dimension-erased math operations. The CLI reads these from
//! JSON and evaluates them in batches:
//!
//! ```json
//! [
//!   { "op": "dot", "a": [1, 2, 3], "b": [4, 5, 6] },
//!   { "op": "inverse", "m": [3, 5, -2, 1] }
//! ]
//! ```
//!
//! Operands of binary operations must have the same dimension; a mismatch
//! yields `MathError::DimensionMismatch`.

use crate::primitives::{EPSILON, MAX_BATCH_LENGTH};
use crate::{MathError, MathValue, Matrix, MatrixValue, Vector, Vector3f, VectorValue};
use serde::{Deserialize, Serialize};

// =============================================================================
// OPERATION
// =============================================================================

/// A single operation on vectors or matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Length of `a`.
    Length { a: VectorValue },
    /// Squared length of `a`.
    Length2 { a: VectorValue },
    /// `a` scaled to unit length.
    Normalize { a: VectorValue },
    Dot { a: VectorValue, b: VectorValue },
    /// Scalar cross for 2D, vector cross for 3D.
    Cross { a: VectorValue, b: VectorValue },
    Distance { a: VectorValue, b: VectorValue },
    Lerp {
        a: VectorValue,
        b: VectorValue,
        alpha: f32,
    },
    /// `a` shortened to at most `limit`.
    Limit { a: VectorValue, limit: f32 },
    /// `a` with its length clamped into `[min, max]`.
    Clamp { a: VectorValue, min: f32, max: f32 },
    /// Whether `a` and `b` point in the same direction.
    Collinear { a: VectorValue, b: VectorValue },
    Orthogonal { a: VectorValue, b: VectorValue },
    Determinant { m: MatrixValue },
    Inverse { m: MatrixValue },
    Transpose { m: MatrixValue },
    /// Matrix product `a * b`.
    Multiply { a: MatrixValue, b: MatrixValue },
    /// Matrix-vector product `m * v`.
    Transform { m: MatrixValue, v: VectorValue },
}

impl Operation {
    /// The wire name of this operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Length { .. } => "length",
            Self::Length2 { .. } => "length2",
            Self::Normalize { .. } => "normalize",
            Self::Dot { .. } => "dot",
            Self::Cross { .. } => "cross",
            Self::Distance { .. } => "distance",
            Self::Lerp { .. } => "lerp",
            Self::Limit { .. } => "limit",
            Self::Clamp { .. } => "clamp",
            Self::Collinear { .. } => "collinear",
            Self::Orthogonal { .. } => "orthogonal",
            Self::Determinant { .. } => "determinant",
            Self::Inverse { .. } => "inverse",
            Self::Transpose { .. } => "transpose",
            Self::Multiply { .. } => "multiply",
            Self::Transform { .. } => "transform",
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Runs `$body` with `$v` bound to the concrete vector inside a `VectorValue`.
macro_rules! with_vector {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            VectorValue::V2($v) => $body,
            VectorValue::V3($v) => $body,
            VectorValue::V4($v) => $body,
        }
    };
}

/// Like `with_vector!` for two operands of the same dimension.
macro_rules! with_vector_pair {
    ($a:expr, $b:expr, ($x:ident, $y:ident) => $body:expr) => {
        match ($a, $b) {
            (VectorValue::V2($x), VectorValue::V2($y)) => $body,
            (VectorValue::V3($x), VectorValue::V3($y)) => $body,
            (VectorValue::V4($x), VectorValue::V4($y)) => $body,
            (left, right) => {
                return Err(MathError::DimensionMismatch {
                    left: left.dimension(),
                    right: right.dimension(),
                });
            }
        }
    };
}

macro_rules! with_matrix {
    ($value:expr, $m:ident => $body:expr) => {
        match $value {
            MatrixValue::M2($m) => $body,
            MatrixValue::M3($m) => $body,
            MatrixValue::M4($m) => $body,
        }
    };
}

// =============================================================================
// EVALUATOR
// =============================================================================

/// Evaluates [`Operation`]s with a fixed comparison epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    /// Tolerance used by the `collinear` and `orthogonal` predicates.
    pub epsilon: f32,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Evaluator {
    #[must_use]
    pub const fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Evaluates a single operation.
    pub fn evaluate(&self, op: &Operation) -> Result<MathValue, MathError> {
        let eps = self.epsilon;
        let value = match op {
            Operation::Length { a } => MathValue::Scalar(with_vector!(a, v => v.len())),
            Operation::Length2 { a } => MathValue::Scalar(with_vector!(a, v => v.len2())),
            Operation::Normalize { a } => with_vector!(a, v => {
                if v.is_zero() {
                    return Err(MathError::ZeroVector);
                }
                let mut out = *v;
                out.nor();
                MathValue::Vector(out.into())
            }),
            Operation::Dot { a, b } => MathValue::Scalar(with_vector_pair!(a, b, (x, y) => x.dot(y))),
            Operation::Cross { a, b } => cross(a, b)?,
            Operation::Distance { a, b } => {
                MathValue::Scalar(with_vector_pair!(a, b, (x, y) => x.dst(y)))
            }
            Operation::Lerp { a, b, alpha } => with_vector_pair!(a, b, (x, y) => {
                let mut out = *x;
                out.lerp(y, *alpha);
                MathValue::Vector(out.into())
            }),
            Operation::Limit { a, limit } => {
                if limit.is_nan() || *limit < 0.0 {
                    return Err(MathError::InvalidParameter(format!(
                        "limit {} must be non-negative",
                        limit
                    )));
                }
                with_vector!(a, v => {
                    let mut out = *v;
                    out.limit(*limit);
                    MathValue::Vector(out.into())
                })
            }
            Operation::Clamp { a, min, max } => {
                if min.is_nan() || max.is_nan() || *min < 0.0 || min > max {
                    return Err(MathError::InvalidParameter(format!(
                        "clamp range [{}, {}] must satisfy 0 <= min <= max",
                        min, max
                    )));
                }
                with_vector!(a, v => {
                    let mut out = *v;
                    out.clamp(*min, *max);
                    MathValue::Vector(out.into())
                })
            }
            Operation::Collinear { a, b } => {
                MathValue::Bool(with_vector_pair!(a, b, (x, y) => x.is_collinear_eps(y, eps)))
            }
            Operation::Orthogonal { a, b } => {
                MathValue::Bool(with_vector_pair!(a, b, (x, y) => x.is_orthogonal_eps(y, eps)))
            }
            Operation::Determinant { m } => MathValue::Scalar(with_matrix!(m, x => x.det())),
            Operation::Inverse { m } => with_matrix!(m, x => {
                let mut out = *x;
                out.inv()?;
                MathValue::Matrix(out.into())
            }),
            Operation::Transpose { m } => with_matrix!(m, x => {
                let mut out = *x;
                out.tra();
                MathValue::Matrix(out.into())
            }),
            Operation::Multiply { a, b } => MathValue::Matrix(multiply(a, b)?),
            Operation::Transform { m, v } => MathValue::Vector(transform(m, v)?),
        };
        Ok(value)
    }

    /// Evaluates every operation in order, stopping at the first error.
    ///
    /// Batches longer than [`MAX_BATCH_LENGTH`] are rejected up front.
    pub fn evaluate_batch(&self, ops: &[Operation]) -> Result<Vec<MathValue>, MathError> {
        if ops.len() > MAX_BATCH_LENGTH {
            return Err(MathError::InvalidParameter(format!(
                "batch of {} operations exceeds maximum {}",
                ops.len(),
                MAX_BATCH_LENGTH
            )));
        }
        ops.iter().map(|op| self.evaluate(op)).collect()
    }
}

fn cross(a: &VectorValue, b: &VectorValue) -> Result<MathValue, MathError> {
    match (a, b) {
        (VectorValue::V2(x), VectorValue::V2(y)) => Ok(MathValue::Scalar(x.crs(y))),
        (VectorValue::V3(x), VectorValue::V3(y)) => {
            Ok(MathValue::Vector(Vector3f::cross(x, y).into()))
        }
        (VectorValue::V4(_), VectorValue::V4(_)) => Err(MathError::InvalidParameter(
            "cross product is defined for 2D and 3D vectors only".to_string(),
        )),
        (left, right) => Err(MathError::DimensionMismatch {
            left: left.dimension(),
            right: right.dimension(),
        }),
    }
}

fn multiply(a: &MatrixValue, b: &MatrixValue) -> Result<MatrixValue, MathError> {
    match (a, b) {
        (MatrixValue::M2(x), MatrixValue::M2(y)) => Ok((*x * *y).into()),
        (MatrixValue::M3(x), MatrixValue::M3(y)) => Ok((*x * *y).into()),
        (MatrixValue::M4(x), MatrixValue::M4(y)) => Ok((*x * *y).into()),
        (left, right) => Err(MathError::DimensionMismatch {
            left: left.dimension(),
            right: right.dimension(),
        }),
    }
}

fn transform(m: &MatrixValue, v: &VectorValue) -> Result<VectorValue, MathError> {
    match (m, v) {
        (MatrixValue::M2(x), VectorValue::V2(y)) => Ok(x.transform(y).into()),
        (MatrixValue::M3(x), VectorValue::V3(y)) => Ok(x.transform(y).into()),
        (MatrixValue::M4(x), VectorValue::V4(y)) => Ok(x.transform(y).into()),
        (left, right) => Err(MathError::DimensionMismatch {
            left: left.dimension(),
            right: right.dimension(),
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================
