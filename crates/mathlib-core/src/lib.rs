//! # mathlib-core
//!
//! `cg.vsu.math`: the float vector and matrix library of the VSU software
//! renderer.
//!
//! ## Conventions
//!
//! - Vectors and matrices are small `Copy` values that mutate in place;
//!   mutating methods return `&mut Self` so calls chain:
//!   `v.sub(&origin).nor().scl(2.0)`.
//! - Matrices are row-major and multiply column vectors (`M * v`).
//! - Fallible operations return `Result<T, MathError>`.
//!
//! ## Architectural Constraints
//!
//! The library is pure: no I/O, no logging, no global state. The `mathlib`
//! binary layers file handling and tracing on top.

// =============================================================================
// MODULES
// =============================================================================

pub mod formats;
pub mod matrix;
pub mod operation;
pub mod primitives;
pub mod types;
pub mod utils;
pub mod vector;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use matrix::{Matrix, Matrix2f, Matrix3f, Matrix4f};
pub use types::{MathError, MathValue, MatrixValue, VectorValue};
pub use vector::{Vector, Vector2f, Vector3f, Vector4f};

// =============================================================================
// RE-EXPORTS: Evaluation and Formats
// =============================================================================

pub use formats::{PersistenceHeader, values_from_bytes, values_to_bytes};
pub use operation::{Evaluator, Operation};
