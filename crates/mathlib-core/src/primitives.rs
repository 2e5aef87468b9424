//! # Primitives
//!
//! Compile-time constants shared by every module of the library.

/// The default epsilon value used for single precision equality comparisons.
pub const EPSILON: f32 = 1e-7;

/// The default epsilon value used for double precision equality comparisons.
pub const EPSILON_D: f64 = 1e-7;

/// Magic bytes for the binary results format header.
///
/// - File Header = Magic Bytes ("VSUM") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"VSUM";

/// Current serialization format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

/// Maximum number of operations evaluated, or values stored, in one batch.
pub const MAX_BATCH_LENGTH: usize = 10_000;
